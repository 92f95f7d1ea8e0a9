//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! API 서버와 시드 작업이 같은 설정 계층을 공유합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, Rate Limiting 설정
//! - [`auth_config`] - JWT 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 데이터베이스
//! export MONGO_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="uyghur_connect"
//!
//! # 보안
//! export JWT_SECRET="your-super-secret-key"
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use env_logger::Env;
use log::{error, info};

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 로거가 준비된 뒤 출력되도록 반환합니다.
pub fn load_env_file() -> Result<String, String> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv::dotenv().map(|_| ".env"),
    };

    loaded
        .map(|file| format!("{} 파일 로드 됨 (profile: {})", file, profile))
        .map_err(|e| format!("환경 파일 로드 실패 (profile: {}): {}", profile, e))
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 `RUST_LOG`를 기반으로 로깅 레벨을 설정하며,
/// 기본값은 `info,actix_web=debug` 입니다.
pub fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 환경 파일 로드와 로거 초기화를 한 번에 수행합니다.
pub fn bootstrap() {
    let env_status = load_env_file();
    init_logging();

    match env_status {
        Ok(msg) => info!("{}", msg),
        Err(msg) => error!("{}", msg),
    }
}
