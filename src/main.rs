//! Uyghur Connect API 서버
//!
//! 환경 설정과 로거를 초기화하고 MongoDB에 연결한 뒤 HTTP 서버를 구동합니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware, web, App, HttpServer};
use log::{error, info};
use uyghur_connect_backend::config::{self, PasswordConfig, RateLimitConfig, ServerConfig};
use uyghur_connect_backend::db::Database;
use uyghur_connect_backend::repositories::UserRepository;
use uyghur_connect_backend::routes::{configure_all_routes, configure_body_limits};
use uyghur_connect_backend::services::auth::TokenService;
use uyghur_connect_backend::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    config::bootstrap();

    info!("🚀 Uyghur Connect 백엔드 시작중...");
    info!("📡 데이터베이스 연결 중...");

    let database = Database::from_env().await.map_err(|e| {
        error!("❌ MongoDB 연결 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ MongoDB 연결 성공 ({})", database.database_name());

    if let Err(e) = UserRepository::new(&database).create_indexes().await {
        error!("❌ 인덱스 생성 실패: {}", e);
        return Err(std::io::Error::other(e.to_string()));
    }

    let tokens = TokenService::from_env();
    let state = AppState::new(database, tokens.clone(), PasswordConfig::bcrypt_cost());

    start_http_server(state, tokens).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 적용합니다.
async fn start_http_server(state: AppState, tokens: TokenService) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
    let body_limit = ServerConfig::body_limit_bytes();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second,
        rate_limit.burst_size
    );

    let state = web::Data::new(state);
    let tokens = web::Data::new(tokens);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| configure_body_limits(cfg, body_limit))
            .app_data(state.clone())
            .app_data(tokens.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 모든 Origin/메서드/헤더를 허용하는 CORS 설정
fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
