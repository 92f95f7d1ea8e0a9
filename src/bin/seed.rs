//! 개발용 고정 데이터셋 시드 배치
//!
//! ```bash
//! PROFILE=dev cargo run --bin seed
//! ```
//!
//! 6개 컬렉션을 비운 뒤 관리자, 사용자, 코스, 레슨, 행사, 게시글, 댓글을 생성합니다.
//! 성공 시 종료 코드 0, 실패 시 1을 반환합니다.

use std::process::ExitCode;

use log::{error, info};
use uyghur_connect_backend::config::{self, PasswordConfig};
use uyghur_connect_backend::db::Database;
use uyghur_connect_backend::seed::{seed_with, MongoSeedStore, SeedRecipe};

#[actix_web::main]
async fn main() -> ExitCode {
    config::bootstrap();

    let result = seed_with(
        || async { Database::from_env().await.map(MongoSeedStore::new) },
        SeedRecipe::default(),
        PasswordConfig::bcrypt_cost(),
    )
    .await;

    match result {
        Ok(report) => {
            info!("✅ 총 {}개 문서 생성", report.total());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
