//! # Fixture Seeding Module
//!
//! 개발/데모용 고정 데이터셋으로 데이터베이스를 채우는 일회성 배치 작업입니다.
//! `seed` 바이너리가 이 모듈을 호출하고 결과를 프로세스 종료 코드로 변환합니다.
//!
//! ## 실행 흐름
//!
//! ```text
//! Connecting ─► Resetting ─► CreatingUsers ─► CreatingCourses ─► CreatingLessons
//!                                                                      │
//!      Done ◄─ CreatingComments ◄─ CreatingPosts ◄─ CreatingEvents ◄───┘
//!
//! 어느 단계에서든 에러 발생 시 ─► Failed
//! ```
//!
//! - 초기화(6개 컬렉션 전체 삭제)가 끝난 뒤에만 생성 단계가 시작됩니다.
//! - 각 단계는 생성한 문서의 `_id` 목록을 반환하고, 다음 단계는 이를 인자로 받습니다.
//! - 트랜잭션은 사용하지 않습니다. 중간 실패 시 이미 저장된 문서는 남지만,
//!   다음 실행이 초기화부터 다시 시작하므로 재실행으로 항상 같은 상태가 됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use uyghur_connect_backend::seed::{seed_with, MongoSeedStore, SeedRecipe};
//!
//! let report = seed_with(
//!     || async { Database::from_env().await.map(MongoSeedStore::new) },
//!     SeedRecipe::default(),
//!     PasswordConfig::bcrypt_cost(),
//! ).await?;
//! ```

pub mod fixtures;
pub mod orchestrator;
pub mod store;


pub use fixtures::SeedRecipe;
pub use orchestrator::{seed_with, Seeder};
pub use store::{MongoSeedStore, SeedStore};

use std::fmt;

use thiserror::Error;

use crate::errors::AppError;

/// 시드 작업의 진행 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPhase {
    Connecting,
    Resetting,
    CreatingUsers,
    CreatingCourses,
    CreatingLessons,
    CreatingEvents,
    CreatingPosts,
    CreatingComments,
    Done,
    Failed,
}

impl fmt::Display for SeedPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeedPhase::Connecting => "connecting",
            SeedPhase::Resetting => "resetting",
            SeedPhase::CreatingUsers => "creating users",
            SeedPhase::CreatingCourses => "creating courses",
            SeedPhase::CreatingLessons => "creating lessons",
            SeedPhase::CreatingEvents => "creating events",
            SeedPhase::CreatingPosts => "creating posts",
            SeedPhase::CreatingComments => "creating comments",
            SeedPhase::Done => "done",
            SeedPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// 시드 작업 실패 원인
#[derive(Debug, Error)]
pub enum SeedError {
    /// 데이터베이스에 연결하지 못함. 어떤 쓰기 작업도 수행되지 않았습니다.
    #[error("MongoDB connection error: {0}")]
    Connection(String),

    /// 초기화 또는 생성 단계에서 실패함. 이전 단계의 쓰기는 롤백되지 않습니다.
    #[error("Error during data seeding while {phase}: {source}")]
    Stage {
        phase: SeedPhase,
        #[source]
        source: AppError,
    },
}

impl SeedError {
    /// 실패가 발생한 단계
    pub fn phase(&self) -> SeedPhase {
        match self {
            SeedError::Connection(_) => SeedPhase::Connecting,
            SeedError::Stage { phase, .. } => *phase,
        }
    }

    /// 배치 작업 호출자에게 전달할 프로세스 종료 코드
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// 성공한 시드 실행에서 생성된 문서 수
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub admins: usize,
    pub users: usize,
    pub courses: usize,
    pub lessons: usize,
    pub events: usize,
    pub posts: usize,
    pub comments: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.admins + self.users + self.courses + self.lessons + self.events + self.posts + self.comments
    }
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "admins={}, users={}, courses={}, lessons={}, events={}, posts={}, comments={}",
            self.admins, self.users, self.courses, self.lessons, self.events, self.posts, self.comments
        )
    }
}
