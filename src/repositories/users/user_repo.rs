//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당합니다.
//! `username`은 로그인 아이디이므로 유니크 인덱스로 보호됩니다.

use std::ops::Deref;

use mongodb::{bson::doc, options::IndexOptions, IndexModel};

use crate::db::Database;
use crate::domain::entities::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::MongoRepository;

/// 사용자 데이터 액세스 리포지토리
///
/// 기본 CRUD는 [`MongoRepository`]에 위임하고 사용자명 기반 조회와
/// 인덱스 관리만 직접 구현합니다.
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ConflictError**: 사용자명 중복
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(&database);
///
/// let created = repo.create_unique(user).await?;
/// let found = repo.find_by_username(&created.username).await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    inner: MongoRepository<User>,
}

impl Deref for UserRepository {
    type Target = MongoRepository<User>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl UserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            inner: MongoRepository::new(database),
        }
    }

    /// 사용자명으로 사용자 조회
    ///
    /// 사용자명은 시스템 전체에서 유니크하므로 최대 1개의 결과만 반환됩니다.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 가입일 순으로 전체 사용자를 조회합니다.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        self.find_many(doc! {}, Some(doc! { "createdAt": 1 })).await
    }

    /// 사용자명 중복을 확인한 뒤 새 사용자를 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 사용자명 중복
    pub async fn create_unique(&self, user: User) -> AppResult<User> {
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        self.create(user).await.map_err(|e| match e {
            // 동시 가입으로 유니크 인덱스에 걸린 경우
            AppError::DatabaseError(msg) if msg.contains("E11000") => {
                AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string())
            }
            other => other,
        })
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// 1. `username` 유니크 인덱스
    /// 2. `createdAt` 인덱스 (목록 정렬)
    ///
    /// 이미 중복 데이터가 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": 1 })
            .options(IndexOptions::builder()
                .name("created_at_asc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
