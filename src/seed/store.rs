//! 시드 작업이 사용하는 저장소 경계
//!
//! 오케스트레이터는 컬렉션 단위 삭제와 단건 삽입만 필요로 하므로
//! 그 두 연산만 trait으로 노출합니다.

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Document};

use crate::db::Database;
use crate::errors::{AppError, AppResult};

/// 시드 데이터를 기록할 문서 저장소
#[async_trait]
pub trait SeedStore: Send + Sync {
    /// 컬렉션의 모든 문서를 삭제하고 삭제된 개수를 반환합니다.
    async fn clear(&self, collection: &'static str) -> AppResult<u64>;

    /// 문서를 삽입하고 저장소가 할당한 `_id`를 반환합니다.
    async fn insert(&self, collection: &'static str, document: Document) -> AppResult<ObjectId>;
}

/// MongoDB 기반 시드 저장소
pub struct MongoSeedStore {
    database: Database,
}

impl MongoSeedStore {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl SeedStore for MongoSeedStore {
    async fn clear(&self, collection: &'static str) -> AppResult<u64> {
        let result = self.database
            .get_database()
            .collection::<Document>(collection)
            .delete_many(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(format!("{} 초기화 실패: {}", collection, e)))?;

        Ok(result.deleted_count)
    }

    async fn insert(&self, collection: &'static str, document: Document) -> AppResult<ObjectId> {
        let result = self.database
            .get_database()
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(|e| AppError::DatabaseError(format!("{} 문서 삽입 실패: {}", collection, e)))?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(format!("{} 문서에 ObjectId가 할당되지 않았습니다", collection))
        })
    }
}
