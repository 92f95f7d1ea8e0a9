//! # 공통 MongoDB 리포지토리
//!
//! 엔티티 타입 하나와 컬렉션 하나를 묶는 제네릭 CRUD 구현입니다.
//! 리소스별 리포지토리는 이 타입을 감싸고 도메인 전용 조회만 추가합니다.

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};

use crate::db::Database;
use crate::domain::entities::Entity;
use crate::errors::{AppError, AppResult};

/// 엔티티 `T`의 컬렉션에 대한 기본 CRUD 연산
pub struct MongoRepository<T: Entity> {
    collection: Collection<T>,
}

impl<T: Entity> Clone for MongoRepository<T> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
        }
    }
}

impl<T: Entity> MongoRepository<T> {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<T>(),
        }
    }

    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }

    /// 필터에 맞는 모든 문서를 조회합니다.
    ///
    /// `sort`가 주어지면 해당 순서로 정렬합니다.
    pub async fn find_many(&self, filter: Document, sort: Option<Document>) -> AppResult<Vec<T>> {
        let mut find = self.collection.find(filter);
        if let Some(sort) = sort {
            find = find.sort(sort);
        }

        let cursor = find
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<T>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 조회하고 없으면 `NotFound`를 반환합니다.
    pub async fn get(&self, id: ObjectId) -> AppResult<T> {
        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("{} 문서를 찾을 수 없습니다: {}", T::COLLECTION, id))
        })
    }

    pub async fn exists(&self, id: ObjectId) -> AppResult<bool> {
        Ok(self.count(doc! { "_id": id }).await? > 0)
    }

    /// 새 문서를 저장하고 할당된 `_id`를 채운 엔티티를 반환합니다.
    pub async fn create(&self, mut entity: T) -> AppResult<T> {
        let result = self.collection
            .insert_one(&entity)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(format!("{} 문서에 ObjectId가 할당되지 않았습니다", T::COLLECTION))
        })?;
        entity.set_id(id);

        Ok(entity)
    }

    /// `$set`으로 지정된 필드만 변경하고 변경 후 문서를 반환합니다.
    ///
    /// 변경할 필드가 없으면 현재 문서를 그대로 반환합니다.
    pub async fn update(&self, id: ObjectId, changes: Document) -> AppResult<Option<T>> {
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": changes })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 문서를 삭제합니다. 삭제된 문서가 없으면 `false`를 반환합니다.
    pub async fn delete(&self, id: ObjectId) -> AppResult<bool> {
        let result = self.collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    pub async fn delete_many(&self, filter: Document) -> AppResult<u64> {
        let result = self.collection
            .delete_many(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }

    pub async fn count(&self, filter: Document) -> AppResult<u64> {
        self.collection
            .count_documents(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
