use std::ops::Deref;

use mongodb::bson::{doc, oid::ObjectId};

use crate::db::Database;
use crate::domain::entities::Comment;
use crate::errors::AppResult;
use crate::repositories::MongoRepository;

#[derive(Clone)]
pub struct CommentRepository {
    inner: MongoRepository<Comment>,
}

impl Deref for CommentRepository {
    type Target = MongoRepository<Comment>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl CommentRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            inner: MongoRepository::new(database),
        }
    }

    /// 게시글의 댓글을 작성 순으로 조회합니다.
    pub async fn find_by_post(&self, post: ObjectId) -> AppResult<Vec<Comment>> {
        self.find_many(doc! { "post": post }, Some(doc! { "_id": 1 })).await
    }

    pub async fn delete_by_post(&self, post: ObjectId) -> AppResult<u64> {
        self.delete_many(doc! { "post": post }).await
    }
}
