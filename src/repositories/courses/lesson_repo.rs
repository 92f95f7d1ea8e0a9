//! 레슨 리포지토리
//!
//! 레슨 목록은 항상 코스 안에서의 `order` 순서로 반환됩니다.

use std::ops::Deref;

use mongodb::bson::{doc, oid::ObjectId, Document};

use crate::db::Database;
use crate::domain::entities::Lesson;
use crate::errors::AppResult;
use crate::repositories::MongoRepository;

#[derive(Clone)]
pub struct LessonRepository {
    inner: MongoRepository<Lesson>,
}

impl Deref for LessonRepository {
    type Target = MongoRepository<Lesson>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl LessonRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            inner: MongoRepository::new(database),
        }
    }

    /// 레슨 목록 조회. `course`가 주어지면 해당 코스의 레슨만 반환합니다.
    pub async fn find_all(&self, course: Option<ObjectId>) -> AppResult<Vec<Lesson>> {
        let filter = course.map_or_else(Document::new, |id| doc! { "course": id });
        self.find_many(filter, Some(doc! { "course": 1, "order": 1 })).await
    }

    pub async fn find_by_course(&self, course: ObjectId) -> AppResult<Vec<Lesson>> {
        self.find_many(doc! { "course": course }, Some(doc! { "order": 1 })).await
    }

    /// 코스에 속한 레슨을 모두 삭제합니다.
    pub async fn delete_by_course(&self, course: ObjectId) -> AppResult<u64> {
        self.delete_many(doc! { "course": course }).await
    }
}
