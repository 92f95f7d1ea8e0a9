use std::ops::Deref;

use mongodb::bson::doc;

use crate::db::Database;
use crate::domain::entities::Course;
use crate::errors::AppResult;
use crate::repositories::MongoRepository;

#[derive(Clone)]
pub struct CourseRepository {
    inner: MongoRepository<Course>,
}

impl Deref for CourseRepository {
    type Target = MongoRepository<Course>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl CourseRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            inner: MongoRepository::new(database),
        }
    }

    /// 등록 순(`_id` 오름차순)으로 전체 코스를 조회합니다.
    pub async fn find_all(&self) -> AppResult<Vec<Course>> {
        self.find_many(doc! {}, Some(doc! { "_id": 1 })).await
    }
}
