use std::ops::Deref;

use mongodb::bson::doc;

use crate::db::Database;
use crate::domain::entities::Event;
use crate::errors::AppResult;
use crate::repositories::MongoRepository;

#[derive(Clone)]
pub struct EventRepository {
    inner: MongoRepository<Event>,
}

impl Deref for EventRepository {
    type Target = MongoRepository<Event>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl EventRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            inner: MongoRepository::new(database),
        }
    }

    /// 행사 날짜가 빠른 순으로 전체 행사를 조회합니다.
    pub async fn find_all(&self) -> AppResult<Vec<Event>> {
        self.find_many(doc! {}, Some(doc! { "date": 1 })).await
    }
}
