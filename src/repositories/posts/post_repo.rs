use std::ops::Deref;

use mongodb::bson::{doc, Document};

use crate::db::Database;
use crate::domain::entities::{Post, PostCategory};
use crate::errors::AppResult;
use crate::repositories::MongoRepository;

#[derive(Clone)]
pub struct PostRepository {
    inner: MongoRepository<Post>,
}

impl Deref for PostRepository {
    type Target = MongoRepository<Post>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl PostRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            inner: MongoRepository::new(database),
        }
    }

    /// 최신 글 먼저. `category`가 주어지면 해당 분류만 반환합니다.
    pub async fn find_all(&self, category: Option<PostCategory>) -> AppResult<Vec<Post>> {
        let filter = category.map_or_else(Document::new, |c| doc! { "category": c.as_str() });
        self.find_many(filter, Some(doc! { "_id": -1 })).await
    }
}
