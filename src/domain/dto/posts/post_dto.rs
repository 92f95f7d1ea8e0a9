use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Entity, Post, PostCategory};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: String,

    #[validate(length(min = 1, message = "내용을 입력해주세요"))]
    pub content: String,

    pub category: PostCategory,
}

impl CreatePostRequest {
    pub fn into_entity(self, author: ObjectId) -> Post {
        Post {
            id: None,
            title: self.title,
            content: self.content,
            category: self.category,
            author,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "내용을 입력해주세요"))]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<PostCategory>,
}

/// `GET /api/posts?category=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostQuery {
    pub category: Option<PostCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: PostCategory,
    pub author: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id_string(),
            title: post.title,
            content: post.content,
            category: post.category,
            author: post.author.to_hex(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{"title":"Пост","content":"text","category":"gossip"}"#;

        assert!(serde_json::from_str::<CreatePostRequest>(json).is_err());
    }

    #[test]
    fn test_post_query_category() {
        let query: PostQuery = serde_json::from_str(r#"{"category":"history"}"#).unwrap();

        assert_eq!(query.category, Some(PostCategory::History));
    }
}
