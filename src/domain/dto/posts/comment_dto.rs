use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Comment, Entity};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "댓글은 1-2000자 사이여야 합니다"))]
    pub content: String,
}

impl CreateCommentRequest {
    pub fn into_entity(self, author: ObjectId, post: ObjectId) -> Comment {
        Comment {
            id: None,
            content: self.content,
            author,
            post,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    pub author: String,
    pub post: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id_string(),
            content: comment.content,
            author: comment.author.to_hex(),
            post: comment.post.to_hex(),
        }
    }
}
