//! Comment Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::impl_entity;

/// 게시글 댓글 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub content: String,
    pub author: ObjectId,
    /// 댓글이 달린 게시글
    pub post: ObjectId,
}

impl_entity!(Comment, "comments");
