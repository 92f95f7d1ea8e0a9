//! Post Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::impl_entity;

/// 게시글 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    Question,
    Discussion,
    News,
    History,
}

impl PostCategory {
    pub const ALL: [PostCategory; 4] = [
        PostCategory::Question,
        PostCategory::Discussion,
        PostCategory::News,
        PostCategory::History,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::Question => "question",
            PostCategory::Discussion => "discussion",
            PostCategory::News => "news",
            PostCategory::History => "history",
        }
    }
}

/// 커뮤니티 게시글 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub content: String,
    pub category: PostCategory,
    /// 작성자
    pub author: ObjectId,
}

impl_entity!(Post, "posts");
