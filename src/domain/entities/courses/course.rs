//! Course Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::impl_entity;

/// 코스 난이도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// 위치 기반 순환 할당에 사용하는 고정 순서
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
}

/// 코스 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// 대표 이미지 URL
    pub image: String,
    pub level: Level,
    /// 수강 기간 (일)
    pub duration: i32,
    /// 코스 설명
    pub content: String,
    /// 코스를 만든 사용자
    pub created_by: ObjectId,
}

impl_entity!(Course, "courses");
