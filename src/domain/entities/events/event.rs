//! Event Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::impl_entity;

/// 오프라인/온라인 행사 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    /// 행사 일시
    pub date: DateTime,
    pub location: String,
    pub image: String,
    pub created_by: ObjectId,
}

impl_entity!(Event, "events");
