use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::{to_bson_datetime, to_changes, to_rfc3339};
use crate::domain::entities::{Entity, Event};
use crate::errors::AppResult;

/// 행사 등록 요청. `date`는 RFC 3339 문자열로 받습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "행사 제목은 1-200자 사이여야 합니다"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub date: DateTime<Utc>,

    #[validate(length(min = 1, message = "장소를 입력해주세요"))]
    pub location: String,

    #[serde(default)]
    pub image: String,
}

impl CreateEventRequest {
    pub fn into_entity(self, created_by: ObjectId) -> Event {
        Event {
            id: None,
            title: self.title,
            description: self.description,
            date: to_bson_datetime(self.date),
            location: self.location,
            image: self.image,
            created_by,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "행사 제목은 1-200자 사이여야 합니다"))]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing)]
    pub date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "장소를 입력해주세요"))]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl UpdateEventRequest {
    /// `$set` 문서. 날짜는 bson 날짜 타입으로 저장됩니다.
    pub fn changes(&self) -> AppResult<Document> {
        let mut changes = to_changes(self)?;
        if let Some(date) = self.date {
            changes.insert("date", to_bson_datetime(date));
        }
        Ok(changes)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub image: String,
    pub created_by: String,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id_string(),
            title: event.title,
            description: event.description,
            date: to_rfc3339(event.date),
            location: event.location,
            image: event.image,
            created_by: event.created_by.to_hex(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_create_event_parses_rfc3339_date() {
        let json = r#"{"title":"Событие 1","date":"2026-03-21T10:00:00Z","location":"Место 1"}"#;
        let request: CreateEventRequest = serde_json::from_str(json).unwrap();

        let event = request.into_entity(ObjectId::new());

        assert_eq!(to_rfc3339(event.date), "2026-03-21T10:00:00Z");
    }

    #[test]
    fn test_update_event_date_stored_as_bson_datetime() {
        let request = UpdateEventRequest {
            date: Some(Utc::now()),
            ..UpdateEventRequest::default()
        };

        let changes = request.changes().unwrap();

        assert!(matches!(changes.get("date"), Some(Bson::DateTime(_))));
    }
}
