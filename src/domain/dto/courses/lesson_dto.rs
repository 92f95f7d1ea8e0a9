//! 레슨 요청/응답 DTO
//!
//! 코스 참조는 요청에서 16진수 문자열로 받고 저장 시 `ObjectId`로 변환합니다.

use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::{parse_object_id, to_changes};
use crate::domain::entities::{ContentBlock, Entity, Lesson};
use crate::errors::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLessonRequest {
    #[validate(length(min = 1, max = 200, message = "레슨 제목은 1-200자 사이여야 합니다"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub content_blocks: Vec<ContentBlock>,

    /// 소속 코스 ID
    pub course: String,

    #[validate(range(min = 1, message = "순서는 1 이상이어야 합니다"))]
    pub order: i32,
}

impl CreateLessonRequest {
    pub fn into_entity(self, course: ObjectId) -> Lesson {
        Lesson {
            id: None,
            title: self.title,
            description: self.description,
            content_blocks: self.content_blocks,
            course,
            order: self.order,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLessonRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "레슨 제목은 1-200자 사이여야 합니다"))]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_blocks: Option<Vec<ContentBlock>>,

    #[serde(skip_serializing)]
    pub course: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "순서는 1 이상이어야 합니다"))]
    pub order: Option<i32>,
}

impl UpdateLessonRequest {
    /// 변경할 코스 ID (있는 경우)
    pub fn course_id(&self) -> AppResult<Option<ObjectId>> {
        self.course
            .as_deref()
            .map(|id| parse_object_id(id, "course"))
            .transpose()
    }

    /// `$set` 문서. 코스 참조는 `ObjectId`로 저장됩니다.
    pub fn changes(&self) -> AppResult<Document> {
        let mut changes = to_changes(self)?;
        if let Some(course) = self.course_id()? {
            changes.insert("course", course);
        }
        Ok(changes)
    }
}

/// `GET /api/lessons?course=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LessonQuery {
    pub course: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub content_blocks: Vec<ContentBlock>,
    pub course: String,
    pub order: i32,
}

impl From<Lesson> for LessonResponse {
    fn from(lesson: Lesson) -> Self {
        Self {
            id: lesson.id_string(),
            title: lesson.title,
            description: lesson.description,
            content_blocks: lesson.content_blocks,
            course: lesson.course.to_hex(),
            order: lesson.order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BlockType;

    #[test]
    fn test_create_lesson_parses_content_blocks() {
        let course = ObjectId::new();
        let json = format!(
            r#"{{
                "title": "Урок 1",
                "course": "{}",
                "order": 1,
                "contentBlocks": [
                    {{"type": "text", "content": "body", "order": 1}},
                    {{"type": "image", "content": "https://example.com/1.jpg", "order": 2, "caption": "c"}}
                ]
            }}"#,
            course.to_hex()
        );

        let request: CreateLessonRequest = serde_json::from_str(&json).unwrap();
        let course_id = parse_object_id(&request.course, "course").unwrap();
        let lesson = request.into_entity(course_id);

        assert_eq!(lesson.course, course);
        assert_eq!(lesson.content_blocks[1].kind, BlockType::Image);
        assert_eq!(lesson.content_blocks[1].caption.as_deref(), Some("c"));
    }

    #[test]
    fn test_update_lesson_course_stored_as_object_id() {
        let course = ObjectId::new();
        let request = UpdateLessonRequest {
            course: Some(course.to_hex()),
            order: Some(2),
            ..UpdateLessonRequest::default()
        };

        let changes = request.changes().unwrap();

        assert_eq!(changes.get_object_id("course").unwrap(), course);
        assert_eq!(changes.get_i32("order").unwrap(), 2);
    }

    #[test]
    fn test_update_lesson_rejects_bad_course_id() {
        let request = UpdateLessonRequest {
            course: Some("nope".to_string()),
            ..UpdateLessonRequest::default()
        };

        assert!(request.changes().is_err());
    }
}
