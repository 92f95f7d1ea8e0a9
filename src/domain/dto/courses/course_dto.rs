use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Course, Entity, Level};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 200, message = "코스 이름은 1-200자 사이여야 합니다"))]
    pub name: String,

    #[serde(default)]
    pub image: String,

    pub level: Level,

    /// 분 단위
    #[validate(range(min = 1, message = "기간은 1 이상이어야 합니다"))]
    pub duration: i32,

    #[serde(default)]
    pub content: String,
}

impl CreateCourseRequest {
    pub fn into_entity(self, created_by: ObjectId) -> Course {
        Course {
            id: None,
            name: self.name,
            image: self.image,
            level: self.level,
            duration: self.duration,
            content: self.content,
            created_by,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "코스 이름은 1-200자 사이여야 합니다"))]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "기간은 1 이상이어야 합니다"))]
    pub duration: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub image: String,
    pub level: Level,
    pub duration: i32,
    pub content: String,
    pub created_by: String,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id_string(),
            name: course.name,
            image: course.image,
            level: course.level,
            duration: course.duration,
            content: course.content,
            created_by: course.created_by.to_hex(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::to_changes;

    #[test]
    fn test_create_course_uses_token_author() {
        let json = r#"{"name":"Курс 9","level":"advanced","duration":40,"createdBy":"ignored"}"#;
        let request: CreateCourseRequest = serde_json::from_str(json).unwrap();
        let author = ObjectId::new();

        let course = request.into_entity(author);

        assert_eq!(course.created_by, author);
        assert_eq!(course.level, Level::Advanced);
        assert!(course.image.is_empty());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let request = CreateCourseRequest {
            name: "Курс".to_string(),
            image: String::new(),
            level: Level::Beginner,
            duration: 0,
            content: String::new(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_course_changes() {
        let request = UpdateCourseRequest {
            level: Some(Level::Intermediate),
            ..UpdateCourseRequest::default()
        };

        let changes = to_changes(&request).unwrap();

        assert_eq!(changes.len(), 1);
        assert_eq!(changes.get_str("level").unwrap(), "intermediate");
    }
}
