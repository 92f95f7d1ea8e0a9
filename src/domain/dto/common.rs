//! DTO 변환에 공통으로 쓰이는 헬퍼

use mongodb::bson::{self, oid::ObjectId, DateTime, Document};
use serde::Serialize;

use crate::errors::{AppError, AppResult};

/// 16진수 문자열을 `ObjectId`로 변환합니다. 형식이 틀리면 400 응답이 됩니다.
pub fn parse_object_id(value: &str, field: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(value.trim())
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 {} 형식입니다: {}", field, value)))
}

/// 수정 요청을 `$set`에 넣을 문서로 변환합니다.
///
/// `None` 필드는 `skip_serializing_if`로 빠지므로 값이 있는 필드만 남습니다.
pub fn to_changes<T: Serialize>(request: &T) -> AppResult<Document> {
    bson::to_document(request)
        .map_err(|e| AppError::InternalError(format!("변경 문서 생성 실패: {}", e)))
}

/// bson 날짜를 RFC 3339 문자열로 변환합니다.
pub fn to_rfc3339(date: DateTime) -> String {
    date.try_to_rfc3339_string().unwrap_or_default()
}

/// chrono 시각을 bson 날짜로 변환합니다.
pub fn to_bson_datetime(date: chrono::DateTime<chrono::Utc>) -> DateTime {
    DateTime::from_millis(date.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Patch {
        #[serde(skip_serializing_if = "Option::is_none")]
        first_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        last_name: Option<String>,
    }

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();

        assert_eq!(parse_object_id(&id.to_hex(), "id").unwrap(), id);
        assert!(matches!(
            parse_object_id("not-an-id", "course"),
            Err(AppError::ValidationError(msg)) if msg.contains("course")
        ));
    }

    #[test]
    fn test_changes_skip_absent_fields() {
        let patch = Patch {
            first_name: Some("Aygul".to_string()),
            last_name: None,
        };

        let changes = to_changes(&patch).unwrap();

        assert_eq!(changes.get_str("firstName").unwrap(), "Aygul");
        assert!(!changes.contains_key("lastName"));
    }

    #[test]
    fn test_datetime_conversion_keeps_millis() {
        let now = chrono::Utc::now();
        let converted = to_bson_datetime(now);

        assert_eq!(converted.timestamp_millis(), now.timestamp_millis());
        assert!(to_rfc3339(converted).starts_with(&now.format("%Y-%m-%d").to_string()));
    }
}
