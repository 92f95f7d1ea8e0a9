use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Gender, Role};

/// 사용자 정보 수정 요청
///
/// `role`과 `active`는 관리자만 변경할 수 있습니다. `password`는 해시로 변환된 뒤 저장됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 50, message = "성은 1-50자 사이여야 합니다"))]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(skip_serializing)]
    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    /// 관리자 전용 필드를 변경하려는지 여부
    pub fn touches_admin_fields(&self) -> bool {
        self.role.is_some() || self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::to_changes;

    #[test]
    fn test_password_never_reaches_changes() {
        let request = UpdateUserRequest {
            country: Some("Kazakhstan".to_string()),
            password: Some("new-secret".to_string()),
            ..UpdateUserRequest::default()
        };

        let changes = to_changes(&request).unwrap();

        assert_eq!(changes.len(), 1);
        assert_eq!(changes.get_str("country").unwrap(), "Kazakhstan");
    }

    #[test]
    fn test_admin_fields_detected() {
        let request = UpdateUserRequest {
            role: Some(Role::Teacher),
            ..UpdateUserRequest::default()
        };

        assert!(request.touches_admin_fields());
        assert!(!UpdateUserRequest::default().touches_admin_fields());
        assert_eq!(to_changes(&request).unwrap().get_str("role").unwrap(), "teacher");
    }
}
