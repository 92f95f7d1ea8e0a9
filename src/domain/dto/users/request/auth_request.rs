//! 가입/로그인 요청 DTO

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::Gender;

/// 회원 가입 요청
///
/// 역할은 요청으로 받지 않으며 항상 `student`로 생성됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 30, message = "사용자명은 3-30자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "성은 1-50자 사이여야 합니다"))]
    pub last_name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub gender: Option<Gender>,
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명에는 공백을 사용할 수 없습니다".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            username: "aynur".to_string(),
            password: "secret1".to_string(),
            first_name: "Aynur".to_string(),
            last_name: "Tursun".to_string(),
            email: "aynur@example.com".to_string(),
            phone: None,
            country: None,
            language: None,
            gender: None,
        }
    }

    #[test]
    fn test_valid_register_request() {
        assert!(register_request().validate().is_ok());
    }

    #[test]
    fn test_short_username_rejected() {
        let request = RegisterRequest {
            username: "ab".to_string(),
            ..register_request()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn test_malformed_email_rejected() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            ..register_request()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_short_password_rejected() {
        let request = RegisterRequest {
            password: "12345".to_string(),
            ..register_request()
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_accepts_camel_case_json() {
        let json = r#"{
            "username": "user9",
            "password": "password123",
            "firstName": "First9",
            "lastName": "Last9",
            "email": "user9@example.com",
            "gender": "female"
        }"#;

        let request: RegisterRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.first_name, "First9");
        assert_eq!(request.gender, Some(Gender::Female));
        assert!(request.phone.is_none());
    }
}
