use serde::{Deserialize, Serialize};

use crate::domain::dto::to_rfc3339;
use crate::domain::entities::{Entity, Gender, Role, User};

/// 사용자 응답 DTO. 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub country: String,
    pub language: String,
    pub role: Role,
    pub active: bool,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let id = user.id_string();
        let User {
            username,
            first_name,
            last_name,
            phone,
            country,
            language,
            role,
            active,
            email,
            gender,
            created_at,
            ..
        } = user;

        Self {
            id,
            username,
            first_name,
            last_name,
            phone,
            country,
            language,
            role,
            active,
            email,
            gender,
            created_at: to_rfc3339(created_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_hides_password_hash() {
        let mut user = User::new_student(
            "aynur".to_string(),
            "$2b$04$hash".to_string(),
            "Aynur".to_string(),
            "Tursun".to_string(),
            "aynur@example.com".to_string(),
        );
        user.set_id(mongodb::bson::oid::ObjectId::new());

        let json = serde_json::to_value(UserResponse::from(user.clone())).unwrap();

        assert_eq!(json["_id"], user.id_string());
        assert_eq!(json["role"], "student");
        assert_eq!(json["firstName"], "Aynur");
        assert!(json.get("passwordHash").is_none());
    }
}
