//! User Entity Implementation
//!
//! 플랫폼 사용자(관리자, 학생, 교사, 모더레이터)를 표현하는 엔티티입니다.

use std::fmt;

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::impl_entity;

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
    Teacher,
    Moderator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Moderator => "moderator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// 사용자 엔티티
///
/// `username`은 유니크 인덱스로 보호됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 로그인 아이디 (unique)
    pub username: String,
    /// bcrypt 해시
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub language: String,
    pub role: Role,
    /// 계정 활성화 여부
    pub active: bool,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub created_at: DateTime,
}

impl_entity!(User, "users");

impl User {
    /// 새 학생 계정을 생성합니다. 연락처 정보는 비어 있는 상태로 시작합니다.
    pub fn new_student(
        username: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        email: String,
    ) -> Self {
        Self {
            id: None,
            username,
            password_hash,
            first_name,
            last_name,
            phone: String::new(),
            country: String::new(),
            language: String::new(),
            role: Role::Student,
            active: true,
            email,
            gender: None,
            created_at: DateTime::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_role_serializes_lowercase() {
        let value = serde_json::to_value(Role::Moderator).unwrap();
        assert_eq!(value, serde_json::json!("moderator"));
        assert_eq!(Role::Teacher.to_string(), "teacher");
    }

    #[test]
    fn test_user_document_uses_camel_case_fields() {
        let user = User::new_student(
            "user1".to_string(),
            "hash".to_string(),
            "First1".to_string(),
            "Last1".to_string(),
            "user1@example.com".to_string(),
        );

        let document = bson::to_document(&user).unwrap();

        assert!(document.contains_key("passwordHash"));
        assert!(document.contains_key("firstName"));
        assert!(document.contains_key("createdAt"));
        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("role").unwrap(), "student");
    }
}
