//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer
//! ├── entities  - MongoDB 문서와 매핑되는 엔티티 (User, Course, Lesson, Event, Post, Comment)
//! ├── dto       - 요청/응답 객체와 검증 규칙
//! └── models    - 인증 사용자, JWT 클레임 등 영속되지 않는 모델
//! ```
//!
//! 엔티티는 저장 형식(camelCase, `ObjectId` 참조)을 그대로 따르고,
//! DTO는 API 경계에서 ID를 16진수 문자열로 바꿉니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use models::*;
