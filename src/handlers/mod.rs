//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다.
//!
//! ```text
//! Client ──► Routes ──► AuthMiddleware ──► Handlers (이 모듈) ──► Services ──► Repositories ──► MongoDB
//! ```
//!
//! 핸들러는 요청 본문 검증, 경로 ID 파싱, 응답 DTO 변환만 담당하고
//! 권한 검사와 참조 확인은 서비스 계층에 맡깁니다.
//! 모든 에러는 [`AppError`](crate::errors::AppError)로 반환되어 `{"error": ...}` JSON이 됩니다.

pub mod auth;
pub mod users;
pub mod courses;
pub mod lessons;
pub mod events;
pub mod posts;

use actix_web::{web, Either};
use mongodb::bson::oid::ObjectId;

use crate::domain::dto::parse_object_id;
use crate::errors::AppResult;

/// JSON 또는 `application/x-www-form-urlencoded` 본문
pub type JsonOrForm<T> = Either<web::Json<T>, web::Form<T>>;

/// 본문 형식과 무관하게 요청 DTO를 꺼냅니다.
pub fn into_payload<T>(payload: JsonOrForm<T>) -> T {
    match payload {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

/// 경로의 `{id}` 세그먼트를 `ObjectId`로 변환합니다.
pub fn path_id(path: &str) -> AppResult<ObjectId> {
    parse_object_id(path, "id")
}
