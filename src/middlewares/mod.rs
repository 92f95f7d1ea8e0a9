//! 요청 파이프라인 미들웨어
//!
//! [`AuthMiddleware`]는 `Authorization: Bearer` 헤더의 JWT를 검증하고
//! [`AuthenticatedUser`](crate::domain::auth::AuthenticatedUser)를 요청 확장에 넣습니다.
//! 핸들러는 이 값을 extractor로 꺼내 씁니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
