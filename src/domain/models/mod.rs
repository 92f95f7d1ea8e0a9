//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델을 정의합니다.
//!
//! - `auth`: 요청 단위로 추출되는 인증 사용자와 인증 모드
//! - `token`: JWT 클레임

pub mod auth;
pub mod token;
