//! 에러 처리 모듈
//!
//! HTTP 계층과 시드 작업에서 공통으로 사용하는 [`AppError`]를 제공합니다.

pub mod errors;

pub use errors::*;
