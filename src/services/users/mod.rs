//! 사용자 관리 서비스 모듈
//!
//! 가입, 로그인 검증, 프로필 수정, 계정 삭제를 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost)
//! - 사용자명 중복 방지
//! - 역할/활성 상태 변경은 관리자만 가능

pub mod user_service;

pub use user_service::UserService;
