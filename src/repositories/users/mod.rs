//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)를 통해 MongoDB 기반 사용자 데이터를 관리합니다.

pub mod user_repo;

pub use user_repo::UserRepository;
