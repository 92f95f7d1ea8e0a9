//! Uyghur Connect 백엔드
//!
//! 위구르어 학습 커뮤니티를 위한 REST API 서버와 개발용 시드 배치 작업입니다.
//!
//! # Features
//!
//! - **인증**: 회원 가입, bcrypt 비밀번호 검증, HS256 JWT 발급
//! - **콘텐츠**: 코스/레슨, 행사, 게시글/댓글 CRUD와 역할 기반 쓰기 권한
//! - **사용자 관리**: 관리자 전용 목록/삭제, 본인 프로필 수정
//! - **시드**: 6개 컬렉션을 초기화하고 고정 데이터셋을 생성하는 `seed` 바이너리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 권한 검사, 참조 확인, 연쇄 삭제
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB 컬렉션 접근
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use uyghur_connect_backend::db::Database;
//! use uyghur_connect_backend::services::auth::TokenService;
//! use uyghur_connect_backend::state::AppState;
//!
//! let database = Database::from_env().await?;
//! let state = AppState::new(database, TokenService::from_env(), 4);
//! let user = state.users.authenticate("111", "123").await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod middlewares;
pub mod state;
pub mod handlers;
pub mod routes;
pub mod seed;
