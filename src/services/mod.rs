//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리를 소유하며 [`AppState`](crate::state::AppState)에 담겨
//! 핸들러로 전달됩니다. 권한 검사와 참조 무결성 확인은 이 계층에서 수행합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let state = AppState::new(&database, TokenService::from_env(), PasswordConfig::bcrypt_cost());
//! let user = state.user_service.authenticate("111", "123").await?;
//! ```

pub mod users;
pub mod auth;
pub mod content;
