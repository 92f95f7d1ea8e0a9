//! Users Entity Module
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new_student(
//!     "user1".to_string(),
//!     password_hash,
//!     "First".to_string(),
//!     "Last".to_string(),
//!     "user1@example.com".to_string(),
//! );
//! ```

pub mod user;
