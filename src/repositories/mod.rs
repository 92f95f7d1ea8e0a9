//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모든 리포지토리는 엔티티 타입별 [`MongoRepository`]를 감싸며,
//! 컬렉션 이름은 각 엔티티의 `Entity::COLLECTION`에서 가져옵니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::new(&database);
//! let user = user_repo.find_by_username("111").await?;
//! ```

pub mod mongo_repo;
pub mod users;
pub mod courses;
pub mod events;
pub mod posts;

pub use mongo_repo::MongoRepository;
pub use users::UserRepository;
pub use courses::{CourseRepository, LessonRepository};
pub use events::EventRepository;
pub use posts::{CommentRepository, PostRepository};
