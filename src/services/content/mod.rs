//! 학습 콘텐츠와 커뮤니티 서비스
//!
//! | 서비스 | 쓰기 권한 |
//! |--------|-----------|
//! | [`CourseService`] (코스, 레슨) | admin, teacher |
//! | [`EventService`] | admin, teacher, moderator |
//! | [`PostService`] (게시글, 댓글) | 인증 사용자 작성, 작성자/admin/moderator 수정·삭제 |

pub mod course_service;
pub mod event_service;
pub mod post_service;

pub use course_service::CourseService;
pub use event_service::EventService;
pub use post_service::PostService;

use crate::domain::entities::Role;

pub const COURSE_EDITORS: [Role; 2] = [Role::Admin, Role::Teacher];
pub const EVENT_EDITORS: [Role; 3] = [Role::Admin, Role::Teacher, Role::Moderator];
pub const POST_MODERATORS: [Role; 2] = [Role::Admin, Role::Moderator];
