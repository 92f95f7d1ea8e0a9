//! 핸들러에 주입되는 애플리케이션 상태
//!
//! 하나의 [`Database`] 연결에서 모든 리포지토리와 서비스를 조립합니다.
//! `web::Data<AppState>`로 등록되어 워커 스레드 간에 공유됩니다.

use crate::db::Database;
use crate::repositories::{
    CommentRepository, CourseRepository, EventRepository, LessonRepository, PostRepository,
    UserRepository,
};
use crate::services::auth::TokenService;
use crate::services::content::{CourseService, EventService, PostService};
use crate::services::users::UserService;

#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub tokens: TokenService,
    pub users: UserService,
    pub courses: CourseService,
    pub events: EventService,
    pub posts: PostService,
}

impl AppState {
    pub fn new(database: Database, tokens: TokenService, bcrypt_cost: u32) -> Self {
        let users = UserService::new(UserRepository::new(&database), bcrypt_cost);
        let courses = CourseService::new(
            CourseRepository::new(&database),
            LessonRepository::new(&database),
        );
        let events = EventService::new(EventRepository::new(&database));
        let posts = PostService::new(
            PostRepository::new(&database),
            CommentRepository::new(&database),
        );

        Self {
            database,
            tokens,
            users,
            courses,
            events,
            posts,
        }
    }
}
