//! 코스와 레슨 리포지토리

pub mod course_repo;
pub mod lesson_repo;

pub use course_repo::CourseRepository;
pub use lesson_repo::LessonRepository;
