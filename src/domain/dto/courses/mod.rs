pub mod course_dto;
pub mod lesson_dto;

pub use course_dto::{CourseResponse, CreateCourseRequest, UpdateCourseRequest};
pub use lesson_dto::{CreateLessonRequest, LessonQuery, LessonResponse, UpdateLessonRequest};
