//! Courses Entity Module
//!
//! 코스와 코스에 속한 레슨 엔티티를 정의합니다.
//! 레슨은 `course` 필드로 상위 코스의 `_id`를 참조합니다.

pub mod course;
pub mod lesson;
