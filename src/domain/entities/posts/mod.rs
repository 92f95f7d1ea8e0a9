//! Posts Entity Module
//!
//! 커뮤니티 게시글과 댓글 엔티티를 정의합니다.
//! 댓글은 `post` 필드로 게시글을, `author` 필드로 작성자를 참조합니다.

pub mod post;
pub mod comment;
