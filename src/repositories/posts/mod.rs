//! 커뮤니티 게시글과 댓글 리포지토리

pub mod post_repo;
pub mod comment_repo;

pub use post_repo::PostRepository;
pub use comment_repo::CommentRepository;
