pub mod post_dto;
pub mod comment_dto;

pub use post_dto::{CreatePostRequest, PostQuery, PostResponse, UpdatePostRequest};
pub use comment_dto::{CommentResponse, CreateCommentRequest};
