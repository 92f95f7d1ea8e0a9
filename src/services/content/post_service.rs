//! 게시글/댓글 서비스
//!
//! 인증된 사용자는 누구나 글과 댓글을 쓸 수 있습니다.
//! 수정과 삭제는 작성자 본인 또는 관리자/모더레이터만 가능합니다.

use mongodb::bson::oid::ObjectId;

use crate::domain::dto::{to_changes, CreateCommentRequest, CreatePostRequest, UpdatePostRequest};
use crate::domain::entities::{Comment, Post, PostCategory};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::repositories::{CommentRepository, PostRepository};

use super::POST_MODERATORS;

#[derive(Clone)]
pub struct PostService {
    posts: PostRepository,
    comments: CommentRepository,
}

impl PostService {
    pub fn new(posts: PostRepository, comments: CommentRepository) -> Self {
        Self { posts, comments }
    }

    pub async fn list_posts(&self, category: Option<PostCategory>) -> AppResult<Vec<Post>> {
        self.posts.find_all(category).await
    }

    pub async fn get_post(&self, id: ObjectId) -> AppResult<Post> {
        self.posts.get(id).await
    }

    pub async fn create_post(&self, actor: &AuthenticatedUser, request: CreatePostRequest) -> AppResult<Post> {
        let post = self.posts.create(request.into_entity(actor.object_id()?)).await?;
        log::info!("📝 게시글 작성: {} ({})", post.title, actor.username);

        Ok(post)
    }

    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        id: ObjectId,
        request: UpdatePostRequest,
    ) -> AppResult<Post> {
        let post = self.posts.get(id).await?;
        actor.require_owner_or(post.author, &POST_MODERATORS)?;

        self.posts
            .update(id, to_changes(&request)?)
            .await?
            .ok_or_else(|| post_not_found(id))
    }

    /// 게시글과 그 댓글을 함께 삭제합니다.
    pub async fn delete_post(&self, actor: &AuthenticatedUser, id: ObjectId) -> AppResult<()> {
        let post = self.posts.get(id).await?;
        actor.require_owner_or(post.author, &POST_MODERATORS)?;

        self.posts.delete(id).await?;
        let comments = self.comments.delete_by_post(id).await?;
        log::info!("🗑️ 게시글 삭제: {} (댓글 {}개 함께 삭제)", id, comments);

        Ok(())
    }

    pub async fn list_comments(&self, post: ObjectId) -> AppResult<Vec<Comment>> {
        self.ensure_post(post).await?;
        self.comments.find_by_post(post).await
    }

    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        post: ObjectId,
        request: CreateCommentRequest,
    ) -> AppResult<Comment> {
        self.ensure_post(post).await?;

        self.comments
            .create(request.into_entity(actor.object_id()?, post))
            .await
    }

    /// 댓글 삭제. 댓글이 해당 게시글에 속하지 않으면 404입니다.
    pub async fn delete_comment(&self, actor: &AuthenticatedUser, post: ObjectId, id: ObjectId) -> AppResult<()> {
        let comment = self.comments
            .find_by_id(id)
            .await?
            .filter(|c| c.post == post)
            .ok_or_else(|| AppError::NotFound(format!("댓글을 찾을 수 없습니다: {}", id)))?;

        actor.require_owner_or(comment.author, &POST_MODERATORS)?;

        self.comments.delete(id).await?;
        Ok(())
    }

    async fn ensure_post(&self, id: ObjectId) -> AppResult<()> {
        if self.posts.exists(id).await? {
            Ok(())
        } else {
            Err(post_not_found(id))
        }
    }
}

fn post_not_found(id: ObjectId) -> AppError {
    AppError::NotFound(format!("게시글을 찾을 수 없습니다: {}", id))
}
