//! 게시글/댓글 핸들러 (`/api/posts`)

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::{
    parse_object_id, CommentResponse, CreateCommentRequest, CreatePostRequest, PostQuery,
    PostResponse, UpdatePostRequest,
};
use crate::errors::AppError;
use crate::handlers::{into_payload, path_id, JsonOrForm};
use crate::state::AppState;

#[get("")]
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> Result<HttpResponse, AppError> {
    let posts: Vec<PostResponse> = state.posts
        .list_posts(query.category)
        .await?
        .into_iter()
        .map(PostResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

#[get("/{id}")]
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post = state.posts.get_post(path_id(&path)?).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

#[post("")]
pub async fn create_post(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
    payload: JsonOrForm<CreatePostRequest>,
) -> Result<HttpResponse, AppError> {
    let request = into_payload(payload);
    request.validate()?;

    let post = state.posts.create_post(&current, request).await?;

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

#[put("/{id}")]
pub async fn update_post(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
    path: web::Path<String>,
    payload: JsonOrForm<UpdatePostRequest>,
) -> Result<HttpResponse, AppError> {
    let request = into_payload(payload);
    request.validate()?;

    let post = state.posts.update_post(&current, path_id(&path)?, request).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

#[delete("/{id}")]
pub async fn delete_post(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.posts.delete_post(&current, path_id(&path)?).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "게시글이 삭제되었습니다" })))
}

#[get("/{id}/comments")]
pub async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let comments: Vec<CommentResponse> = state.posts
        .list_comments(path_id(&path)?)
        .await?
        .into_iter()
        .map(CommentResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(comments))
}

#[post("/{id}/comments")]
pub async fn add_comment(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
    path: web::Path<String>,
    payload: JsonOrForm<CreateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    let request = into_payload(payload);
    request.validate()?;

    let comment = state.posts.add_comment(&current, path_id(&path)?, request).await?;

    Ok(HttpResponse::Created().json(CommentResponse::from(comment)))
}

#[delete("/{id}/comments/{comment_id}")]
pub async fn delete_comment(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (post_id, comment_id) = path.into_inner();
    let post = path_id(&post_id)?;
    let comment = parse_object_id(&comment_id, "comment_id")?;

    state.posts.delete_comment(&current, post, comment).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "댓글이 삭제되었습니다" })))
}
