//! 레슨 핸들러 (`/api/lessons`)
//!
//! 콘텐츠 블록 배열을 담으므로 JSON 본문만 받습니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::{
    parse_object_id, CreateLessonRequest, LessonQuery, LessonResponse, UpdateLessonRequest,
};
use crate::errors::AppError;
use crate::handlers::path_id;
use crate::state::AppState;

#[get("")]
pub async fn list_lessons(
    state: web::Data<AppState>,
    query: web::Query<LessonQuery>,
) -> Result<HttpResponse, AppError> {
    let course = query
        .course
        .as_deref()
        .map(|id| parse_object_id(id, "course"))
        .transpose()?;

    let lessons: Vec<LessonResponse> = state.courses
        .list_lessons(course)
        .await?
        .into_iter()
        .map(LessonResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(lessons))
}

#[get("/{id}")]
pub async fn get_lesson(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let lesson = state.courses.get_lesson(path_id(&path)?).await?;

    Ok(HttpResponse::Ok().json(LessonResponse::from(lesson)))
}

#[post("")]
pub async fn create_lesson(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
    payload: web::Json<CreateLessonRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let lesson = state.courses.create_lesson(&current, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(LessonResponse::from(lesson)))
}

#[put("/{id}")]
pub async fn update_lesson(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdateLessonRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let lesson = state.courses
        .update_lesson(&current, path_id(&path)?, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(LessonResponse::from(lesson)))
}

#[delete("/{id}")]
pub async fn delete_lesson(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.courses.delete_lesson(&current, path_id(&path)?).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "레슨이 삭제되었습니다" })))
}
