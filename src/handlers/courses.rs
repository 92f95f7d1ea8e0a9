//! 코스 핸들러 (`/api/courses`)

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::{CourseResponse, CreateCourseRequest, LessonResponse, UpdateCourseRequest};
use crate::errors::AppError;
use crate::handlers::{into_payload, path_id, JsonOrForm};
use crate::state::AppState;

#[get("")]
pub async fn list_courses(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let courses: Vec<CourseResponse> = state.courses
        .list_courses()
        .await?
        .into_iter()
        .map(CourseResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(courses))
}

#[get("/{id}")]
pub async fn get_course(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let course = state.courses.get_course(path_id(&path)?).await?;

    Ok(HttpResponse::Ok().json(CourseResponse::from(course)))
}

/// 코스의 레슨 목록 (`order` 순)
#[get("/{id}/lessons")]
pub async fn get_course_lessons(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let lessons: Vec<LessonResponse> = state.courses
        .course_lessons(path_id(&path)?)
        .await?
        .into_iter()
        .map(LessonResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(lessons))
}

#[post("")]
pub async fn create_course(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
    payload: JsonOrForm<CreateCourseRequest>,
) -> Result<HttpResponse, AppError> {
    let request = into_payload(payload);
    request.validate()?;

    let course = state.courses.create_course(&current, request).await?;

    Ok(HttpResponse::Created().json(CourseResponse::from(course)))
}

#[put("/{id}")]
pub async fn update_course(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
    path: web::Path<String>,
    payload: JsonOrForm<UpdateCourseRequest>,
) -> Result<HttpResponse, AppError> {
    let request = into_payload(payload);
    request.validate()?;

    let course = state.courses.update_course(&current, path_id(&path)?, request).await?;

    Ok(HttpResponse::Ok().json(CourseResponse::from(course)))
}

#[delete("/{id}")]
pub async fn delete_course(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.courses.delete_course(&current, path_id(&path)?).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "코스가 삭제되었습니다" })))
}
