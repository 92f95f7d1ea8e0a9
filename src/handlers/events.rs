//! 행사 핸들러 (`/api/events`)

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::{CreateEventRequest, EventResponse, UpdateEventRequest};
use crate::errors::AppError;
use crate::handlers::{into_payload, path_id, JsonOrForm};
use crate::state::AppState;

#[get("")]
pub async fn list_events(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let events: Vec<EventResponse> = state.events
        .list_events()
        .await?
        .into_iter()
        .map(EventResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(events))
}

#[get("/{id}")]
pub async fn get_event(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let event = state.events.get_event(path_id(&path)?).await?;

    Ok(HttpResponse::Ok().json(EventResponse::from(event)))
}

#[post("")]
pub async fn create_event(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
    payload: JsonOrForm<CreateEventRequest>,
) -> Result<HttpResponse, AppError> {
    let request = into_payload(payload);
    request.validate()?;

    let event = state.events.create_event(&current, request).await?;

    Ok(HttpResponse::Created().json(EventResponse::from(event)))
}

#[put("/{id}")]
pub async fn update_event(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
    path: web::Path<String>,
    payload: JsonOrForm<UpdateEventRequest>,
) -> Result<HttpResponse, AppError> {
    let request = into_payload(payload);
    request.validate()?;

    let event = state.events.update_event(&current, path_id(&path)?, request).await?;

    Ok(HttpResponse::Ok().json(EventResponse::from(event)))
}

#[delete("/{id}")]
pub async fn delete_event(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.events.delete_event(&current, path_id(&path)?).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "행사가 삭제되었습니다" })))
}
