//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 권한 |
//! |--------|------|------|
//! | `GET` | `/api/users` | admin |
//! | `GET` | `/api/users/{id}` | 인증 사용자 |
//! | `PUT` | `/api/users/{id}` | 본인 또는 admin (역할/활성 상태는 admin) |
//! | `DELETE` | `/api/users/{id}` | admin |

use actix_web::{delete, get, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::{UpdateUserRequest, UserResponse};
use crate::domain::entities::Role;
use crate::errors::AppError;
use crate::handlers::{into_payload, path_id, JsonOrForm};
use crate::state::AppState;

#[get("")]
pub async fn list_users(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    current.require_any_role(&[Role::Admin])?;

    let users: Vec<UserResponse> = state.users
        .list_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

#[get("/{id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    _current: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = state.users.get_user(path_id(&path)?).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[put("/{id}")]
pub async fn update_user(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
    path: web::Path<String>,
    payload: JsonOrForm<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let request = into_payload(payload);
    request.validate()?;

    let user = state.users.update_user(&current, path_id(&path)?, request).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[delete("/{id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    current.require_any_role(&[Role::Admin])?;

    state.users.delete_user(path_id(&path)?).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "사용자가 삭제되었습니다" })))
}
