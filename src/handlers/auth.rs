//! # Authentication Handlers
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/auth/register` | 학생 계정 가입 (201) |
//! | `POST` | `/api/auth/login` | 로그인, JWT 발급 |
//! | `GET` | `/api/auth/me` | 현재 사용자 정보 |

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::errors::AppError;
use crate::handlers::{into_payload, JsonOrForm};
use crate::state::AppState;

/// 회원 가입
///
/// ```bash
/// curl -X POST http://localhost:8080/api/auth/register \
///   -H "Content-Type: application/json" \
///   -d '{"username":"aynur","password":"secret1","firstName":"Aynur","lastName":"Tursun","email":"aynur@example.com"}'
/// ```
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: JsonOrForm<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let request = into_payload(payload);
    request.validate()?;

    let user = state.users.register(request).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// 로그인
///
/// 성공 시 Bearer 토큰과 사용자 정보를 반환합니다.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: JsonOrForm<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = into_payload(payload);
    request.validate()?;

    let user = state.users.authenticate(&request.username, &request.password).await?;
    let token = state.tokens.generate_access_token(&user).map_err(|e| {
        log::error!("토큰 생성 실패 - 사용자: {}, 에러: {}", request.username, e);
        e
    })?;

    log::info!("🔑 로그인: {} ({})", user.username, user.role);

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.expires_in(),
        user: UserResponse::from(user),
    }))
}

/// 현재 사용자 정보 조회
///
/// 토큰이 아니라 데이터베이스의 최신 정보를 반환합니다.
#[get("/me")]
pub async fn me(
    state: web::Data<AppState>,
    current: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = state.users
        .get_user(current.object_id()?)
        .await
        .map_err(|e| match e {
            AppError::NotFound(_) => AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string()),
            other => other,
        })?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
