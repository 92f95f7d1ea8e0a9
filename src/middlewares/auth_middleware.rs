//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를 추출합니다.
//!
//! - `optional()`: 공개 조회와 인증 쓰기가 섞인 스코프. 토큰이 있으면 검증하고 없어도 통과시킵니다.
//! - `required()`: 스코프 전체가 인증을 요구합니다. 토큰이 없거나 틀리면 401로 끝냅니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use mongodb::bson::oid::ObjectId;

    use crate::domain::auth::AuthenticatedUser;
    use crate::domain::entities::{Entity, Role, User};
    use crate::services::auth::TokenService;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(format!("{}:{}", user.username, user.role))
    }

    async fn public() -> HttpResponse {
        HttpResponse::Ok().body("public")
    }

    fn token_service() -> TokenService {
        TokenService::new("middleware-test-secret", 1)
    }

    fn bearer_for(role: Role) -> String {
        let mut user = User::new_student(
            "user3".to_string(),
            "hash".to_string(),
            "First3".to_string(),
            "Last3".to_string(),
            "user3@example.com".to_string(),
        );
        user.role = role;
        user.set_id(ObjectId::new());

        format!("Bearer {}", token_service().generate_access_token(&user).unwrap())
    }

    #[actix_web::test]
    async fn test_optional_mode_lets_anonymous_read_through() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_service()))
                .service(
                    web::scope("/api/courses")
                        .wrap(AuthMiddleware::optional())
                        .route("", web::get().to(public))
                        .route("/me", web::get().to(whoami)),
                ),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/api/courses").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = test::call_service(&app, test::TestRequest::get().uri("/api/courses/me").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_extractor() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_service()))
                .service(
                    web::scope("/api/auth")
                        .wrap(AuthMiddleware::required())
                        .route("/me", web::get().to(whoami)),
                ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(("Authorization", bearer_for(Role::Teacher)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, web::Bytes::from_static(b"user3:teacher"));
    }

    #[actix_web::test]
    async fn test_required_mode_rejects_missing_and_forged_tokens() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_service()))
                .service(
                    web::scope("/api/users")
                        .wrap(AuthMiddleware::required())
                        .route("", web::get().to(public)),
                ),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/api/users").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let forged = test::TestRequest::get()
            .uri("/api/users")
            .insert_header(("Authorization", "Bearer not.a.jwt"))
            .to_request();
        let res = test::call_service(&app, forged).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
