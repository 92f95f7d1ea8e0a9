//! API 라우트 설정 모듈
//!
//! 리소스별 스코프를 구성하고 인증 미들웨어 레벨을 지정합니다.
//!
//! | 스코프 | 미들웨어 | 비고 |
//! |--------|----------|------|
//! | `/api/auth` | `AuthMiddleware::optional()` | `/me`만 토큰 필요 (extractor) |
//! | `/api/courses`, `/api/lessons`, `/api/events`, `/api/posts` | `AuthMiddleware::optional()` | 조회는 공개, 쓰기는 토큰 필요 |
//! | `/api/users` | `AuthMiddleware::required()` | 전체 인증 필요 |
//!
//! Optional 스코프에서 토큰이 필요한 핸들러는 [`AuthenticatedUser`](crate::domain::auth::AuthenticatedUser)
//! extractor로 401을 반환하고, 역할 검사는 서비스 계층에서 수행합니다.
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use crate::state::AppState;

/// 요청 본문 크기 제한을 등록합니다
///
/// `JsonOrForm` extractor는 본문 전체를 먼저 버퍼링하므로
/// Json/Form 설정과 함께 `PayloadConfig`도 같은 한도로 맞춥니다.
pub fn configure_body_limits(cfg: &mut web::ServiceConfig, limit: usize) {
    cfg.app_data(web::PayloadConfig::new(limit))
        .app_data(web::JsonConfig::default().limit(limit))
        .app_data(web::FormConfig::default().limit(limit));
}

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(root);
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_course_routes(cfg);
    configure_event_routes(cfg);
    configure_post_routes(cfg);
}

/// 인증 관련 라우트
///
/// ```bash
/// curl -X POST http://localhost:8080/api/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"username":"111","password":"123"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .wrap(AuthMiddleware::optional())
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::me)
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

/// 코스와 레슨 라우트
fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/courses")
            .wrap(AuthMiddleware::optional())
            .service(handlers::courses::list_courses)
            .service(handlers::courses::get_course_lessons)
            .service(handlers::courses::get_course)
            .service(handlers::courses::create_course)
            .service(handlers::courses::update_course)
            .service(handlers::courses::delete_course)
    );

    cfg.service(
        web::scope("/api/lessons")
            .wrap(AuthMiddleware::optional())
            .service(handlers::lessons::list_lessons)
            .service(handlers::lessons::get_lesson)
            .service(handlers::lessons::create_lesson)
            .service(handlers::lessons::update_lesson)
            .service(handlers::lessons::delete_lesson)
    );
}

fn configure_event_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/events")
            .wrap(AuthMiddleware::optional())
            .service(handlers::events::list_events)
            .service(handlers::events::get_event)
            .service(handlers::events::create_event)
            .service(handlers::events::update_event)
            .service(handlers::events::delete_event)
    );
}

/// 게시글과 댓글 라우트
fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/posts")
            .wrap(AuthMiddleware::optional())
            .service(handlers::posts::list_posts)
            .service(handlers::posts::list_comments)
            .service(handlers::posts::add_comment)
            .service(handlers::posts::delete_comment)
            .service(handlers::posts::get_post)
            .service(handlers::posts::create_post)
            .service(handlers::posts::update_post)
            .service(handlers::posts::delete_post)
    );
}

#[get("/")]
async fn root() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Uyghur Connect Backend API")
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 데이터베이스 ping 결과를 함께 반환하며, ping 실패 시 503을 응답합니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "uyghur_connect_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "database": { "name": "uyghur_connect", "status": "up" }
/// }
/// ```
#[get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let (status, database) = match state.database.ping().await {
        Ok(()) => ("healthy", json!({ "name": state.database.database_name(), "status": "up" })),
        Err(e) => {
            log::warn!("헬스체크 DB ping 실패: {}", e);
            ("degraded", json!({ "name": state.database.database_name(), "status": "down", "error": e.to_string() }))
        }
    };

    let body = json!({
        "status": status,
        "service": "uyghur_connect_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "database": database,
    });

    if status == "healthy" {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde::Deserialize;

    use crate::config::ServerConfig;
    use crate::handlers::{into_payload, JsonOrForm};

    #[derive(Deserialize)]
    struct Note {
        content: String,
    }

    async fn note_length(payload: JsonOrForm<Note>) -> HttpResponse {
        HttpResponse::Ok().body(into_payload(payload).content.len().to_string())
    }

    fn note_app_config(cfg: &mut web::ServiceConfig) {
        configure_body_limits(cfg, ServerConfig::body_limit_bytes());
        cfg.route("/notes", web::post().to(note_length));
    }

    #[actix_web::test]
    async fn test_root_returns_greeting() {
        let app = test::init_service(App::new().service(root)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, web::Bytes::from_static(b"Uyghur Connect Backend API"));
    }

    #[actix_web::test]
    async fn test_users_scope_requires_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(crate::services::auth::TokenService::new("route-test", 1)))
                .configure(configure_user_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_json_body_over_default_payload_limit_is_accepted() {
        let app = test::init_service(App::new().configure(note_app_config)).await;

        let content = "a".repeat(1024 * 1024);
        let req = test::TestRequest::post()
            .uri("/notes")
            .set_json(serde_json::json!({ "content": content }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, web::Bytes::from((1024 * 1024).to_string()));
    }

    #[actix_web::test]
    async fn test_form_body_over_default_payload_limit_is_accepted() {
        let app = test::init_service(App::new().configure(note_app_config)).await;

        let req = test::TestRequest::post()
            .uri("/notes")
            .set_form([("content", "b".repeat(512 * 1024))])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_body_over_ten_megabytes_is_rejected() {
        let app = test::init_service(App::new().configure(note_app_config)).await;

        let content = "c".repeat(ServerConfig::body_limit_bytes() + 1);
        let req = test::TestRequest::post()
            .uri("/notes")
            .set_json(serde_json::json!({ "content": content }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
