//! JWT 인증 토큰 클레임

use serde::{Deserialize, Serialize};

use crate::domain::entities::Role;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `username`, `role`: 권한 검사에 쓰이는 사용자 정보
/// - `iat` / `exp`: 발급/만료 시각 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub username: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}
