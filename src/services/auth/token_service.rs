//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 로그인 시 액세스 토큰을 발급하고 요청마다 검증합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::domain::entities::{Entity, User};
use crate::domain::token::TokenClaims;
use crate::errors::{AppError, AppResult};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 JWT 토큰을 생성하고 검증합니다.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_HOURS` 환경 변수로 생성합니다.
    pub fn from_env() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// 액세스 토큰 유효 기간 (초)
    pub fn expires_in(&self) -> i64 {
        self.expiration_hours * 3600
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 사용자 ID 없음
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let access_token = token_service.generate_access_token(&user)?;
    /// ```
    pub fn generate_access_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let sub = user
            .id()
            .map(|id| id.to_hex())
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let claims = TokenClaims {
            sub,
            username: user.username.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;
    use mongodb::bson::oid::ObjectId;

    fn saved_user(role: Role) -> User {
        let mut user = User::new_student(
            "user2".to_string(),
            "hash".to_string(),
            "First2".to_string(),
            "Last2".to_string(),
            "user2@example.com".to_string(),
        );
        user.role = role;
        user.set_id(ObjectId::new());
        user
    }

    #[test]
    fn test_token_round_trip_preserves_subject_and_role() {
        let service = TokenService::new("test-secret", 24);
        let user = saved_user(Role::Teacher);

        let token = service.generate_access_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user.id_string());
        assert_eq!(claims.username, "user2");
        assert_eq!(claims.role, Role::Teacher);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let issuer = TokenService::new("secret-a", 24);
        let verifier = TokenService::new("secret-b", 24);
        let token = issuer.generate_access_token(&saved_user(Role::Student)).unwrap();

        assert!(matches!(
            verifier.verify_token(&token),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = TokenService::new("test-secret", -2);
        let token = service.generate_access_token(&saved_user(Role::Student)).unwrap();

        match service.verify_token(&token) {
            Err(AppError::AuthenticationError(msg)) => assert!(msg.contains("만료")),
            other => panic!("expected expiry error, got {:?}", other),
        }
    }

    #[test]
    fn test_unsaved_user_cannot_get_token() {
        let service = TokenService::new("test-secret", 24);
        let mut user = saved_user(Role::Student);
        user.id = None;

        assert!(service.generate_access_token(&user).is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::new("test-secret", 24);

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
