use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::dto::parse_object_id;
use crate::domain::entities::Role;
use crate::domain::token::TokenClaims;
use crate::errors::{AppError, AppResult};

/// JWT 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    pub username: String,

    pub role: Role,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
            role: claims.role,
        }
    }
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    /// 여러 역할 중 하나라도 보유하고 있는지 확인
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// 주어진 역할이 없으면 403 에러를 반환합니다.
    pub fn require_any_role(&self, roles: &[Role]) -> AppResult<()> {
        if self.has_any_role(roles) {
            return Ok(());
        }

        log::warn!("권한 부족: 사용자 {} ({}), 필요 권한: {:?}", self.username, self.role, roles);
        Err(AppError::AuthorizationError("접근 권한이 부족합니다".to_string()))
    }

    /// 본인이거나 주어진 역할 중 하나를 가진 경우만 허용합니다.
    pub fn require_owner_or(&self, owner: ObjectId, roles: &[Role]) -> AppResult<()> {
        if self.user_id == owner.to_hex() {
            return Ok(());
        }
        self.require_any_role(roles)
    }

    pub fn object_id(&self) -> AppResult<ObjectId> {
        parse_object_id(&self.user_id, "사용자 ID")
            .map_err(|_| AppError::AuthenticationError("토큰의 사용자 ID가 올바르지 않습니다".to_string()))
    }
}

/// ActixWeb FromRequest trait 구현
///
/// `AuthMiddleware`가 요청 확장에 넣어 둔 사용자를 꺼냅니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: ObjectId::new().to_hex(),
            username: "user1".to_string(),
            role,
        }
    }

    #[test]
    fn test_require_any_role() {
        let teacher = user(Role::Teacher);

        assert!(teacher.require_any_role(&[Role::Admin, Role::Teacher]).is_ok());
        assert!(matches!(
            teacher.require_any_role(&[Role::Admin]),
            Err(AppError::AuthorizationError(_))
        ));
        assert!(!teacher.is_admin());
    }

    #[test]
    fn test_owner_or_role() {
        let student = user(Role::Student);
        let own = student.object_id().unwrap();

        assert!(student.require_owner_or(own, &[Role::Admin]).is_ok());
        assert!(student.require_owner_or(ObjectId::new(), &[Role::Admin]).is_err());
        assert!(user(Role::Moderator)
            .require_owner_or(ObjectId::new(), &[Role::Admin, Role::Moderator])
            .is_ok());
    }
}
