//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생명주기를 관리하는 비즈니스 로직입니다.
//!
//! ```text
//! RegisterRequest ──► hash(password) ──► User::new_student ──► UserRepository::create_unique
//! LoginRequest    ──► find_by_username ──► active? ──► bcrypt::verify ──► User
//! ```

use bcrypt::{hash, verify};
use mongodb::bson::{oid::ObjectId, Document};

use crate::domain::dto::{to_changes, RegisterRequest, UpdateUserRequest};
use crate::domain::entities::User;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::UserRepository;

/// 사용자 관리 비즈니스 로직 서비스
///
/// ## 에러 처리 전략
///
/// - **ValidationError**: 입력값 검증 실패
/// - **ConflictError**: 사용자명 중복
/// - **AuthenticationError**: 로그인 실패, 비활성 계정
/// - **AuthorizationError**: 다른 사용자 정보 수정 시도
/// - **NotFound**: 사용자 없음
#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: UserRepository, bcrypt_cost: u32) -> Self {
        Self { user_repo, bcrypt_cost }
    }

    /// 새 학생 계정 생성
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 사용자명 중복
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        let start_time = std::time::Instant::now();

        let password_hash = self.hash_password(&request.password)?;

        let mut user = User::new_student(
            request.username,
            password_hash,
            request.first_name,
            request.last_name,
            request.email,
        );
        user.phone = request.phone.unwrap_or_default();
        user.country = request.country.unwrap_or_default();
        user.language = request.language.unwrap_or_default();
        user.gender = request.gender;

        let created = self.user_repo.create_unique(user).await?;

        log::info!("👤 사용자 가입 완료: {} ({:?})", created.username, start_time.elapsed());

        Ok(created)
    }

    /// 사용자명/비밀번호 검증
    ///
    /// 존재하지 않는 사용자와 틀린 비밀번호는 같은 메시지로 거부합니다.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self.user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(invalid_credentials)?;

        check_credentials(&user, password)?;

        Ok(user)
    }

    pub async fn get_user(&self, id: ObjectId) -> AppResult<User> {
        self.user_repo.get(id).await
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_all().await
    }

    /// 사용자 정보 수정
    ///
    /// 본인 또는 관리자만 수정할 수 있으며, 역할과 활성 상태는 관리자만 바꿀 수 있습니다.
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        id: ObjectId,
        request: UpdateUserRequest,
    ) -> AppResult<User> {
        check_update_permission(actor, id, &request)?;

        let changes = self.build_changes(&request)?;

        self.user_repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 계정 삭제 (관리자 전용)
    pub async fn delete_user(&self, id: ObjectId) -> AppResult<()> {
        if !self.user_repo.delete(id).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        log::info!("🗑️ 사용자 삭제: {}", id);
        Ok(())
    }

    fn build_changes(&self, request: &UpdateUserRequest) -> AppResult<Document> {
        let mut changes = to_changes(request)?;
        if let Some(password) = &request.password {
            changes.insert("passwordHash", self.hash_password(password)?);
        }
        Ok(changes)
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        hash(password, self.bcrypt_cost).context("비밀번호 해싱 실패")
    }
}

/// 수정 권한 검사
fn check_update_permission(
    actor: &AuthenticatedUser,
    target: ObjectId,
    request: &UpdateUserRequest,
) -> AppResult<()> {
    if actor.is_admin() {
        return Ok(());
    }

    if actor.user_id != target.to_hex() {
        return Err(AppError::AuthorizationError("본인 정보만 수정할 수 있습니다".to_string()));
    }

    if request.touches_admin_fields() {
        return Err(AppError::AuthorizationError("역할과 활성 상태는 관리자만 변경할 수 있습니다".to_string()));
    }

    Ok(())
}

fn invalid_credentials() -> AppError {
    AppError::AuthenticationError("사용자명 또는 비밀번호가 올바르지 않습니다".to_string())
}

/// 비밀번호를 먼저 확인한 뒤 계정 활성 상태를 확인합니다.
///
/// 비밀번호가 틀리면 비활성 계정이어도 일반 인증 실패 메시지만 반환합니다.
fn check_credentials(user: &User, password: &str) -> AppResult<()> {
    let matches = verify(password, &user.password_hash).context("비밀번호 검증 실패")?;

    if !matches {
        log::warn!("로그인 실패: {}", user.username);
        return Err(invalid_credentials());
    }

    if !user.active {
        log::warn!("비활성 계정 로그인 시도: {}", user.username);
        return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;

    fn actor(id: ObjectId, role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: id.to_hex(),
            username: "user1".to_string(),
            role,
        }
    }

    #[test]
    fn test_self_update_allowed() {
        let id = ObjectId::new();
        let request = UpdateUserRequest {
            phone: Some("777777771".to_string()),
            ..UpdateUserRequest::default()
        };

        assert!(check_update_permission(&actor(id, Role::Student), id, &request).is_ok());
    }

    #[test]
    fn test_other_user_update_forbidden() {
        let request = UpdateUserRequest::default();

        let result = check_update_permission(&actor(ObjectId::new(), Role::Teacher), ObjectId::new(), &request);

        assert!(matches!(result, Err(AppError::AuthorizationError(_))));
    }

    #[test]
    fn test_self_role_change_forbidden() {
        let id = ObjectId::new();
        let request = UpdateUserRequest {
            role: Some(Role::Admin),
            ..UpdateUserRequest::default()
        };

        assert!(check_update_permission(&actor(id, Role::Student), id, &request).is_err());
    }

    #[test]
    fn test_admin_may_change_anyone() {
        let request = UpdateUserRequest {
            active: Some(false),
            ..UpdateUserRequest::default()
        };

        assert!(check_update_permission(&actor(ObjectId::new(), Role::Admin), ObjectId::new(), &request).is_ok());
    }

    fn inactive_user(password: &str) -> User {
        let mut user = User::new_student(
            "user2".to_string(),
            hash(password, 4).unwrap(),
            "First2".to_string(),
            "Last2".to_string(),
            "user2@example.com".to_string(),
        );
        user.active = false;
        user
    }

    #[test]
    fn test_inactive_account_with_wrong_password_gets_generic_error() {
        let user = inactive_user("password123");

        let err = check_credentials(&user, "wrong-password").unwrap_err();

        assert!(matches!(
            err,
            AppError::AuthenticationError(ref msg) if msg == "사용자명 또는 비밀번호가 올바르지 않습니다"
        ));
    }

    #[test]
    fn test_inactive_account_rejected_after_password_match() {
        let user = inactive_user("password123");

        let err = check_credentials(&user, "password123").unwrap_err();

        assert!(matches!(err, AppError::AuthenticationError(ref msg) if msg == "비활성화된 계정입니다"));
    }

    #[test]
    fn test_active_account_with_correct_password_passes() {
        let mut user = inactive_user("password123");
        user.active = true;

        assert!(check_credentials(&user, "password123").is_ok());
    }
}
