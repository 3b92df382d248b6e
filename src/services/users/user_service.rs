//! # 사용자 관리 서비스 구현
//!
//! 사용자 목록/생성/조회/수정/삭제의 비즈니스 로직을 구현합니다.
//! 입력 검증, 저장소 연산 조합, 이메일 중복 에러 변환, 비밀번호 해싱을 담당합니다.
//!
//! ## 의존성
//!
//! ```text
//! ┌──────────────┐      ┌────────────────────┐
//! │ UserService  │ ───▶ │ Arc<dyn UserStore> │  MongoDB / InMemory
//! │              │ ───▶ │ PasswordHasher     │  bcrypt
//! └──────────────┘      └────────────────────┘
//! ```
//!
//! 서비스는 생성 시점에 저장소를 주입받으며 자체 공유 상태나 락을 갖지 않습니다.
//! 동시 요청 간 이메일 중복은 저장소의 유니크 제약으로만 해결됩니다.
//!
//! ## 주요 기능
//!
//! | 메서드 | 설명 | 실패 |
//! |--------|------|------|
//! | `list_users` | 전체 사용자 (`id`, `name`, `email`) | DB 오류 |
//! | `create_user` | 검증 → 해싱 → 단일 삽입 | 검증, 중복 |
//! | `get_user_by_id` | ID로 조회 | 404 |
//! | `update_user` | name → email → password 순서로 필드별 반영 | 검증, 404, 중복 |
//! | `delete_user` | 영구 삭제 | 대상 없음 시 "Unauthorized!" |

use std::sync::Arc;
use log::info;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::users::response::{UserProfile, UserResponse};
use crate::domain::entities::users::user::{User, UserField};
use crate::repositories::users::user_store::{StoreError, UserStore};
use crate::services::users::password::PasswordHasher;

pub const USER_NOT_FOUND: &str = "User not found!";
/// 존재하지 않는 사용자 삭제 시 메시지 (기존 클라이언트 호환)
pub const DELETE_TARGET_MISSING: &str = "Unauthorized!";

/// 중복 이메일 메시지
pub fn email_exists_message(email: &str) -> String {
    format!("email {} already exists! Consider logging in!", email)
}

/// 사용자 관리 서비스
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// 모든 사용자를 조회합니다.
    ///
    /// 비어 있는 컬렉션은 빈 목록입니다.
    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.store.find_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 새 사용자를 생성합니다.
    ///
    /// 비밀번호를 먼저 해싱한 뒤 한 번의 쓰기로 저장하므로 평문이 저장되는 순간은 없습니다.
    /// 응답에는 요청에 담긴 그대로의 `name`/`email`이 담깁니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 검증 실패 (저장소 접근 없음)
    /// * `AppError::ConflictError` - 이미 사용 중인 이메일
    pub async fn create_user(&self, request: &CreateUserRequest) -> AppResult<UserProfile> {
        let validated = request.validated()?;

        let password_hash = self.hasher.hash(validated.password).await?;
        let user = User::new(validated.name, validated.email, password_hash);

        let created = self.store.insert(user).await.map_err(|e| match e {
            StoreError::DuplicateEmail(_) => {
                AppError::ConflictError(email_exists_message(validated.submitted_email))
            }
            other => other.into(),
        })?;

        info!(
            "👤 사용자 생성: id={}",
            created.id_string().unwrap_or_default()
        );

        Ok(UserProfile::new(validated.submitted_name, validated.submitted_email))
    }

    /// ID로 사용자를 조회합니다.
    pub async fn get_user_by_id(&self, id: &str) -> AppResult<UserResponse> {
        let user = self.find_existing(id).await?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 정보를 부분 수정합니다.
    ///
    /// 값이 주어진 필드마다 독립적인 쓰기를 name → email → password 순서로 수행합니다.
    /// 이메일 중복이 발생하면 이미 반영된 name은 유지되고 password는 반영되지 않습니다.
    /// 반환값은 수정 후의 `name`/`email`입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이메일 형식 오류 (저장소 접근 없음)
    /// * `AppError::NotFound` - 사용자 없음
    /// * `AppError::ConflictError` - 이미 사용 중인 이메일
    pub async fn update_user(&self, id: &str, request: &UpdateUserRequest) -> AppResult<UserProfile> {
        let changes = request.changes()?;
        let mut current = self.find_existing(id).await?;

        if changes.is_empty() {
            return Ok(UserProfile::from(current));
        }

        if let Some(name) = changes.name {
            current = self.apply(id, UserField::Name(name)).await?;
        }

        if let Some((submitted, email)) = changes.email {
            current = self
                .apply(id, UserField::Email(email))
                .await
                .map_err(|e| match e {
                    AppError::ConflictError(_) => {
                        AppError::ConflictError(email_exists_message(submitted))
                    }
                    other => other,
                })?;
        }

        if let Some(password) = changes.password {
            let password_hash = self.hasher.hash(password).await?;
            current = self.apply(id, UserField::PasswordHash(password_hash)).await?;
        }

        info!("✏️ 사용자 수정: id={}", id);

        Ok(UserProfile::from(current))
    }

    /// 사용자를 영구 삭제합니다.
    ///
    /// 삭제 대상이 없으면 기존 클라이언트와의 호환을 위해
    /// `AuthorizationError("Unauthorized!")`(500)를 반환합니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        let deleted = self.store.delete(id).await?;

        if !deleted {
            return Err(AppError::AuthorizationError(DELETE_TARGET_MISSING.to_string()));
        }

        info!("🗑️ 사용자 삭제: id={}", id);
        Ok(())
    }

    async fn find_existing(&self, id: &str) -> AppResult<User> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// 필드 하나를 반영합니다. 도중에 사용자가 삭제되었다면 404입니다.
    async fn apply(&self, id: &str, field: UserField) -> AppResult<User> {
        self.store
            .update_field(id, field)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }
}
