//! # 사용자 저장소 인터페이스
//!
//! 서비스 계층은 구체적인 저장소가 아닌 [`UserStore`] trait에 의존합니다.
//! 운영 환경에서는 [`MongoUserRepository`](super::user_repo::MongoUserRepository),
//! 테스트에서는 [`InMemoryUserRepository`](super::memory::InMemoryUserRepository)를 주입합니다.
//!
//! ## 이메일 유니크성
//!
//! 구현체는 반드시 저장소 수준에서 이메일 중복 쓰기를 거부하고
//! [`StoreError::DuplicateEmail`]을 반환해야 합니다. 서비스는 사전 중복 조회를 하지 않으므로
//! 동시 요청의 경합은 이 제약으로만 해결됩니다.
//!
//! ## ID 처리
//!
//! ID는 ObjectId의 16진수 문자열입니다. 해석할 수 없는 ID는 존재하지 않는 문서로 취급합니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;
use crate::core::errors::AppError;
use crate::domain::entities::users::user::{User, UserField, UserSummary};

/// 저장소 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// 이메일 유니크 제약 위반
    #[error("duplicate email: {0}")]
    DuplicateEmail(String),

    /// 그 밖의 저장소 오류
    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::DuplicateEmail(email) => {
                AppError::ConflictError(format!("email {} already exists!", email))
            }
            StoreError::Backend(msg) => AppError::DatabaseError(msg),
        }
    }
}

/// 사용자 컬렉션에 대한 영속성 연산
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 모든 사용자를 `id`, `name`, `email`만 투영하여 조회합니다.
    async fn find_all(&self) -> StoreResult<Vec<UserSummary>>;

    /// ID로 사용자를 조회합니다.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<User>>;

    /// 새 사용자를 한 번의 쓰기로 저장하고 ID가 할당된 사용자를 반환합니다.
    async fn insert(&self, user: User) -> StoreResult<User>;

    /// 필드 하나를 수정하고 수정된 사용자를 반환합니다.
    ///
    /// 대상이 없으면 `Ok(None)`입니다.
    async fn update_field(&self, id: &str, field: UserField) -> StoreResult<Option<User>>;

    /// 사용자를 영구 삭제합니다. 삭제된 문서가 있으면 `true`입니다.
    async fn delete(&self, id: &str) -> StoreResult<bool>;
}

/// 문자열 ID를 ObjectId로 해석합니다.
pub fn parse_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_hex_only() {
        let id = ObjectId::new();

        assert_eq!(parse_id(&id.to_hex()), Some(id));
        assert_eq!(parse_id("not-an-object-id"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn store_errors_map_to_app_errors() {
        assert!(matches!(
            AppError::from(StoreError::DuplicateEmail("a@b.c".into())),
            AppError::ConflictError(_)
        ));
        assert!(matches!(
            AppError::from(StoreError::Backend("boom".into())),
            AppError::DatabaseError(_)
        ));
    }
}
