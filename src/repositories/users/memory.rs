//! 메모리 기반 사용자 저장소
//!
//! MongoDB 없이 서비스를 구동하거나 테스트할 때 사용하는 [`UserStore`] 구현체입니다.
//! MongoDB 구현과 같은 규칙(이메일 유니크, 해석 불가 ID는 부재)을 따릅니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;
use crate::domain::entities::users::user::{User, UserField, UserSummary};
use crate::repositories::users::user_store::{parse_id, StoreError, StoreResult, UserStore};

#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// 이메일로 저장된 원본 문서를 찾습니다. 테스트에서 저장 상태 확인에 사용합니다.
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.email == email)
            .cloned()
    }
}

fn email_taken(users: &[User], email: &str, except: Option<ObjectId>) -> bool {
    users
        .iter()
        .any(|user| user.email == email && user.id != except)
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_all(&self) -> StoreResult<Vec<UserSummary>> {
        Ok(self.users.read().await.iter().filter_map(User::summary).collect())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<User>> {
        let Some(object_id) = parse_id(id) else {
            return Ok(None);
        };

        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.id == Some(object_id))
            .cloned())
    }

    async fn insert(&self, mut user: User) -> StoreResult<User> {
        let mut users = self.users.write().await;

        if email_taken(&users, &user.email, None) {
            return Err(StoreError::DuplicateEmail(user.email));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn update_field(&self, id: &str, field: UserField) -> StoreResult<Option<User>> {
        let Some(object_id) = parse_id(id) else {
            return Ok(None);
        };

        let mut users = self.users.write().await;

        if let UserField::Email(email) = &field {
            if email_taken(&users, email, Some(object_id)) {
                return Err(StoreError::DuplicateEmail(email.clone()));
            }
        }

        Ok(users
            .iter_mut()
            .find(|user| user.id == Some(object_id))
            .map(|user| {
                field.apply_to(user);
                user.clone()
            }))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let Some(object_id) = parse_id(id) else {
            return Ok(false);
        };

        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|user| user.id != Some(object_id));

        Ok(users.len() < before)
    }
}
