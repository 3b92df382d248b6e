//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션을 사용하는 [`UserStore`] 구현체입니다.
//!
//! ## 특징
//!
//! - **유니크 제약**: `email_unique` 인덱스가 중복 이메일 쓰기를 거부
//! - **단일 쓰기**: 생성과 필드 수정은 각각 한 번의 MongoDB 연산
//! - **투영 조회**: 목록 조회 시 비밀번호 필드를 읽지 않음

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::info;
use mongodb::bson::{doc, DateTime};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};
use crate::db::Database;
use crate::domain::entities::users::user::{User, UserField, UserSummary};
use crate::repositories::users::user_store::{parse_id, StoreError, StoreResult, UserStore};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 컬렉션
///
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique)
///
/// ```rust,ignore
/// let repo = MongoUserRepository::new(&database);
/// repo.create_indexes().await?;
///
/// let created = repo.insert(User::new(name, email, hash)).await?;
/// let found = repo.find_by_id(&created.id_string().unwrap()).await?;
/// ```
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub const COLLECTION_NAME: &'static str = "users";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(Self::COLLECTION_NAME),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 이메일 유니크 인덱스를 만듭니다. 이미 존재하면 아무 일도 일어나지 않습니다.
    /// 애플리케이션 초기화 시점에 한 번 호출해야 하며, 이 인덱스가 없으면
    /// 이메일 유니크성이 보장되지 않습니다.
    ///
    /// # 주의사항
    ///
    /// - **기존 데이터**: 이미 중복 이메일이 있으면 인덱스 생성이 실패합니다
    pub async fn create_indexes(&self) -> StoreResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(email_index)
            .await
            .map_err(backend_error)?;

        info!("✅ users 컬렉션 인덱스 확인 완료");
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_all(&self) -> StoreResult<Vec<UserSummary>> {
        self.collection
            .clone_with_type::<UserSummary>()
            .find(doc! {})
            .projection(doc! { "name": 1, "email": 1 })
            .await
            .map_err(backend_error)?
            .try_collect()
            .await
            .map_err(backend_error)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<User>> {
        let Some(object_id) = parse_id(id) else {
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(backend_error)
    }

    async fn insert(&self, mut user: User) -> StoreResult<User> {
        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(|e| write_error(e, &user.email))?;

        let object_id = result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::Backend(format!("unexpected inserted id: {}", result.inserted_id))
        })?;
        user.id = Some(object_id);

        Ok(user)
    }

    async fn update_field(&self, id: &str, field: UserField) -> StoreResult<Option<User>> {
        let Some(object_id) = parse_id(id) else {
            return Ok(None);
        };

        let mut changes = doc! { "updated_at": DateTime::now() };
        changes.insert(field.key(), field.value());

        self.collection
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": changes })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| write_error(e, field.value()))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let Some(object_id) = parse_id(id) else {
            return Ok(false);
        };

        let result = self
            .collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(backend_error)?;

        Ok(result.deleted_count > 0)
    }
}

fn backend_error(error: mongodb::error::Error) -> StoreError {
    StoreError::Backend(error.to_string())
}

/// 쓰기 에러를 변환합니다. 중복 키 에러는 `DuplicateEmail`이 됩니다.
///
/// 컬렉션의 유니크 인덱스는 `_id` 외에 `email` 하나뿐입니다.
fn write_error(error: mongodb::error::Error, email: &str) -> StoreError {
    if is_duplicate_key(&error) {
        StoreError::DuplicateEmail(email.to_string())
    } else {
        backend_error(error)
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{from_document, Document};
    use mongodb::error::{CommandError, Error, WriteError};

    fn server_error(code: i32, code_name: &str) -> Document {
        doc! { "code": code, "codeName": code_name, "errmsg": format!("E{} {}", code, code_name) }
    }

    fn insert_failure(code: i32, code_name: &str) -> Error {
        let write_error: WriteError = from_document(server_error(code, code_name)).unwrap();
        Error::from(ErrorKind::Write(WriteFailure::WriteError(write_error)))
    }

    fn command_failure(code: i32, code_name: &str) -> Error {
        let command_error: CommandError = from_document(server_error(code, code_name)).unwrap();
        Error::from(ErrorKind::Command(command_error))
    }

    #[test]
    fn duplicate_key_on_insert_is_duplicate_email() {
        let error = write_error(insert_failure(DUPLICATE_KEY_CODE, "DuplicateKey"), "ann@x.com");

        assert_eq!(error, StoreError::DuplicateEmail("ann@x.com".to_string()));
    }

    #[test]
    fn duplicate_key_on_find_and_modify_is_duplicate_email() {
        let error = write_error(command_failure(DUPLICATE_KEY_CODE, "DuplicateKey"), "ann@x.com");

        assert_eq!(error, StoreError::DuplicateEmail("ann@x.com".to_string()));
    }

    #[test]
    fn other_server_errors_stay_backend_errors() {
        assert!(matches!(
            write_error(insert_failure(121, "DocumentValidationFailure"), "ann@x.com"),
            StoreError::Backend(_)
        ));
        assert!(matches!(
            write_error(command_failure(2, "BadValue"), "ann@x.com"),
            StoreError::Backend(_)
        ));
    }
}
