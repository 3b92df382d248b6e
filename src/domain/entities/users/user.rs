//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `password`에는 항상 bcrypt 해시만 저장됩니다. 평문은 요청 처리 중에만 존재합니다.
/// 타임스탬프가 없는 기존 문서(`name`, `email`, `password`, `__v`)도 그대로 읽힙니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// 소문자로 정규화된 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl User {
    /// 아직 저장되지 않은 새 사용자를 만듭니다.
    ///
    /// ID는 저장소가 삽입 시점에 할당합니다.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password: password_hash,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 저장된 사용자의 목록용 투영. 아직 ID가 없으면 `None`입니다.
    pub fn summary(&self) -> Option<UserSummary> {
        self.id.map(|id| UserSummary {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
        })
    }
}

/// 목록 조회용 투영 문서 (`_id`, `name`, `email`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
}

/// 사용자 부분 수정 단위
///
/// 수정 요청의 각 필드는 하나의 독립적인 쓰기로 반영됩니다.
#[derive(Debug, Clone, PartialEq)]
pub enum UserField {
    Name(String),
    Email(String),
    PasswordHash(String),
}

impl UserField {
    /// 이 수정이 바꾸는 문서 필드 이름
    pub fn key(&self) -> &'static str {
        match self {
            UserField::Name(_) => "name",
            UserField::Email(_) => "email",
            UserField::PasswordHash(_) => "password",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            UserField::Name(value) | UserField::Email(value) | UserField::PasswordHash(value) => value,
        }
    }

    /// 엔티티에 수정을 적용합니다.
    pub fn apply_to(&self, user: &mut User) {
        match self {
            UserField::Name(name) => user.name = name.clone(),
            UserField::Email(email) => user.email = email.clone(),
            UserField::PasswordHash(hash) => user.password = hash.clone(),
        }
        user.updated_at = Some(DateTime::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn new_user_has_no_id_until_stored() {
        let user = User::new("Ann".into(), "ann@x.com".into(), "$2b$04$hash".into());

        assert!(user.id.is_none());
        assert!(user.id_string().is_none());
        assert!(user.created_at.is_some());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn legacy_document_without_timestamps_is_readable() {
        let id = ObjectId::new();
        let document = doc! {
            "_id": id,
            "name": "Ann",
            "email": "ann@x.com",
            "password": "$2b$10$hash",
            "__v": 0,
        };

        let mut user: User = mongodb::bson::from_document(document).unwrap();

        assert_eq!(user.id, Some(id));
        assert_eq!(user.email, "ann@x.com");
        assert!(user.created_at.is_none());
        assert!(user.updated_at.is_none());

        UserField::Name("Annie".into()).apply_to(&mut user);
        assert!(user.updated_at.is_some());
        assert!(user.created_at.is_none());
    }

    #[test]
    fn serialized_document_uses_mongo_id_key() {
        let mut user = User::new("Ann".into(), "ann@x.com".into(), "$2b$04$hash".into());
        let id = ObjectId::new();
        user.id = Some(id);

        let document = mongodb::bson::to_document(&user).unwrap();

        assert_eq!(document.get_object_id("_id").unwrap(), id);
        assert_eq!(document.get_str("password").unwrap(), "$2b$04$hash");
    }

    #[test]
    fn field_update_touches_only_its_field() {
        let mut user = User::new("Ann".into(), "ann@x.com".into(), "hash".into());

        UserField::Email("new@x.com".into()).apply_to(&mut user);

        assert_eq!(user.email, "new@x.com");
        assert_eq!(user.name, "Ann");
        assert_eq!(user.password, "hash");
        assert_eq!(UserField::PasswordHash("h".into()).key(), "password");
    }
}
