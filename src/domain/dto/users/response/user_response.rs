//! 사용자 응답 DTO
//!
//! 비밀번호 해시는 어떤 응답에도 포함되지 않습니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::{User, UserSummary};

/// 조회 응답에 쓰이는 사용자 요약 (`id`, `name`, `email`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, name, email, .. } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
        }
    }
}

impl From<UserSummary> for UserResponse {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id.to_hex(),
            name: summary.name,
            email: summary.email,
        }
    }
}

/// 생성/수정 응답에 쓰이는 사용자 정보 (`name`, `email`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self::new(user.name, user.email)
    }
}

/// 성공 응답 공통 형식
///
/// ```json
/// { "status": true, "message": "User found!", "data": { ... } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 메시지 없이 데이터만 담은 응답
    pub fn data(data: T) -> Self {
        Self {
            status: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// 데이터 없이 메시지만 담은 응답
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    #[test]
    fn summary_never_contains_password() {
        let mut user = User::new("Ann".into(), "ann@x.com".into(), "$2b$04$secret".into());
        let id = ObjectId::new();
        user.id = Some(id);

        let value = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(value, json!({ "id": id.to_hex(), "name": "Ann", "email": "ann@x.com" }));
    }

    #[test]
    fn message_only_response_omits_data() {
        let value = serde_json::to_value(ApiResponse::message("Delete successful!")).unwrap();

        assert_eq!(value, json!({ "status": true, "message": "Delete successful!" }));
    }

    #[test]
    fn data_only_response_omits_message() {
        let value = serde_json::to_value(ApiResponse::data(Vec::<UserResponse>::new())).unwrap();

        assert_eq!(value, json!({ "status": true, "data": [] }));
    }
}
