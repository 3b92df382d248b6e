//! # 사용자 수정 요청 DTO
//!
//! `PUT /users/{id}` 본문입니다. 모든 필드는 선택 사항이며,
//! 값이 주어졌고 공백 제거 후 비어 있지 않은 필드만 반영됩니다.
//! 빈 문자열과 누락은 모두 "변경 없음"으로 취급합니다.

use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::core::errors::AppResult;
use crate::domain::dto::users::request::create_user::{first_failure, INVALID_EMAIL_CODE};
use crate::utils::email::{is_email, normalize_email};
use crate::utils::string_utils::{clean_optional_string, is_valid_string};

/// 본문을 해석할 수 없을 때의 메시지
pub const UPDATE_BODY_INVALID: &str = "Invalid request body";

/// 사용자 정보 부분 수정 요청 DTO
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    #[validate(custom(function = "validate_new_email"))]
    pub email: Option<String>,
    pub password: Option<String>,
}

/// 실제로 반영할 변경 사항
///
/// 반영 순서는 name → email → password 입니다.
#[derive(Debug, Default, PartialEq)]
pub struct UserChanges<'a> {
    /// 공백이 제거된 새 이름
    pub name: Option<String>,
    /// 요청에 담긴 그대로의 이메일과 정규화된 이메일
    pub email: Option<(&'a str, String)>,
    /// 해싱 전 평문 비밀번호
    pub password: Option<&'a str>,
}

impl UserChanges<'_> {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

impl UpdateUserRequest {
    /// 반영할 변경 사항을 추립니다.
    ///
    /// 저장소에 접근하기 전에 호출되며, 주어진 이메일이 문법에 맞지 않으면 실패합니다.
    pub fn changes(&self) -> AppResult<UserChanges<'_>> {
        self.validate().map_err(first_failure)?;

        Ok(UserChanges {
            name: clean_optional_string(self.name.as_deref()).map(|name| name.trim().to_string()),
            email: clean_optional_string(self.email.as_deref())
                .map(|email| (email, normalize_email(email))),
            password: clean_optional_string(self.password.as_deref()),
        })
    }
}

/// 빈 이메일은 "변경 없음"이므로 통과시키고, 값이 있으면 문법을 검사합니다.
fn validate_new_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_string(email) && !is_email(email) {
        return Err(ValidationError::new(INVALID_EMAIL_CODE));
    }
    Ok(())
}
