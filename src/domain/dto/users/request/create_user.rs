//! # 사용자 생성 요청 DTO
//!
//! `POST /users` 본문입니다. 필드 누락을 검증 단계에서 구분하기 위해
//! 모든 필드를 `Option<String>`으로 받습니다.
//!
//! ## 검증 규칙
//!
//! `validator`로 모든 규칙을 검사한 뒤, 아래 순서상 처음 실패한 필드의 메시지만 반환합니다.
//!
//! 1. `name` - 공백 제거 후 비어 있지 않아야 함
//! 2. `email` - 공백 제거 후 비어 있지 않아야 함
//! 3. `email` - [`is_email`] 문법을 만족해야 함
//! 4. `password` - 공백 제거 후 8자 이상이어야 함 (메시지 2개)
//!
//! ```json
//! { "name": "Ann", "email": "ann@x.com", "password": "longenough" }
//! ```

use std::borrow::Cow;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};
use crate::core::errors::{AppError, AppResult};
use crate::utils::email::{is_email, normalize_email};
use crate::utils::string_utils::{has_min_trimmed_length, is_valid_string};

pub const NAME_REQUIRED: &str = "name should be a string and should not be empty";
pub const EMAIL_REQUIRED: &str = "email should be a string and should not be empty";
pub const INVALID_EMAIL: &str = "Invalid email";
pub const PASSWORD_REQUIRED: &str = "password should be a string and should not be empty";
pub const PASSWORD_TOO_SHORT: &str = "password length should be minimum 8 characters";
/// 본문을 해석할 수 없을 때의 메시지
pub const CREATE_BODY_REQUIRED: &str = "name, email and password required!";

/// 비밀번호 최소 길이 (공백 제거 후)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// 이메일 문법 오류 코드. 나머지 코드는 "값 없음"으로 취급됩니다.
pub(crate) const INVALID_EMAIL_CODE: &str = "invalid_email";

/// 에러를 보고하는 필드 순서
const FIELD_ORDER: [&str; 3] = ["name", "email", "password"];

/// 새로운 사용자 생성을 위한 요청 DTO
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(required)]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[validate(required)]
    #[validate(custom(function = "validate_email_address"))]
    pub email: Option<String>,

    #[validate(required)]
    #[validate(custom(function = "validate_password_length"))]
    pub password: Option<String>,
}

/// 검증을 통과한 생성 요청
#[derive(Debug, PartialEq)]
pub struct ValidatedCreateUser<'a> {
    /// 요청에 담긴 그대로의 이름 (응답용)
    pub submitted_name: &'a str,
    /// 요청에 담긴 그대로의 이메일 (응답 및 중복 메시지용)
    pub submitted_email: &'a str,
    /// 공백이 제거된 저장용 이름
    pub name: String,
    /// 소문자로 정규화된 저장용 이메일
    pub email: String,
    pub password: &'a str,
}

impl CreateUserRequest {
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    /// 요청을 검증하고 저장 가능한 형태로 정규화합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 처음 실패한 필드의 메시지 목록
    pub fn validated(&self) -> AppResult<ValidatedCreateUser<'_>> {
        Validate::validate(self).map_err(first_failure)?;

        match (self.name.as_deref(), self.email.as_deref(), self.password.as_deref()) {
            (Some(name), Some(email), Some(password)) => Ok(ValidatedCreateUser {
                submitted_name: name,
                submitted_email: email,
                name: name.trim().to_string(),
                email: normalize_email(email),
                password,
            }),
            _ => Err(AppError::validation(CREATE_BODY_REQUIRED)),
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    validate_not_blank(email)?;
    if !is_email(email) {
        return Err(ValidationError::new(INVALID_EMAIL_CODE));
    }
    Ok(())
}

fn validate_password_length(password: &str) -> Result<(), ValidationError> {
    if !has_min_trimmed_length(password, MIN_PASSWORD_LENGTH) {
        return Err(ValidationError::new("too_short"));
    }
    Ok(())
}

/// `ValidationErrors`를 name → email → password 순서로 훑어
/// 처음 실패한 필드의 메시지 목록으로 변환합니다.
pub(crate) fn first_failure(errors: ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();

    let messages = FIELD_ORDER
        .iter()
        .find_map(|field| {
            let error = field_errors.get(*field)?.first()?;
            Some(messages_for(field, &error.code))
        })
        .unwrap_or_else(|| vec![CREATE_BODY_REQUIRED]);

    AppError::ValidationError(messages.into_iter().map(String::from).collect())
}

fn messages_for(field: &str, code: &Cow<'static, str>) -> Vec<&'static str> {
    match (field, code.as_ref()) {
        ("name", _) => vec![NAME_REQUIRED],
        ("email", INVALID_EMAIL_CODE) => vec![INVALID_EMAIL],
        ("email", _) => vec![EMAIL_REQUIRED],
        _ => vec![PASSWORD_REQUIRED, PASSWORD_TOO_SHORT],
    }
}
