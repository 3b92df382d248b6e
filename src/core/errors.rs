//! # Application Error Handling System
//!
//! 사용자 디렉터리 서비스의 통합 에러 처리 시스템입니다.
//! 모든 계층의 실패를 [`AppError`] 하나로 모으고, `actix_web::ResponseError`를 구현하여
//! 핸들러가 `?` 만으로 일관된 JSON 에러 응답을 돌려줄 수 있게 합니다.
//!
//! ## 응답 형식
//!
//! 모든 에러 응답은 다음 형태를 따릅니다. `error`는 항상 배열입니다.
//!
//! ```json
//! {
//!   "status": false,
//!   "error": ["email ann@x.com already exists! Consider logging in!"]
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 422 Unprocessable Entity | 입력값 검증 실패 |
//! | `ConflictError` | 422 Unprocessable Entity | 이메일 중복 |
//! | `NotFound` | 404 Not Found | 조회/수정 대상 없음 |
//! | `AuthorizationError` | 500 Internal Server Error | 삭제 대상 없음 (기존 클라이언트 호환) |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 5xx 중 `DatabaseError`/`InternalError`는 서버 로그에만 상세 내용을 남기고
//! 클라이언트에는 `"Internal server error"`만 노출합니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use thiserror::Error;

/// 클라이언트에 노출되는 일반 서버 오류 메시지
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// 애플리케이션 전역 에러 타입
///
/// 서비스 계층의 각 연산은 `AppResult<T>`를 반환하며,
/// 핸들러에서 그대로 전파되면 [`ResponseError`] 구현이 HTTP 응답으로 변환합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 입력값 검증 에러 (422)
    ///
    /// 메시지는 항상 목록으로 전달됩니다. 한 필드가 여러 규칙을 동시에 어기면
    /// 해당 필드의 메시지가 모두 포함됩니다.
    #[error("Validation error: {}", .0.join(", "))]
    ValidationError(Vec<String>),

    /// 이메일 중복 에러 (422)
    ///
    /// 저장소의 유니크 인덱스가 쓰기를 거부했을 때 발생합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 리소스 찾을 수 없음 에러 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 권한 에러 (500)
    ///
    /// 존재하지 않는 사용자 삭제 시 기존 클라이언트가 기대하는 응답을 유지하기 위해
    /// 500 상태 코드와 함께 메시지를 그대로 노출합니다.
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 단일 메시지로 검증 에러를 생성합니다.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError(vec![message.into()])
    }

    /// 클라이언트에 전달할 메시지 목록을 반환합니다.
    pub fn client_messages(&self) -> Vec<String> {
        match self {
            AppError::ValidationError(messages) => messages.clone(),
            AppError::ConflictError(msg)
            | AppError::NotFound(msg)
            | AppError::AuthorizationError(msg) => vec![msg.clone()],
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                vec![INTERNAL_SERVER_ERROR_MESSAGE.to_string()]
            }
        }
    }
}

/// 에러 응답 본문
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: bool,
    pub error: Vec<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::ConflictError(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthorizationError(_)
            | AppError::DatabaseError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 숨겨지는 5xx 에러는 여기서 한 번 로그로 남깁니다.
    fn error_response(&self) -> HttpResponse {
        if matches!(self, AppError::DatabaseError(_) | AppError::InternalError(_)) {
            error!("❌ 요청 처리 실패: {}", self);
        }

        HttpResponse::build(self.status_code()).json(ErrorBody {
            status: false,
            error: self.client_messages(),
        })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let hash = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
