//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (요청마다 새 솔트)
//! - 저장소 유니크 제약 기반 이메일 중복 방지
//! - 저장 전 입력값 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::{PasswordHasher, UserService};
//!
//! let service = UserService::new(store, PasswordHasher::from_env());
//! let profile = service.create_user(&request).await?;
//! ```

pub mod password;
pub mod user_service;

pub use password::PasswordHasher;
pub use user_service::UserService;
