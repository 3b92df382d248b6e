//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON을 구조화된 타입으로 변환합니다.
//! 필드 존재 여부를 추적하기 위해 모든 필드는 `Option<String>`이며,
//! 검증은 각 DTO의 메서드가 담당합니다.

pub mod create_user;
pub mod update_user;

pub use create_user::{CreateUserRequest, ValidatedCreateUser};
pub use update_user::{UpdateUserRequest, UserChanges};
