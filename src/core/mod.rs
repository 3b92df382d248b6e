//! # Core Module
//!
//! 애플리케이션 전역에서 쓰는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 외부 에러를 컨텍스트와 함께 변환

pub mod errors;
