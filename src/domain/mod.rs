//! 도메인 계층
//!
//! - [`entities`] - MongoDB에 저장되는 엔티티
//! - [`dto`] - 요청/응답 데이터 전송 객체

pub mod entities;
pub mod dto;
