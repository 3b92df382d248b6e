//! HTTP 계층과 서비스 계층 사이에서 주고받는 데이터 전송 객체

pub mod users;

pub use users::*;
