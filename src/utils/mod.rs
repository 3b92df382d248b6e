//! 공통 유틸리티 함수 모듈
//!
//! - [`email`] - 이메일 형식 검사와 정규화
//! - [`string_utils`] - 문자열 검증 유틸리티

pub mod email;
pub mod string_utils;
