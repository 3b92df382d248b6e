//! 설정 모듈
//!
//! 서버, 데이터베이스, 비밀번호 해싱, Rate Limiting, CORS 설정을 환경 변수에서 읽습니다.
//! `.env.<profile>` 파일 로딩은 `main`에서 `dotenv`로 처리합니다.

pub mod app_config;

pub use app_config::*;
