//! 사용자 디렉터리 서비스 백엔드
//!
//! 사용자 생성, 목록, 조회, 수정, 삭제를 제공하는 REST API입니다.
//! MongoDB에 사용자를 저장하고, 이메일 유니크성과 bcrypt 비밀번호 해싱을 보장합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 해싱, 에러 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   UserStore     │ ← MongoDB / InMemory
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_directory::repositories::users::InMemoryUserRepository;
//! use user_directory::services::users::{PasswordHasher, UserService};
//!
//! let service = UserService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     PasswordHasher::from_env(),
//! );
//! let users = service.list_users().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
