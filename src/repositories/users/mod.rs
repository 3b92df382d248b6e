//! 사용자 저장소
//!
//! - [`user_store`] - 서비스가 의존하는 [`UserStore`] trait과 저장소 에러
//! - [`user_repo`] - MongoDB 구현체
//! - [`memory`] - 메모리 구현체

pub mod user_store;
pub mod user_repo;
pub mod memory;

pub use user_store::{StoreError, StoreResult, UserStore};
pub use user_repo::MongoUserRepository;
pub use memory::InMemoryUserRepository;
