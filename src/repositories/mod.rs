//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 구체 타입 대신 `Arc<dyn UserStore>`를 주입받습니다.
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(&database));
//! ```

pub mod users;
