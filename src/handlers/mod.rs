//! HTTP 요청 핸들러 모듈
//!
//! 각 핸들러는 `web::Data<UserService>`로 주입된 서비스를 사용합니다.

pub mod users;
