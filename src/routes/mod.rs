//! 라우트 설정
//!
//! HTTP 메서드와 경로를 핸들러에 연결합니다. 로직은 갖지 않습니다.
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes)
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_directory",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
