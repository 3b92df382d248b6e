//! 사용자 디렉터리 서비스 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB에 연결한 뒤 Actix-web HTTP 서버를 구동합니다.
//! 최초 연결에 실패하면 서버를 띄우지 않고 종료합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_directory::config::{CorsConfig, DatabaseConfig, RateLimitConfig, ServerConfig};
use user_directory::db::Database;
use user_directory::repositories::users::{MongoUserRepository, UserStore};
use user_directory::routes::configure_all_routes;
use user_directory::services::users::{PasswordHasher, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 디렉터리 서비스 시작중...");

    let store = initialize_store().await?;
    let hasher = PasswordHasher::from_env();
    info!("🔐 bcrypt cost: {}", hasher.cost());

    let user_service = web::Data::new(UserService::new(store, hasher));

    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    info!("🌐 Connected and listening on http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(user_service.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// MongoDB에 연결하고 사용자 저장소를 준비합니다
///
/// 연결 확인(ping) 후 이메일 유니크 인덱스를 보장합니다.
/// 어느 단계든 실패하면 에러를 반환하여 서버가 뜨지 않게 합니다.
async fn initialize_store() -> std::io::Result<Arc<dyn UserStore>> {
    let config = DatabaseConfig::from_env();
    info!("📡 데이터베이스 연결 중... ({})", config.database_name);

    let database = Database::connect(&config).await.map_err(|e| {
        error!("❌ 데이터베이스 연결 실패: {}", e);
        std::io::Error::other(e)
    })?;

    let repository = MongoUserRepository::new(&database);
    repository.create_indexes().await.map_err(|e| {
        error!("❌ 인덱스 생성 실패: {}", e);
        std::io::Error::other(e)
    })?;

    Ok(Arc::new(repository))
}

/// CORS 설정을 구성합니다
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
