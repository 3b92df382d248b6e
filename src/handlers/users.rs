//! # 사용자 관리 HTTP 핸들러
//!
//! 경로/본문을 추출하여 [`UserService`] 연산 하나를 호출하고 JSON 응답을 구성합니다.
//! 비즈니스 로직은 갖지 않으며, 에러는 `AppError`의 `ResponseError` 구현이 변환합니다.
//!
//! ## 엔드포인트
//!
//! | Method | Path | 성공 | 본문 |
//! |--------|------|------|------|
//! | GET | `/users` | 200 | `{status, data:[{id,name,email}]}` |
//! | POST | `/users` | 201 | `{status, message, data:{name,email}}` |
//! | GET | `/users/user/{id}` | 200 | `{status, message, data:{id,name,email}}` |
//! | PUT | `/users/{id}` | 200 | `{status, message, data:{name,email}}` |
//! | DELETE | `/users/{id}` | 200 | `{status, message}` |

use actix_web::{delete, get, post, put, web, HttpResponse};
use log::debug;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::create_user::CREATE_BODY_REQUIRED;
use crate::domain::dto::users::request::update_user::UPDATE_BODY_INVALID;
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::users::response::ApiResponse;
use crate::services::users::UserService;

pub const USER_ADDED: &str = "User added successfully";
pub const USER_FOUND: &str = "User found!";
pub const UPDATE_SUCCESSFUL: &str = "Update successful!";
pub const DELETE_SUCCESSFUL: &str = "Delete successful!";

/// 본문 추출 실패를 검증 에러로 바꿉니다.
fn body_error(err: actix_web::Error, message: &str) -> AppError {
    debug!("요청 본문 해석 실패: {}", err);
    AppError::validation(message)
}

#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::data(users)))
}

#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: Result<web::Json<CreateUserRequest>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.map_err(|e| body_error(e, CREATE_BODY_REQUIRED))?;
    let profile = service.create_user(&payload).await?;

    Ok(HttpResponse::Created().json(ApiResponse::with_message(USER_ADDED, profile)))
}

#[get("/user/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_message(USER_FOUND, user)))
}

#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: Result<web::Json<UpdateUserRequest>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.map_err(|e| body_error(e, UPDATE_BODY_INVALID))?;
    let profile = service.update_user(&user_id, &payload).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_message(UPDATE_SUCCESSFUL, profile)))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(DELETE_SUCCESSFUL)))
}
