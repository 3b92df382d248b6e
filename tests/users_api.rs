use std::sync::Arc;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{middleware, test, web, App};
use serde_json::{json, Value};
use user_directory::repositories::users::InMemoryUserRepository;
use user_directory::routes::configure_all_routes;
use user_directory::services::users::{PasswordHasher, UserService};

async fn app(
    store: &InMemoryUserRepository,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let service = UserService::new(Arc::new(store.clone()), PasswordHasher::new(4));

    test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes),
    )
    .await
}

async fn send<S>(app: &S, req: test::TestRequest) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let resp = test::call_service(app, req.to_request()).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

async fn create_user<S>(app: &S, name: &str, email: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let (status, _) = send(
        app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": name, "email": email, "password": "longenough" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(app, test::TestRequest::get().uri("/users")).await;
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|user| user["email"] == email.to_lowercase())
        .and_then(|user| user["id"].as_str())
        .unwrap()
        .to_string()
}

#[actix_web::test]
async fn create_echoes_input_and_stores_normalized_hash() {
    let store = InMemoryUserRepository::new();
    let app = app(&store).await;

    let (status, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Ann", "email": "ANN@X.COM", "password": "longenough" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "status": true,
            "message": "User added successfully",
            "data": { "name": "Ann", "email": "ANN@X.COM" }
        })
    );

    let stored = store.find_by_email("ann@x.com").await.unwrap();
    assert_ne!(stored.password, "longenough");
}

#[actix_web::test]
async fn short_password_returns_two_messages() {
    let store = InMemoryUserRepository::new();
    let app = app(&store).await;

    let (status, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Ann", "email": "ann@x.com", "password": "short" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({
            "status": false,
            "error": [
                "password should be a string and should not be empty",
                "password length should be minimum 8 characters"
            ]
        })
    );
    assert!(store.is_empty().await);
}

#[actix_web::test]
async fn invalid_email_is_rejected() {
    let store = InMemoryUserRepository::new();
    let app = app(&store).await;

    let (status, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Ann", "email": "ann at x", "password": "longenough" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], json!(["Invalid email"]));
}

#[actix_web::test]
async fn unreadable_body_is_a_validation_error() {
    let store = InMemoryUserRepository::new();
    let app = app(&store).await;

    let (status, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json"),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], json!(["name, email and password required!"]));

    let (status, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": 42, "email": "ann@x.com", "password": "longenough" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], false);
}

#[actix_web::test]
async fn duplicate_email_in_other_casing_conflicts() {
    let store = InMemoryUserRepository::new();
    let app = app(&store).await;
    create_user(&app, "Ann", "ann@x.com").await;

    let (status, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Ann2", "email": "ANN@x.com", "password": "longenough" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"],
        json!(["email ANN@x.com already exists! Consider logging in!"])
    );
    assert_eq!(store.len().await, 1);
}

#[actix_web::test]
async fn list_never_exposes_passwords() {
    let store = InMemoryUserRepository::new();
    let app = app(&store).await;

    let (status, body) = send(&app, test::TestRequest::get().uri("/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": true, "data": [] }));

    create_user(&app, "Ann", "ann@x.com").await;
    create_user(&app, "Bob", "bob@x.com").await;

    let (_, body) = send(&app, test::TestRequest::get().uri("/users/")).await;
    let users = body["data"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        let keys: Vec<&String> = user.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert!(user.get("password").is_none());
    }
}

#[actix_web::test]
async fn get_by_id_found_and_missing() {
    let store = InMemoryUserRepository::new();
    let app = app(&store).await;
    let id = create_user(&app, "Ann", "Ann@X.com").await;

    let (status, body) = send(&app, test::TestRequest::get().uri(&format!("/users/user/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": true,
            "message": "User found!",
            "data": { "id": id, "name": "Ann", "email": "ann@x.com" }
        })
    );

    let (status, body) = send(
        &app,
        test::TestRequest::get().uri("/users/user/64b7f0c2a1b2c3d4e5f60718"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "status": false, "error": ["User not found!"] }));
}

#[actix_web::test]
async fn update_applies_only_supplied_fields() {
    let store = InMemoryUserRepository::new();
    let app = app(&store).await;
    let id = create_user(&app, "Ann", "ann@x.com").await;

    let (status, body) = send(
        &app,
        test::TestRequest::put()
            .uri(&format!("/users/{}", id))
            .set_json(json!({ "name": "", "email": "ANNIE@X.COM" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": true,
            "message": "Update successful!",
            "data": { "name": "Ann", "email": "annie@x.com" }
        })
    );
    assert!(store.find_by_email("ann@x.com").await.is_none());
    assert_eq!(store.find_by_email("annie@x.com").await.unwrap().name, "Ann");
}

#[actix_web::test]
async fn update_conflict_and_missing_user() {
    let store = InMemoryUserRepository::new();
    let app = app(&store).await;
    create_user(&app, "Ann", "ann@x.com").await;
    let bob = create_user(&app, "Bob", "bob@x.com").await;

    let (status, body) = send(
        &app,
        test::TestRequest::put()
            .uri(&format!("/users/{}", bob))
            .set_json(json!({ "email": "ann@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"],
        json!(["email ann@x.com already exists! Consider logging in!"])
    );

    let (status, body) = send(
        &app,
        test::TestRequest::put()
            .uri("/users/64b7f0c2a1b2c3d4e5f60718")
            .set_json(json!({ "name": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!(["User not found!"]));
}

#[actix_web::test]
async fn delete_then_delete_again() {
    let store = InMemoryUserRepository::new();
    let app = app(&store).await;
    let id = create_user(&app, "Ann", "ann@x.com").await;

    let (status, body) = send(&app, test::TestRequest::delete().uri(&format!("/users/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": true, "message": "Delete successful!" }));
    assert!(store.is_empty().await);

    let (status, body) = send(&app, test::TestRequest::delete().uri(&format!("/users/{}", id))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "status": false, "error": ["Unauthorized!"] }));
}

#[actix_web::test]
async fn delete_of_never_created_id_reports_unauthorized() {
    let store = InMemoryUserRepository::new();
    let app = app(&store).await;

    let (status, body) = send(
        &app,
        test::TestRequest::delete().uri("/users/64b7f0c2a1b2c3d4e5f60718"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!(["Unauthorized!"]));
}

#[actix_web::test]
async fn health_check_reports_healthy() {
    let store = InMemoryUserRepository::new();
    let app = app(&store).await;

    let (status, body) = send(&app, test::TestRequest::get().uri("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
