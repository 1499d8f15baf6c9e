use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use cuppa::config::cors::CorsConfig;
use cuppa::config::jwt::JwtConfig;
use cuppa::router::init_router;
use cuppa::state::AppState;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn setup_test_app(pool: PgPool) -> Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    };
    init_router(state)
}

#[allow(dead_code)]
pub fn generate_unique_username() -> String {
    format!("user-{}", Uuid::new_v4())
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    send(app, request).await
}

#[allow(dead_code)]
pub async fn get_with_token(
    app: &Router,
    uri: &str,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = builder.body(Body::empty()).unwrap();

    send(app, request).await
}

#[allow(dead_code)]
pub async fn delete_with_token(
    app: &Router,
    uri: &str,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = builder.body(Body::empty()).unwrap();

    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, body)
}

/// Registers a customer through the API and returns the username.
#[allow(dead_code)]
pub async fn register_test_customer(app: &Router, name: &str) -> String {
    let username = generate_unique_username();
    let (status, _) = post_json(
        app,
        "/api/auth/register-customer",
        serde_json::json!({
            "username": username,
            "password": "latte-machine",
            "customerName": name,
            "address": "12 Bean Street",
            "mobilePhone": "081234567890",
            "email": format!("{}@test.com", Uuid::new_v4()),
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    username
}

/// Registers an admin through the API and returns a logged-in token.
#[allow(dead_code)]
pub async fn admin_token(app: &Router) -> String {
    let username = generate_unique_username();
    let (status, _) = post_json(
        app,
        "/api/auth/register-admin",
        serde_json::json!({
            "username": username,
            "password": "espresso-shot",
            "email": format!("{}@test.com", Uuid::new_v4()),
            "mobilePhone": "081234567891",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({
            "username": username,
            "password": "espresso-shot",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["token"].as_str().unwrap().to_string()
}
