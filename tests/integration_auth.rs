mod common;

use axum::http::StatusCode;
use common::{generate_unique_username, post_json, setup_test_app, test_jwt_config};
use cuppa::modules::credentials::service::CredentialService;
use cuppa::modules::customers::model::NewCustomer;
use cuppa::modules::customers::service::CustomerService;
use cuppa::modules::roles::model::Role;
use cuppa::modules::roles::service::RoleService;
use cuppa::utils::jwt::verify_token;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

fn customer_body(username: &str) -> serde_json::Value {
    json!({
        "username": username,
        "password": "latte-machine",
        "customerName": "Ayu Lestari",
        "address": "12 Bean Street",
        "mobilePhone": "081234567890",
        "email": "ayu@example.com",
    })
}

async fn credential_count(pool: &PgPool, username: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM credentials WHERE lower(username) = lower($1)",
    )
    .bind(username)
    .fetch_one(pool)
    .await
    .unwrap();
    count
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_customer_success(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let username = generate_unique_username();

    let (status, body) = post_json(&app, "/api/auth/register-customer", customer_body(&username)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["statusCode"], 201);
    assert_eq!(body["message"], "Successfully register customer");
    assert_eq!(body["data"]["username"], username);
    assert_eq!(body["data"]["role"], "customer");

    assert_eq!(credential_count(&pool, &username).await, 1);

    let (profiles,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM customers c
         JOIN credentials cr ON cr.id = c.credential_id
         WHERE cr.username = $1",
    )
    .bind(&username)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(profiles, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_username_conflict(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let username = generate_unique_username();

    let (status, _) = post_json(&app, "/api/auth/register-customer", customer_body(&username)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(&app, "/api/auth/register-customer", customer_body(&username)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Username already exists");

    // The losing attempt must leave no rows behind.
    assert_eq!(credential_count(&pool, &username).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_is_case_insensitive(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let username = generate_unique_username();

    let (status, _) = post_json(&app, "/api/auth/register-customer", customer_body(&username)).await;
    assert_eq!(status, StatusCode::CREATED);

    let shouting = username.to_uppercase();
    let (status, _) = post_json(&app, "/api/auth/register-customer", customer_body(&shouting)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    assert_eq!(credential_count(&pool, &username).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_admin_success(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let username = generate_unique_username();

    let (status, body) = post_json(
        &app,
        "/api/auth/register-admin",
        json!({
            "username": username,
            "password": "espresso-shot",
            "email": "manager@example.com",
            "mobilePhone": "081234567891",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["role"], "admin");

    let (profiles,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM admins a
         JOIN credentials cr ON cr.id = a.credential_id
         WHERE cr.username = $1",
    )
    .bind(&username)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(profiles, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_and_customer_flows_share_conflict_behavior(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let username = generate_unique_username();

    let (status, _) = post_json(&app, "/api/auth/register-customer", customer_body(&username)).await;
    assert_eq!(status, StatusCode::CREATED);

    // Same username through the admin flow hits the same constraint.
    let (status, body) = post_json(
        &app,
        "/api/auth/register-admin",
        json!({
            "username": username,
            "password": "espresso-shot",
            "email": "manager@example.com",
            "mobilePhone": "081234567891",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Username already exists");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_success_token_carries_role(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let username = generate_unique_username();

    post_json(&app, "/api/auth/register-customer", customer_body(&username)).await;

    let (status, body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "username": username, "password": "latte-machine" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "customer");

    let token = body["data"]["token"].as_str().unwrap();
    let claims = verify_token(token, &test_jwt_config()).unwrap();
    assert_eq!(claims.username, username);
    assert_eq!(claims.role, "customer");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_is_case_insensitive(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let username = generate_unique_username();

    post_json(&app, "/api/auth/register-customer", customer_body(&username)).await;

    let (status, _) = post_json(
        &app,
        "/api/auth/login",
        json!({ "username": username.to_uppercase(), "password": "latte-machine" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_failures_are_indistinguishable(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let username = generate_unique_username();

    post_json(&app, "/api/auth/register-customer", customer_body(&username)).await;

    let (wrong_pass_status, wrong_pass_body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "username": username, "password": "wrong-password" }),
    )
    .await;

    let (unknown_status, unknown_body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "username": generate_unique_username(), "password": "latte-machine" }),
    )
    .await;

    assert_eq!(wrong_pass_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_pass_body, unknown_body);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_credential_store_lookups(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let username = generate_unique_username();

    post_json(&app, "/api/auth/register-customer", customer_body(&username)).await;

    let credential = CredentialService::find_by_username(&pool, &username)
        .await
        .unwrap()
        .expect("registered credential should be found");
    assert_eq!(credential.username, username);

    let by_id = CredentialService::find_by_id(&pool, credential.id)
        .await
        .unwrap()
        .expect("lookup by id should find the same row");
    assert_eq!(by_id.username, username);
    assert_eq!(by_id.role_id, credential.role_id);

    let missing = CredentialService::find_by_id(&pool, Uuid::new_v4()).await.unwrap();
    assert!(missing.is_none());
}

// A failure after the credential insert must roll back the whole flow:
// the store state afterwards matches the state before it started.
#[sqlx::test(migrations = "./migrations")]
async fn test_registration_rolls_back_on_profile_failure(pool: PgPool) {
    let username = generate_unique_username();

    let mut tx = pool.begin().await.unwrap();
    let role = RoleService::get_or_create(&mut tx, Role::Customer).await.unwrap();
    CredentialService::create(&mut tx, &username, "not-a-real-hash", role.id)
        .await
        .unwrap();

    // Forcing the profile insert to fail: the referenced credential does
    // not exist, so the foreign key rejects it.
    let result = CustomerService::create(
        &mut tx,
        NewCustomer {
            name: "Ayu Lestari".to_string(),
            address: "12 Bean Street".to_string(),
            mobile_phone: "081234567890".to_string(),
            email: "ayu@example.com".to_string(),
        },
        Uuid::new_v4(),
    )
    .await;
    assert!(result.is_err());

    drop(tx);

    assert_eq!(credential_count(&pool, &username).await, 0);
}
