use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::CommonResponse;
use crate::validator::ValidatedJson;

use super::model::{
    LoginRequest, LoginResponse, RegisterAdminRequest, RegisterCustomerRequest, RegisterResponse,
};
use super::service::AuthService;

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register a new customer account
#[utoipa::path(
    post,
    path = "/api/auth/register-customer",
    request_body = RegisterCustomerRequest,
    responses(
        (status = 201, description = "Customer registered successfully", body = RegisterResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 409, description = "Username already exists", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_customer(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterCustomerRequest>,
) -> Result<(StatusCode, Json<CommonResponse<RegisterResponse>>), AppError> {
    let response = AuthService::register_customer(&state.db, dto).await?;
    Ok(CommonResponse::created(
        "Successfully register customer",
        response,
    ))
}

/// Register a new admin account
#[utoipa::path(
    post,
    path = "/api/auth/register-admin",
    request_body = RegisterAdminRequest,
    responses(
        (status = 201, description = "Admin registered successfully", body = RegisterResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 409, description = "Username already exists", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_admin(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterAdminRequest>,
) -> Result<(StatusCode, Json<CommonResponse<RegisterResponse>>), AppError> {
    let response = AuthService::register_admin(&state.db, dto).await?;
    Ok(CommonResponse::created(
        "Successfully register admin",
        response,
    ))
}

/// Login and receive a bearer token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(StatusCode, Json<CommonResponse<LoginResponse>>), AppError> {
    let response = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    Ok(CommonResponse::ok("Successfully login", response))
}
