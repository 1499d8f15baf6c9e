use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::CommonResponse;

use super::model::CustomerResponse;
use super::service::CustomerService;

/// List all customers
#[utoipa::path(
    get,
    path = "/api/customers",
    responses(
        (status = 200, description = "List of customers", body = Vec<CustomerResponse>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Customers"
)]
#[instrument(skip(state))]
pub async fn get_all_customers(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<CommonResponse<Vec<CustomerResponse>>>), AppError> {
    let customers = CustomerService::get_all(&state.db).await?;
    Ok(CommonResponse::ok(
        "Successfully retrieved all customer",
        customers,
    ))
}

/// Get a customer by id
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer details", body = CustomerResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Customers"
)]
#[instrument(skip(state))]
pub async fn get_customer_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<CommonResponse<CustomerResponse>>), AppError> {
    let customer = CustomerService::get_by_id(&state.db, id).await?;
    Ok(CommonResponse::ok(
        "Successfully get customer by id",
        customer,
    ))
}

/// Delete a customer by id
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Customers"
)]
#[instrument(skip(state))]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<CommonResponse<()>>), AppError> {
    CustomerService::delete(&state.db, id).await?;
    Ok(CommonResponse::ok("Successfully delete customer", ()))
}
