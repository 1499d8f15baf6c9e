use crate::state::AppState;
use axum::{Router, routing::post};

use super::controller::{login, register_admin, register_customer};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register-customer", post(register_customer))
        .route("/register-admin", post(register_admin))
        .route("/login", post(login))
}
