//! Role-based authorization middleware.
//!
//! Applied as a `route_layer` on routers whose endpoints require a
//! specific role, after the bearer token has been validated.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::roles::model::Role;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Checks that the authenticated caller holds one of the allowed roles.
pub async fn require_roles(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
    allowed_roles: Vec<Role>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    let role = auth_user.role()?;

    if !allowed_roles.contains(&role) {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Administrator privileges required."
        )));
    }

    req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Middleware for admin-only routes.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![Role::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
