use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    LoginRequest, LoginResponse, RegisterAdminRequest, RegisterCustomerRequest, RegisterResponse,
};
use crate::modules::customers::model::CustomerResponse;
use crate::modules::roles::model::Role;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_customer,
        crate::modules::auth::controller::register_admin,
        crate::modules::auth::controller::login,
        crate::modules::customers::controller::get_all_customers,
        crate::modules::customers::controller::get_customer_by_id,
        crate::modules::customers::controller::delete_customer,
    ),
    components(
        schemas(
            RegisterCustomerRequest,
            RegisterAdminRequest,
            LoginRequest,
            RegisterResponse,
            LoginResponse,
            CustomerResponse,
            Role,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login endpoints"),
        (name = "Customers", description = "Customer record management (admin only)")
    ),
    info(
        title = "Cuppa API",
        version = "0.1.0",
        description = "REST backend for a café POS/admin tool: customer records and role-based JWT authentication. Successful responses are wrapped in a {statusCode, message, data} envelope.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
