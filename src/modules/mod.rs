//! Feature modules, each with the same internal layout: `model` for
//! entities and DTOs, `service` for business logic, and where the module
//! has an HTTP surface, `controller` and `router`.

pub mod admins;
pub mod auth;
pub mod credentials;
pub mod customers;
pub mod roles;
