//! Request middleware and extractors.
//!
//! - [`auth`]: bearer token validation via the [`auth::AuthUser`] extractor
//! - [`role`]: role checks layered onto admin-only routes

pub mod auth;
pub mod role;
