//! API middleware

mod auth;

pub use auth::{extract_bearer_token, RequirePrincipal};
