//! Infrastructure layer - External service implementations

pub mod auth;
pub mod identity;
pub mod logging;
pub mod profile;
pub mod project;
pub mod session;
pub mod team;
pub mod user;
