//! Authentication infrastructure
//!
//! Token codec and team context resolution.

mod context;
mod jwt;

pub use context::TeamContextResolver;
pub use jwt::{JwtConfig, SessionClaims, TokenCodec, TokenPair};
