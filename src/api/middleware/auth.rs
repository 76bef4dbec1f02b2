//! Bearer-token authentication extractor

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::Principal;

/// Extractor that requires a valid access token
///
/// Reads `Authorization: Bearer <token>` and verifies it with the token
/// codec; no store is consulted here, handlers that need the profile load
/// it themselves.
#[derive(Debug, Clone)]
pub struct RequirePrincipal(pub Principal);

impl FromRequestParts<AppState> for RequirePrincipal {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        debug!("Verifying access token");

        let principal = state.token_codec.verify(&token).map_err(ApiError::from)?;

        Ok(RequirePrincipal(principal))
    }
}

/// Extract the bearer token from the Authorization header
pub fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Result<String, ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid authorization scheme"))?;

    auth_str
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::unauthorized("Invalid authorization scheme"))
}
