//! User endpoints: registration and the current-user view

use axum::{extract::State, Json};
use tracing::debug;

use crate::api::middleware::RequirePrincipal;
use crate::api::state::AppState;
use crate::api::types::{ApiError, MeResponse, ProfileResponse, UpdateProfileRequest};

/// POST /api/v1/users/register
pub async fn register(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
) -> Result<Json<ProfileResponse>, ApiError> {
    debug!(user_id = %principal.subject_id(), "Registration request");

    let profile = state
        .user_service
        .register(&principal)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ProfileResponse::from_domain(&profile)))
}

/// GET /api/v1/users/me
pub async fn get_me(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
) -> Result<Json<MeResponse>, ApiError> {
    let me = state
        .user_service
        .get_me(&principal)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(MeResponse::from_domain(me)))
}

/// PATCH /api/v1/users/me
pub async fn update_me(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let update = request.into_update().map_err(ApiError::from)?;

    let profile = state
        .user_service
        .update(&principal, update)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ProfileResponse::from_domain(&profile)))
}
