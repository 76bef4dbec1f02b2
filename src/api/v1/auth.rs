//! Session endpoints: login, refresh, switch-team

use axum::{extract::State, Json};
use tracing::debug;

use crate::api::middleware::RequirePrincipal;
use crate::api::state::AppState;
use crate::api::types::{
    ApiError, LoginRequest, RefreshRequest, SessionResponse, SwitchTeamRequest,
};

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    debug!("Login request");

    let session = state
        .session_service
        .login(&request.token, request.team_id.as_deref())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(SessionResponse::from_domain(session)))
}

/// POST /api/v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    debug!("Token refresh request");

    let session = state
        .session_service
        .refresh(&request.refresh_token)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(SessionResponse::from_domain(session)))
}

/// POST /api/v1/auth/switch-team
pub async fn switch_team(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Json(request): Json<SwitchTeamRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    debug!(team_id = %request.team_id, "Switch team request");

    let session = state
        .session_service
        .switch_team(&principal, &request.team_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(SessionResponse::from_domain(session)))
}
