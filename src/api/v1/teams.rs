//! Team endpoints

use axum::{extract::State, Json};
use tracing::debug;

use crate::api::middleware::RequirePrincipal;
use crate::api::state::AppState;
use crate::api::types::{ApiError, CreateTeamBody, TeamResponse};

/// POST /api/v1/teams
pub async fn create_team(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Json(body): Json<CreateTeamBody>,
) -> Result<Json<TeamResponse>, ApiError> {
    if body.name.trim().is_empty() {
        return Err(ApiError::bad_request("Team name is required"));
    }

    debug!(user_id = %principal.subject_id(), name = %body.name, "Create team");

    let team = state
        .team_service
        .create(&principal, body.into_request())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(TeamResponse::from_domain(&team)))
}
