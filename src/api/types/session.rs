//! Session endpoint request/response types

use serde::{Deserialize, Serialize};

use super::user::ProfileResponse;
use crate::infrastructure::session::Session;

/// POST /api/v1/auth/login request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Credential issued by the external identity provider
    pub token: String,
    pub team_id: Option<String>,
}

/// POST /api/v1/auth/refresh request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// POST /api/v1/auth/switch-team request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchTeamRequest {
    pub team_id: String,
}

/// Session response shared by login, refresh and switch-team
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: ProfileResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl SessionResponse {
    pub fn from_domain(session: Session) -> Self {
        Self {
            access_token: session.tokens.access_token,
            refresh_token: session.tokens.refresh_token,
            user: ProfileResponse::from_domain(&session.profile),
            team_id: session.team_id.map(|t| t.to_string()),
        }
    }
}
