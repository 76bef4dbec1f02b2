//! Team endpoint request/response types

use serde::{Deserialize, Serialize};

use crate::domain::team::Team;
use crate::infrastructure::team::CreateTeamRequest;

/// Team as exposed over the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub personal: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl TeamResponse {
    pub fn from_domain(team: &Team) -> Self {
        Self {
            id: team.id().to_string(),
            name: team.name().to_string(),
            owner_id: team.owner_id().to_string(),
            avatar_url: team.avatar_url().map(str::to_string),
            personal: team.is_personal(),
            created_at: team.created_at(),
            updated_at: team.updated_at(),
        }
    }
}

/// POST /api/v1/teams request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamBody {
    pub name: String,
    pub avatar_url: Option<String>,
}

impl CreateTeamBody {
    pub fn into_request(self) -> CreateTeamRequest {
        CreateTeamRequest {
            name: self.name,
            avatar_url: self.avatar_url,
        }
    }
}
