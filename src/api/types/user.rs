//! User-facing profile representations

use serde::{Deserialize, Serialize};

use crate::domain::profile::{Profile, ProfileUpdate};
use crate::domain::team::TeamId;
use crate::infrastructure::user::{Me, TeamInfo};

/// Profile as exposed over the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_team_id: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl ProfileResponse {
    pub fn from_domain(profile: &Profile) -> Self {
        Self {
            id: profile.id().to_string(),
            email: profile.email().map(str::to_string),
            full_name: profile.full_name().map(str::to_string),
            avatar_url: profile.avatar_url().map(str::to_string),
            plan: profile.plan().map(str::to_string),
            default_team_id: profile.default_team_id().map(|t| t.to_string()),
            created_at: profile.created_at(),
            updated_at: profile.updated_at(),
        }
    }
}

/// Current-user view with the active team and quota summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user: ProfileResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_team_id: Option<String>,
    pub team_info: TeamInfo,
}

impl MeResponse {
    pub fn from_domain(me: Me) -> Self {
        Self {
            user: ProfileResponse::from_domain(&me.profile),
            active_team_id: me.active_team_id.map(|t| t.to_string()),
            team_info: me.team_info,
        }
    }
}

/// PATCH /api/v1/users/me request body
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub default_team_id: Option<String>,
}

impl UpdateProfileRequest {
    pub fn into_update(self) -> Result<ProfileUpdate, crate::domain::DomainError> {
        let default_team_id = self
            .default_team_id
            .as_deref()
            .map(|t| {
                TeamId::parse(t)
                    .map_err(|_| crate::domain::DomainError::invalid_team(t.to_string()))
            })
            .transpose()?;

        Ok(ProfileUpdate {
            full_name: self.full_name,
            avatar_url: self.avatar_url,
            plan: None,
            default_team_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::ProfileId;
    use uuid::Uuid;

    #[test]
    fn test_profile_response_field_names() {
        let profile = Profile::new(
            ProfileId::new(Uuid::new_v4()),
            Some("user@example.com".to_string()),
            Some("Jane".to_string()),
            None,
            Some("free".to_string()),
        );

        let json = serde_json::to_value(ProfileResponse::from_domain(&profile)).unwrap();
        assert_eq!(json["email"], "user@example.com");
        assert_eq!(json["fullName"], "Jane");
        assert!(json.get("avatarUrl").is_none());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_update_request_rejects_bad_team_id() {
        let request = UpdateProfileRequest {
            default_team_id: Some("nope".to_string()),
            ..Default::default()
        };

        assert!(request.into_update().is_err());
    }
}
