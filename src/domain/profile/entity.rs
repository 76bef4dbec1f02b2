//! Profile entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::team::TeamId;

/// Profile identifier - a UUID assigned by the identity provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(Uuid);

impl ProfileId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Parse from the textual form used in tokens and request paths
    pub fn parse(value: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(value).map(Self)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User profile entity
///
/// Owned by the profile store; the core reads it and requests updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    id: ProfileId,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<String>,
    /// Personal team, once registration has created it
    #[serde(skip_serializing_if = "Option::is_none")]
    default_team_id: Option<TeamId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Partial update applied through the profile store
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub plan: Option<String>,
    pub default_team_id: Option<TeamId>,
}

impl Profile {
    /// Create a new profile
    pub fn new(
        id: ProfileId,
        email: Option<String>,
        full_name: Option<String>,
        avatar_url: Option<String>,
        plan: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id,
            email,
            full_name,
            avatar_url,
            plan,
            default_team_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restore a profile from stored fields (repository use)
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: ProfileId,
        email: Option<String>,
        full_name: Option<String>,
        avatar_url: Option<String>,
        plan: Option<String>,
        default_team_id: Option<TeamId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            full_name,
            avatar_url,
            plan,
            default_team_id,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    pub fn plan(&self) -> Option<&str> {
        self.plan.as_deref()
    }

    pub fn default_team_id(&self) -> Option<TeamId> {
        self.default_team_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Apply a partial update
    pub fn apply_update(&mut self, update: ProfileUpdate) {
        if let Some(full_name) = update.full_name {
            self.full_name = Some(full_name);
        }
        if let Some(avatar_url) = update.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        if let Some(plan) = update.plan {
            self.plan = Some(plan);
        }
        if let Some(team_id) = update.default_team_id {
            self.default_team_id = Some(team_id);
        }
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile() -> Profile {
        Profile::new(
            ProfileId::new(Uuid::new_v4()),
            Some("user@example.com".to_string()),
            Some("Test User".to_string()),
            None,
            Some("free".to_string()),
        )
    }

    #[test]
    fn test_profile_id_parse() {
        let id = ProfileId::parse("5f6e4f9a-2b4f-4f4e-9f7a-0a3a6e1b2c3d").unwrap();
        assert_eq!(id.to_string(), "5f6e4f9a-2b4f-4f4e-9f7a-0a3a6e1b2c3d");
    }

    #[test]
    fn test_profile_id_parse_invalid() {
        assert!(ProfileId::parse("not-a-uuid").is_err());
        assert!(ProfileId::parse("").is_err());
    }

    #[test]
    fn test_profile_creation() {
        let profile = create_test_profile();
        assert_eq!(profile.email(), Some("user@example.com"));
        assert_eq!(profile.plan(), Some("free"));
        assert!(profile.default_team_id().is_none());
    }

    #[test]
    fn test_apply_update_preserves_unset_fields() {
        let mut profile = create_test_profile();
        let before = profile.updated_at();

        profile.apply_update(ProfileUpdate {
            plan: Some("pro".to_string()),
            ..Default::default()
        });

        assert_eq!(profile.plan(), Some("pro"));
        assert_eq!(profile.full_name(), Some("Test User"));
        assert!(profile.updated_at() >= before);
    }

    #[test]
    fn test_default_team_via_update() {
        let mut profile = create_test_profile();
        let team_id = TeamId::generate();

        profile.apply_update(ProfileUpdate {
            default_team_id: Some(team_id),
            ..Default::default()
        });
        assert_eq!(profile.default_team_id(), Some(team_id));
    }
}
