//! Team and membership entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::profile::ProfileId;

/// Team identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(Uuid);

impl TeamId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh team id
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse from the textual form used in tokens and requests
    pub fn parse(value: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(value).map(Self)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Membership row identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MembershipId(Uuid);

impl MembershipId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for MembershipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a user within a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    /// Full control over the team
    Owner,
    /// Can modify team resources
    Editor,
    /// Read-only access
    #[default]
    Viewer,
}

impl TeamRole {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "owner" => Some(Self::Owner),
            "editor" => Some(Self::Editor),
            "viewer" => Some(Self::Viewer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }

    pub fn can_write(&self) -> bool {
        matches!(self, Self::Owner | Self::Editor)
    }
}

impl std::fmt::Display for TeamRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Team entity
///
/// Every user has exactly one team with `personal = true`, created at
/// registration. Personal teams are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    owner_id: ProfileId,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
    personal: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Team {
    /// Create a new (shared) team
    pub fn new(
        id: TeamId,
        name: impl Into<String>,
        owner_id: ProfileId,
        avatar_url: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id,
            name: name.into(),
            owner_id,
            avatar_url,
            personal: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create the personal team produced at registration
    pub fn personal_for(
        owner_id: ProfileId,
        name: impl Into<String>,
        avatar_url: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: TeamId::generate(),
            name: name.into(),
            owner_id,
            avatar_url,
            personal: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restore a team from stored fields (repository use)
    pub fn from_parts(
        id: TeamId,
        name: String,
        owner_id: ProfileId,
        avatar_url: Option<String>,
        personal: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            owner_id,
            avatar_url,
            personal,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner_id(&self) -> ProfileId {
        self.owner_id
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    pub fn is_personal(&self) -> bool {
        self.personal
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Membership binding a user to a team with a role
///
/// `(team_id, user_id)` is unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMembership {
    id: MembershipId,
    team_id: TeamId,
    user_id: ProfileId,
    role: TeamRole,
    joined_at: DateTime<Utc>,
}

impl TeamMembership {
    pub fn new(team_id: TeamId, user_id: ProfileId, role: TeamRole) -> Self {
        Self {
            id: MembershipId::generate(),
            team_id,
            user_id,
            role,
            joined_at: Utc::now(),
        }
    }

    /// Restore a membership from stored fields (repository use)
    pub fn from_parts(
        id: MembershipId,
        team_id: TeamId,
        user_id: ProfileId,
        role: TeamRole,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            team_id,
            user_id,
            role,
            joined_at,
        }
    }

    pub fn id(&self) -> MembershipId {
        self.id
    }

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    pub fn user_id(&self) -> ProfileId {
        self.user_id
    }

    pub fn role(&self) -> TeamRole {
        self.role
    }

    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }
}
