//! Project membership entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::ProjectId;
use crate::domain::profile::ProfileId;
use crate::domain::team::TeamRole;

/// Project member row identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectMemberId(Uuid);

impl ProjectMemberId {
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

impl std::fmt::Display for ProjectMemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Collaborator on a project.
///
/// `(project_id, user_id)` is unique; the owner is not stored as a member,
/// ownership lives on the project itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMember {
    id: ProjectMemberId,
    project_id: ProjectId,
    user_id: ProfileId,
    role: TeamRole,
    invited_by: ProfileId,
    joined_at: DateTime<Utc>,
}

impl ProjectMember {
    pub fn new(
        project_id: ProjectId,
        user_id: ProfileId,
        role: TeamRole,
        invited_by: ProfileId,
    ) -> Self {
        Self {
            id: ProjectMemberId::generate(),
            project_id,
            user_id,
            role,
            invited_by,
            joined_at: Utc::now(),
        }
    }

    /// Restore a member from stored fields (repository use)
    pub fn from_parts(
        id: ProjectMemberId,
        project_id: ProjectId,
        user_id: ProfileId,
        role: TeamRole,
        invited_by: ProfileId,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            project_id,
            user_id,
            role,
            invited_by,
            joined_at,
        }
    }

    pub fn id(&self) -> ProjectMemberId {
        self.id
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    pub fn user_id(&self) -> ProfileId {
        self.user_id
    }

    pub fn role(&self) -> TeamRole {
        self.role
    }

    pub fn invited_by(&self) -> ProfileId {
        self.invited_by
    }

    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_records_inviter() {
        let owner = ProfileId::new(Uuid::new_v4());
        let invitee = ProfileId::new(Uuid::new_v4());
        let project = ProjectId::generate();

        let member = ProjectMember::new(project, invitee, TeamRole::Editor, owner);

        assert_eq!(member.project_id(), project);
        assert_eq!(member.user_id(), invitee);
        assert_eq!(member.invited_by(), owner);
        assert!(member.role().can_write());
    }
}
