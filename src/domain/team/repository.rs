//! Team and membership store traits

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Team, TeamId, TeamMembership};
use crate::domain::profile::ProfileId;
use crate::domain::DomainError;

/// Repository trait for team storage
#[async_trait]
pub trait TeamRepository: Send + Sync + Debug {
    /// Get a team by id
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError>;

    /// Create a new team
    async fn create(&self, team: Team) -> Result<Team, DomainError>;

    /// Get the personal team owned by a user, if registration created one
    async fn get_personal_by_owner(&self, owner: ProfileId)
        -> Result<Option<Team>, DomainError>;
}

/// Repository trait for team membership rows
#[async_trait]
pub trait MembershipRepository: Send + Sync + Debug {
    /// Look up the membership for `(user, team)`
    async fn get_by_user_and_team(
        &self,
        user: ProfileId,
        team: TeamId,
    ) -> Result<Option<TeamMembership>, DomainError>;

    /// Create a membership row; `(team, user)` must be unique
    async fn create(&self, membership: TeamMembership) -> Result<TeamMembership, DomainError>;

    /// Delete a membership row, returning whether one existed
    async fn delete(&self, team: TeamId, user: ProfileId) -> Result<bool, DomainError>;

    /// List all memberships held by a user
    async fn list_by_user(&self, user: ProfileId) -> Result<Vec<TeamMembership>, DomainError>;
}
