//! Team context resolution
//!
//! Decides which team a new token should be bound to and enforces that the
//! binding is authorized. Read-only: membership is queried, never mutated.

use std::sync::Arc;

use crate::domain::profile::ProfileId;
use crate::domain::team::{MembershipRepository, TeamId, TeamRepository};
use crate::domain::DomainError;

/// Resolver for the authoritative team of a login/refresh/switch request
#[derive(Debug, Clone)]
pub struct TeamContextResolver {
    teams: Arc<dyn TeamRepository>,
    memberships: Arc<dyn MembershipRepository>,
}

impl TeamContextResolver {
    pub fn new(teams: Arc<dyn TeamRepository>, memberships: Arc<dyn MembershipRepository>) -> Self {
        Self { teams, memberships }
    }

    /// Resolve the team to bind for `subject`.
    ///
    /// With an explicit request the team must exist and the subject must be
    /// a member. Without one, the subject's personal team is used; a user
    /// that has no personal team yet (partial registration) binds no team
    /// rather than failing.
    pub async fn resolve(
        &self,
        subject: ProfileId,
        requested: Option<TeamId>,
    ) -> Result<Option<TeamId>, DomainError> {
        match requested {
            Some(team_id) => {
                self.verify_membership(subject, team_id).await?;
                Ok(Some(team_id))
            }
            None => self.personal_team(subject).await,
        }
    }

    /// Check that `team` exists and `subject` is a member.
    ///
    /// A nonexistent team fails with `InvalidTeam` before any membership
    /// lookup; a missing membership fails with `TeamAccessForbidden`.
    pub async fn verify_membership(
        &self,
        subject: ProfileId,
        team: TeamId,
    ) -> Result<(), DomainError> {
        self.teams
            .get(team)
            .await?
            .ok_or_else(|| DomainError::invalid_team(team.to_string()))?;

        self.memberships
            .get_by_user_and_team(subject, team)
            .await?
            .ok_or_else(|| {
                DomainError::team_access_forbidden(subject.to_string(), team.to_string())
            })?;

        Ok(())
    }

    async fn personal_team(&self, subject: ProfileId) -> Result<Option<TeamId>, DomainError> {
        let team = self.teams.get_personal_by_owner(subject).await?;
        Ok(team.map(|t| t.id()))
    }
}
