//! In-memory team and membership repositories

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::profile::ProfileId;
use crate::domain::team::{
    MembershipRepository, Team, TeamId, TeamMembership, TeamRepository,
};
use crate::domain::DomainError;

/// In-memory implementation of TeamRepository
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<HashMap<TeamId, Team>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.get(&id).cloned())
    }

    async fn create(&self, team: Team) -> Result<Team, DomainError> {
        let mut teams = self.teams.write().await;

        if teams.contains_key(&team.id()) {
            return Err(DomainError::storage(format!(
                "Team '{}' already exists",
                team.id()
            )));
        }

        teams.insert(team.id(), team.clone());
        Ok(team)
    }

    async fn get_personal_by_owner(
        &self,
        owner: ProfileId,
    ) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams
            .values()
            .find(|t| t.is_personal() && t.owner_id() == owner)
            .cloned())
    }
}

/// In-memory implementation of MembershipRepository
#[derive(Debug, Default)]
pub struct InMemoryMembershipRepository {
    rows: RwLock<Vec<TeamMembership>>,
}

impl InMemoryMembershipRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MembershipRepository for InMemoryMembershipRepository {
    async fn get_by_user_and_team(
        &self,
        user: ProfileId,
        team: TeamId,
    ) -> Result<Option<TeamMembership>, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|m| m.user_id() == user && m.team_id() == team)
            .cloned())
    }

    async fn create(&self, membership: TeamMembership) -> Result<TeamMembership, DomainError> {
        let mut rows = self.rows.write().await;

        let exists = rows
            .iter()
            .any(|m| m.user_id() == membership.user_id() && m.team_id() == membership.team_id());
        if exists {
            return Err(DomainError::storage(format!(
                "Membership for user '{}' in team '{}' already exists",
                membership.user_id(),
                membership.team_id()
            )));
        }

        rows.push(membership.clone());
        Ok(membership)
    }

    async fn delete(&self, team: TeamId, user: ProfileId) -> Result<bool, DomainError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|m| !(m.user_id() == user && m.team_id() == team));
        Ok(rows.len() < before)
    }

    async fn list_by_user(&self, user: ProfileId) -> Result<Vec<TeamMembership>, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|m| m.user_id() == user).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::TeamRole;
    use uuid::Uuid;

    fn user() -> ProfileId {
        ProfileId::new(Uuid::new_v4())
    }

    #[tokio::test]
    async fn test_personal_lookup() {
        let repo = InMemoryTeamRepository::new();
        let owner = user();

        repo.create(Team::new(TeamId::generate(), "Shared", owner, None))
            .await
            .unwrap();
        let personal = repo
            .create(Team::personal_for(owner, "My Team", None))
            .await
            .unwrap();

        let found = repo.get_personal_by_owner(owner).await.unwrap().unwrap();
        assert_eq!(found.id(), personal.id());

        let none = repo.get_personal_by_owner(user()).await.unwrap();
        assert!(none.is_none());
    }

    #[tokio::test]
    async fn test_membership_uniqueness() {
        let repo = InMemoryMembershipRepository::new();
        let member = user();
        let team = TeamId::generate();

        repo.create(TeamMembership::new(team, member, TeamRole::Owner))
            .await
            .unwrap();

        let err = repo
            .create(TeamMembership::new(team, member, TeamRole::Viewer))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Storage { .. }));
    }

    #[tokio::test]
    async fn test_membership_delete() {
        let repo = InMemoryMembershipRepository::new();
        let member = user();
        let team = TeamId::generate();

        repo.create(TeamMembership::new(team, member, TeamRole::Editor))
            .await
            .unwrap();

        assert!(repo.delete(team, member).await.unwrap());
        assert!(!repo.delete(team, member).await.unwrap());
        assert!(repo
            .get_by_user_and_team(member, team)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_list_by_user() {
        let repo = InMemoryMembershipRepository::new();
        let member = user();

        repo.create(TeamMembership::new(TeamId::generate(), member, TeamRole::Owner))
            .await
            .unwrap();
        repo.create(TeamMembership::new(TeamId::generate(), member, TeamRole::Viewer))
            .await
            .unwrap();
        repo.create(TeamMembership::new(TeamId::generate(), user(), TeamRole::Owner))
            .await
            .unwrap();

        let rows = repo.list_by_user(member).await.unwrap();
        assert_eq!(rows.len(), 2);
    }
}
