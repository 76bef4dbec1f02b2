//! Team service: shared-workspace creation

use std::sync::Arc;
use tracing::info;

use crate::domain::team::{
    MembershipRepository, Team, TeamId, TeamMembership, TeamRepository, TeamRole,
};
use crate::domain::{DomainError, Principal};

/// Request for creating a shared team
#[derive(Debug, Clone)]
pub struct CreateTeamRequest {
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Service creating shared (non-personal) teams.
///
/// Personal teams come from registration; this service only produces the
/// org-style workspaces a caller can later bind via switch-team.
#[derive(Debug, Clone)]
pub struct TeamService {
    teams: Arc<dyn TeamRepository>,
    memberships: Arc<dyn MembershipRepository>,
}

impl TeamService {
    pub fn new(teams: Arc<dyn TeamRepository>, memberships: Arc<dyn MembershipRepository>) -> Self {
        Self { teams, memberships }
    }

    /// Create a shared team owned by the caller, with the caller as its
    /// sole owner-role member.
    pub async fn create(
        &self,
        principal: &Principal,
        request: CreateTeamRequest,
    ) -> Result<Team, DomainError> {
        let subject = principal.subject_id();

        let team = Team::new(
            TeamId::generate(),
            request.name,
            subject,
            request.avatar_url,
        );
        let team_id = team.id();

        let team = self.teams.create(team).await?;
        self.memberships
            .create(TeamMembership::new(team_id, subject, TeamRole::Owner))
            .await?;

        info!(user_id = %subject, team_id = %team_id, "Team created");
        Ok(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::ProfileId;
    use crate::infrastructure::team::{InMemoryMembershipRepository, InMemoryTeamRepository};
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    struct Fixture {
        service: TeamService,
        teams: Arc<InMemoryTeamRepository>,
        memberships: Arc<InMemoryMembershipRepository>,
    }

    fn fixture() -> Fixture {
        let teams = Arc::new(InMemoryTeamRepository::new());
        let memberships = Arc::new(InMemoryMembershipRepository::new());

        Fixture {
            service: TeamService::new(teams.clone(), memberships.clone()),
            teams,
            memberships,
        }
    }

    fn principal_for(id: ProfileId) -> Principal {
        Principal::new(
            id,
            Some("jane@example.com".to_string()),
            Some("free".to_string()),
            None,
            Utc::now(),
            Utc::now() + Duration::minutes(15),
        )
    }

    #[tokio::test]
    async fn test_create_team_with_owner_membership() {
        let fixture = fixture();
        let subject = ProfileId::new(Uuid::new_v4());

        let team = fixture
            .service
            .create(
                &principal_for(subject),
                CreateTeamRequest {
                    name: "Localization Guild".to_string(),
                    avatar_url: Some("https://cdn.example.com/guild.png".to_string()),
                },
            )
            .await
            .unwrap();

        assert!(!team.is_personal());
        assert_eq!(team.owner_id(), subject);
        assert_eq!(team.avatar_url(), Some("https://cdn.example.com/guild.png"));

        let membership = fixture
            .memberships
            .get_by_user_and_team(subject, team.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(membership.role(), TeamRole::Owner);
    }

    #[tokio::test]
    async fn test_created_team_does_not_shadow_personal_team() {
        let fixture = fixture();
        let subject = ProfileId::new(Uuid::new_v4());

        fixture
            .service
            .create(
                &principal_for(subject),
                CreateTeamRequest {
                    name: "Side Project".to_string(),
                    avatar_url: None,
                },
            )
            .await
            .unwrap();

        // Shared teams never satisfy the personal-team lookup
        let personal = fixture.teams.get_personal_by_owner(subject).await.unwrap();
        assert!(personal.is_none());
    }
}
