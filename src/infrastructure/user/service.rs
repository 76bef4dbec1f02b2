//! User service: registration and profile management

use std::sync::Arc;
use tracing::{error, info};

use crate::domain::plan::can_create_project;
use crate::domain::profile::{Profile, ProfileRepository, ProfileUpdate};
use crate::domain::project::ProjectRepository;
use crate::domain::team::{
    MembershipRepository, Team, TeamId, TeamMembership, TeamRepository, TeamRole,
};
use crate::domain::{DomainError, Principal};

/// Plan and quota summary attached to the current user's view
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    pub project_count: u32,
    pub plan: String,
    pub can_create_project: bool,
}

/// Current-user view: profile, active team and quota summary
#[derive(Debug, Clone)]
pub struct Me {
    pub profile: Profile,
    pub active_team_id: Option<TeamId>,
    pub team_info: TeamInfo,
}

/// Service for registration, the current-user view and profile updates
#[derive(Debug, Clone)]
pub struct UserService {
    profiles: Arc<dyn ProfileRepository>,
    teams: Arc<dyn TeamRepository>,
    memberships: Arc<dyn MembershipRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl UserService {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        teams: Arc<dyn TeamRepository>,
        memberships: Arc<dyn MembershipRepository>,
        projects: Arc<dyn ProjectRepository>,
    ) -> Self {
        Self {
            profiles,
            teams,
            memberships,
            projects,
        }
    }

    /// Complete registration for an authenticated caller.
    ///
    /// Creates the profile if the caller logged in before registering,
    /// then the personal team and its owner membership, and finally binds
    /// the personal team as the profile default. The steps are sequential,
    /// not transactional: a crash between them leaves a profile without a
    /// personal team, which the next register call repairs.
    pub async fn register(&self, principal: &Principal) -> Result<Profile, DomainError> {
        let subject = principal.subject_id();

        let profile = match self.profiles.get(subject).await? {
            Some(profile) => profile,
            None => {
                let profile = Profile::new(
                    subject,
                    principal.email().map(str::to_string),
                    None,
                    None,
                    Some("free".to_string()),
                );
                self.profiles.create(profile).await?
            }
        };

        if let Some(existing) = self.teams.get_personal_by_owner(subject).await? {
            info!(user_id = %subject, team_id = %existing.id(), "User already registered");
            return Ok(profile);
        }

        let team_name = profile
            .full_name()
            .filter(|n| !n.is_empty())
            .unwrap_or("My Team")
            .to_string();

        let team = Team::personal_for(
            subject,
            team_name,
            profile.avatar_url().map(str::to_string),
        );
        let team_id = team.id();

        self.teams.create(team).await.map_err(|e| {
            error!(user_id = %subject, "Failed to create personal team: {}", e);
            DomainError::personal_team_not_found(subject.to_string())
        })?;

        self.memberships
            .create(TeamMembership::new(team_id, subject, TeamRole::Owner))
            .await
            .map_err(|e| {
                error!(user_id = %subject, "Failed to create owner membership: {}", e);
                DomainError::personal_team_not_found(subject.to_string())
            })?;

        let profile = self
            .profiles
            .update(
                subject,
                ProfileUpdate {
                    default_team_id: Some(team_id),
                    ..Default::default()
                },
            )
            .await?;

        info!(user_id = %subject, team_id = %team_id, "Registration complete");
        Ok(profile)
    }

    /// Current-user view with plan/quota summary.
    ///
    /// The active team is the token binding when present, otherwise the
    /// profile default.
    pub async fn get_me(&self, principal: &Principal) -> Result<Me, DomainError> {
        let profile = self
            .profiles
            .get(principal.subject_id())
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let plan = profile.plan().unwrap_or("free").to_string();
        let project_count = self.projects.count_by_owner(profile.id()).await?;

        let active_team_id = principal.team_id().or(profile.default_team_id());

        Ok(Me {
            team_info: TeamInfo {
                project_count,
                can_create_project: can_create_project(&plan, project_count),
                plan,
            },
            active_team_id,
            profile,
        })
    }

    /// Apply a partial profile update for the caller
    pub async fn update(
        &self,
        principal: &Principal,
        update: ProfileUpdate,
    ) -> Result<Profile, DomainError> {
        self.profiles.update(principal.subject_id(), update).await
    }
}
