//! Phraseforge API
//!
//! Multi-tenant localization platform backend:
//! - Session tokens (HS256 JWT pairs) issued against an external identity
//!   provider
//! - Team-scoped authorization with personal-team fallback
//! - Per-plan project quotas
//! - Project CRUD with slug validation and archive semantics

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use domain::profile::ProfileRepository;
use domain::project::{ProjectMemberRepository, ProjectRepository};
use domain::team::{MembershipRepository, TeamRepository};
use domain::IdentityProvider;
use infrastructure::auth::{JwtConfig, TeamContextResolver, TokenCodec};
use infrastructure::identity::HttpIdentityProvider;
use infrastructure::profile::{InMemoryProfileRepository, PostgresProfileRepository};
use infrastructure::project::{
    InMemoryProjectMemberRepository, InMemoryProjectRepository, PostgresProjectMemberRepository,
    PostgresProjectRepository, ProjectService,
};
use infrastructure::session::SessionService;
use infrastructure::team::{
    InMemoryMembershipRepository, InMemoryTeamRepository, PostgresMembershipRepository,
    PostgresTeamRepository, TeamService,
};
use infrastructure::user::UserService;

/// Create the application state with all services initialized.
///
/// With a database URL configured the sqlx repositories are used; without
/// one everything runs against the in-memory stores, which is enough for
/// local development and tests.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let token_codec = Arc::new(TokenCodec::new(JwtConfig::new(
        config.jwt.secret.clone(),
        &config.jwt.expires_in,
        &config.jwt.refresh_expires_in,
    )));

    let identity: Arc<dyn IdentityProvider> = Arc::new(HttpIdentityProvider::new(
        config.provider.url.clone(),
        config.provider.api_key.clone(),
    ));

    let (profiles, teams, memberships, projects, project_members): (
        Arc<dyn ProfileRepository>,
        Arc<dyn TeamRepository>,
        Arc<dyn MembershipRepository>,
        Arc<dyn ProjectRepository>,
        Arc<dyn ProjectMemberRepository>,
    ) = match &config.database.url {
        Some(url) => {
            info!("Connecting to PostgreSQL...");
            let pool = sqlx::PgPool::connect(url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
            info!("PostgreSQL connection established");

            (
                Arc::new(PostgresProfileRepository::new(pool.clone())),
                Arc::new(PostgresTeamRepository::new(pool.clone())),
                Arc::new(PostgresMembershipRepository::new(pool.clone())),
                Arc::new(PostgresProjectRepository::new(pool.clone())),
                Arc::new(PostgresProjectMemberRepository::new(pool)),
            )
        }
        None => {
            info!("No database configured, using in-memory stores");

            (
                Arc::new(InMemoryProfileRepository::new()),
                Arc::new(InMemoryTeamRepository::new()),
                Arc::new(InMemoryMembershipRepository::new()),
                Arc::new(InMemoryProjectRepository::new()),
                Arc::new(InMemoryProjectMemberRepository::new()),
            )
        }
    };

    let resolver = TeamContextResolver::new(teams.clone(), memberships.clone());

    let session_service = Arc::new(SessionService::new(
        identity,
        profiles.clone(),
        resolver,
        token_codec.clone(),
    ));
    let user_service = Arc::new(UserService::new(
        profiles,
        teams.clone(),
        memberships.clone(),
        projects.clone(),
    ));
    let team_service = Arc::new(TeamService::new(teams, memberships));
    let project_service = Arc::new(ProjectService::new(projects, project_members));

    Ok(AppState::new(
        session_service,
        user_service,
        team_service,
        project_service,
        token_codec,
    ))
}
