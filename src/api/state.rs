//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::auth::TokenCodec;
use crate::infrastructure::project::ProjectService;
use crate::infrastructure::session::SessionService;
use crate::infrastructure::team::TeamService;
use crate::infrastructure::user::UserService;

/// Shared state handed to every request handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub user_service: Arc<UserService>,
    pub team_service: Arc<TeamService>,
    pub project_service: Arc<ProjectService>,
    pub token_codec: Arc<TokenCodec>,
}

impl AppState {
    pub fn new(
        session_service: Arc<SessionService>,
        user_service: Arc<UserService>,
        team_service: Arc<TeamService>,
        project_service: Arc<ProjectService>,
        token_codec: Arc<TokenCodec>,
    ) -> Self {
        Self {
            session_service,
            user_service,
            team_service,
            project_service,
            token_codec,
        }
    }
}
