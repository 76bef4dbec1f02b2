//! Versioned API endpoints

pub mod auth;
pub mod projects;
pub mod teams;
pub mod users;

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::state::AppState;

/// Create the /api/v1 router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/auth/switch-team", post(auth::switch_team))
        .route("/users/register", post(users::register))
        .route("/users/me", get(users::get_me).patch(users::update_me))
        .route("/teams", post(teams::create_team))
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/projects/{project_id}",
            get(projects::get_project)
                .patch(projects::update_project)
                .delete(projects::archive_project),
        )
        .route(
            "/projects/{project_id}/members",
            post(projects::add_project_member),
        )
        .route(
            "/projects/{project_id}/members/{user_id}",
            delete(projects::remove_project_member),
        )
}
