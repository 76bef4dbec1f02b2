//! Project endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use crate::api::middleware::RequirePrincipal;
use crate::api::state::AppState;
use crate::api::types::{
    AddMemberBody, ApiError, CreateProjectBody, ListProjectsQuery, ProjectListResponse,
    ProjectMemberResponse, ProjectResponse, UpdateProjectBody,
};
use crate::domain::profile::ProfileId;
use crate::domain::project::ProjectId;
use crate::infrastructure::project::{ProjectFilter, ProjectPageRequest};

/// POST /api/v1/projects
pub async fn create_project(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Json(body): Json<CreateProjectBody>,
) -> Result<Json<ProjectResponse>, ApiError> {
    debug!(user_id = %principal.subject_id(), name = %body.name, "Create project");

    let project = state
        .project_service
        .create(&principal, body.into_request())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ProjectResponse::from_domain(&project)))
}

/// GET /api/v1/projects
pub async fn list_projects(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Query(query): Query<ListProjectsQuery>,
) -> Result<Json<ProjectListResponse>, ApiError> {
    let filter = match query.status.as_deref() {
        Some(status) => ProjectFilter::parse(status)
            .ok_or_else(|| ApiError::bad_request(format!("Invalid status filter: {}", status)))?,
        None => ProjectFilter::default(),
    };

    let defaults = ProjectPageRequest::default();
    let page = ProjectPageRequest {
        index: query.index.unwrap_or(defaults.index),
        page_size: query.page_size.unwrap_or(defaults.page_size),
    };

    let projects = state
        .project_service
        .list(&principal, filter, page)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ProjectListResponse::from_domain(&projects)))
}

/// GET /api/v1/projects/{project_id}
pub async fn get_project(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(project_id): Path<String>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let id = parse_project_id(&project_id)?;

    let project = state
        .project_service
        .get(&principal, id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ProjectResponse::from_domain(&project)))
}

/// PATCH /api/v1/projects/{project_id}
pub async fn update_project(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(project_id): Path<String>,
    Json(body): Json<UpdateProjectBody>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let id = parse_project_id(&project_id)?;

    let project = state
        .project_service
        .update(&principal, id, body.into_update())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ProjectResponse::from_domain(&project)))
}

/// DELETE /api/v1/projects/{project_id}
///
/// Projects are archived, never hard-deleted.
pub async fn archive_project(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(project_id): Path<String>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let id = parse_project_id(&project_id)?;

    debug!(project_id = %id, "Archive project");

    let project = state
        .project_service
        .archive(&principal, id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ProjectResponse::from_domain(&project)))
}

/// POST /api/v1/projects/{project_id}/members
pub async fn add_project_member(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(project_id): Path<String>,
    Json(body): Json<AddMemberBody>,
) -> Result<Json<ProjectMemberResponse>, ApiError> {
    let id = parse_project_id(&project_id)?;
    let request = body.into_request().map_err(ApiError::from)?;

    debug!(project_id = %id, user_id = %request.user_id, "Add project member");

    let member = state
        .project_service
        .add_member(&principal, id, request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ProjectMemberResponse::from_domain(&member)))
}

/// DELETE /api/v1/projects/{project_id}/members/{user_id}
pub async fn remove_project_member(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path((project_id, user_id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_project_id(&project_id)?;
    let user = ProfileId::parse(&user_id)
        .map_err(|_| ApiError::bad_request(format!("Invalid user ID: {}", user_id)))?;

    state
        .project_service
        .remove_member(&principal, id, user)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(serde_json::json!({ "removed": true })))
}

fn parse_project_id(value: &str) -> Result<ProjectId, ApiError> {
    ProjectId::parse(value)
        .map_err(|_| ApiError::bad_request(format!("Invalid project ID: {}", value)))
}
