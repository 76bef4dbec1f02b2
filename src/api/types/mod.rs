//! Wire types for the HTTP API
//!
//! Field names are camelCase to match the web client.

pub mod error;
pub mod project;
pub mod session;
pub mod team;
pub mod user;

pub use error::{ApiError, ApiErrorBody};
pub use project::{
    AddMemberBody, CreateProjectBody, ListProjectsQuery, ProjectListResponse,
    ProjectMemberResponse, ProjectResponse, UpdateProjectBody,
};
pub use session::{LoginRequest, RefreshRequest, SessionResponse, SwitchTeamRequest};
pub use team::{CreateTeamBody, TeamResponse};
pub use user::{MeResponse, ProfileResponse, UpdateProfileRequest};
