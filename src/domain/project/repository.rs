//! Project repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Project, ProjectId};
use super::member::ProjectMember;
use crate::domain::profile::ProfileId;
use crate::domain::DomainError;

/// Repository trait for project storage
#[async_trait]
pub trait ProjectRepository: Send + Sync + Debug {
    /// Get a project by id
    async fn get(&self, id: ProjectId) -> Result<Option<Project>, DomainError>;

    /// Create a new project; duplicate slugs are a `ProjectConflict`
    async fn create(&self, project: Project) -> Result<Project, DomainError>;

    /// Persist changed fields of an existing project
    async fn update(&self, project: &Project) -> Result<Project, DomainError>;

    /// List projects owned by a user
    async fn list_by_owner(&self, owner: ProfileId) -> Result<Vec<Project>, DomainError>;

    /// Count projects owned by a user (quota input)
    async fn count_by_owner(&self, owner: ProfileId) -> Result<u32, DomainError>;
}

/// Repository trait for project collaborators
#[async_trait]
pub trait ProjectMemberRepository: Send + Sync + Debug {
    /// Look up a member of a project
    async fn get_by_project_and_user(
        &self,
        project: ProjectId,
        user: ProfileId,
    ) -> Result<Option<ProjectMember>, DomainError>;

    /// Add a member; the `(project, user)` pair is unique
    async fn create(&self, member: ProjectMember) -> Result<ProjectMember, DomainError>;

    /// Remove a member; returns whether one was present
    async fn delete(&self, project: ProjectId, user: ProfileId) -> Result<bool, DomainError>;
}
