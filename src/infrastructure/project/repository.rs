//! In-memory project repository

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::profile::ProfileId;
use crate::domain::project::{
    Project, ProjectId, ProjectMember, ProjectMemberRepository, ProjectRepository,
};
use crate::domain::DomainError;

/// In-memory implementation of ProjectRepository
#[derive(Debug, Default)]
pub struct InMemoryProjectRepository {
    projects: RwLock<HashMap<ProjectId, Project>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn get(&self, id: ProjectId) -> Result<Option<Project>, DomainError> {
        let projects = self.projects.read().await;
        Ok(projects.get(&id).cloned())
    }

    async fn create(&self, project: Project) -> Result<Project, DomainError> {
        let mut projects = self.projects.write().await;

        // Slug uniqueness mirrors the database constraint
        if projects.values().any(|p| p.slug() == project.slug()) {
            return Err(DomainError::project_conflict("Slug already exists"));
        }

        projects.insert(project.id(), project.clone());
        Ok(project)
    }

    async fn update(&self, project: &Project) -> Result<Project, DomainError> {
        let mut projects = self.projects.write().await;

        if !projects.contains_key(&project.id()) {
            return Err(DomainError::ProjectNotFound);
        }

        projects.insert(project.id(), project.clone());
        Ok(project.clone())
    }

    async fn list_by_owner(&self, owner: ProfileId) -> Result<Vec<Project>, DomainError> {
        let projects = self.projects.read().await;
        Ok(projects
            .values()
            .filter(|p| p.owner_id() == owner)
            .cloned()
            .collect())
    }

    async fn count_by_owner(&self, owner: ProfileId) -> Result<u32, DomainError> {
        let projects = self.projects.read().await;
        Ok(projects.values().filter(|p| p.owner_id() == owner).count() as u32)
    }
}

/// In-memory implementation of ProjectMemberRepository
#[derive(Debug, Default)]
pub struct InMemoryProjectMemberRepository {
    members: RwLock<HashMap<(ProjectId, ProfileId), ProjectMember>>,
}

impl InMemoryProjectMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectMemberRepository for InMemoryProjectMemberRepository {
    async fn get_by_project_and_user(
        &self,
        project: ProjectId,
        user: ProfileId,
    ) -> Result<Option<ProjectMember>, DomainError> {
        let members = self.members.read().await;
        Ok(members.get(&(project, user)).cloned())
    }

    async fn create(&self, member: ProjectMember) -> Result<ProjectMember, DomainError> {
        let mut members = self.members.write().await;
        let key = (member.project_id(), member.user_id());

        // (project, user) uniqueness mirrors the database constraint
        if members.contains_key(&key) {
            return Err(DomainError::project_conflict("User is already a member"));
        }

        members.insert(key, member.clone());
        Ok(member)
    }

    async fn delete(&self, project: ProjectId, user: ProfileId) -> Result<bool, DomainError> {
        let mut members = self.members.write().await;
        Ok(members.remove(&(project, user)).is_some())
    }
}
