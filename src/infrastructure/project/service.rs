//! Project service: quota-guarded CRUD over the project store

use std::sync::Arc;
use tracing::info;

use crate::domain::plan::{can_create_project, project_limit};
use crate::domain::project::{
    normalize_slug, validate_slug, Project, ProjectId, ProjectMember, ProjectMemberRepository,
    ProjectRepository, ProjectUpdate,
};
use crate::domain::profile::ProfileId;
use crate::domain::team::TeamRole;
use crate::domain::{DomainError, Principal};

/// Request for creating a project
#[derive(Debug, Clone)]
pub struct CreateProjectRequest {
    pub name: String,
    /// Optional explicit slug; derived from the name when absent
    pub slug: Option<String>,
    pub description: Option<String>,
    pub languages: Vec<String>,
    pub default_language: String,
}

/// Archived-status filter for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    Active,
    Archived,
    #[default]
    All,
}

impl ProjectFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "archived" => Some(Self::Archived),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    fn matches(&self, project: &Project) -> bool {
        match self {
            Self::Active => !project.is_archived(),
            Self::Archived => project.is_archived(),
            Self::All => true,
        }
    }
}

/// Request for adding a collaborator to a project
#[derive(Debug, Clone)]
pub struct AddMemberRequest {
    pub user_id: ProfileId,
    pub role: TeamRole,
}

/// Page selector for listings; `index` counts pages from zero
#[derive(Debug, Clone, Copy)]
pub struct ProjectPageRequest {
    pub index: u32,
    pub page_size: u32,
}

impl Default for ProjectPageRequest {
    fn default() -> Self {
        Self {
            index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

const DEFAULT_PAGE_SIZE: u32 = 15;

/// One page of a project listing with pagination metadata
#[derive(Debug, Clone)]
pub struct ProjectPage {
    pub items: Vec<Project>,
    pub index: u32,
    pub page_size: u32,
    pub total_count: u32,
    pub total_page_count: u32,
    pub has_next: bool,
}

/// Service enforcing ownership, quota and the archived write-lock
#[derive(Debug, Clone)]
pub struct ProjectService {
    projects: Arc<dyn ProjectRepository>,
    members: Arc<dyn ProjectMemberRepository>,
}

impl ProjectService {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        members: Arc<dyn ProjectMemberRepository>,
    ) -> Self {
        Self { projects, members }
    }

    /// Create a project under the caller's plan quota.
    ///
    /// The slug is normalized before validation, so `"My Project"` becomes
    /// `my-project` rather than failing. The quota decision is made against
    /// the caller's current owned-project count; the plan comes from the
    /// access token, not a store read.
    pub async fn create(
        &self,
        principal: &Principal,
        request: CreateProjectRequest,
    ) -> Result<Project, DomainError> {
        let slug = normalize_slug(request.slug.as_deref().unwrap_or(&request.name));
        validate_slug(&slug)?;

        let plan = principal.plan_or_default();
        let current_count = self.projects.count_by_owner(principal.subject_id()).await?;

        if !can_create_project(plan, current_count) {
            return Err(DomainError::project_quota(
                plan,
                current_count,
                project_limit(plan),
            ));
        }

        let project = Project::new(
            request.name,
            slug,
            request.description,
            request.languages,
            request.default_language,
            principal.subject_id(),
        );

        let project = self.projects.create(project).await?;
        info!(project_id = %project.id(), slug = %project.slug(), "Project created");
        Ok(project)
    }

    /// List one page of the caller's projects, newest first.
    ///
    /// Filtering happens before pagination, so the page metadata counts
    /// only projects matching the filter. An index past the end yields an
    /// empty page, not an error.
    pub async fn list(
        &self,
        principal: &Principal,
        filter: ProjectFilter,
        page: ProjectPageRequest,
    ) -> Result<ProjectPage, DomainError> {
        let mut projects = self.projects.list_by_owner(principal.subject_id()).await?;
        projects.retain(|p| filter.matches(p));
        projects.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        let page_size = if page.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page.page_size
        };

        let total_count = projects.len() as u32;
        let total_page_count = total_count.div_ceil(page_size);
        let from = (page.index * page_size).min(total_count) as usize;
        let to = (from + page_size as usize).min(total_count as usize);

        Ok(ProjectPage {
            items: projects.into_iter().skip(from).take(to - from).collect(),
            index: page.index,
            page_size,
            total_count,
            total_page_count,
            has_next: (to as u32) < total_count,
        })
    }

    /// Fetch one of the caller's projects
    pub async fn get(
        &self,
        principal: &Principal,
        id: ProjectId,
    ) -> Result<Project, DomainError> {
        let project = self
            .projects
            .get(id)
            .await?
            .ok_or(DomainError::ProjectNotFound)?;

        if project.owner_id() != principal.subject_id() {
            return Err(DomainError::forbidden_project_access());
        }

        Ok(project)
    }

    /// Apply a partial update.
    ///
    /// Ownership is checked before the archived state so a non-owner
    /// learns nothing about the project beyond its existence.
    pub async fn update(
        &self,
        principal: &Principal,
        id: ProjectId,
        update: ProjectUpdate,
    ) -> Result<Project, DomainError> {
        let mut project = self.writable(principal, id).await?;
        project.apply_update(update);
        self.projects.update(&project).await
    }

    /// Archive a project, making it read-only
    pub async fn archive(
        &self,
        principal: &Principal,
        id: ProjectId,
    ) -> Result<Project, DomainError> {
        let mut project = self.writable(principal, id).await?;
        project.archive();
        let project = self.projects.update(&project).await?;
        info!(project_id = %project.id(), "Project archived");
        Ok(project)
    }

    /// Add a collaborator to one of the caller's projects.
    ///
    /// Only the owner can manage members, and an archived project is
    /// read-only for membership too.
    pub async fn add_member(
        &self,
        principal: &Principal,
        id: ProjectId,
        request: AddMemberRequest,
    ) -> Result<ProjectMember, DomainError> {
        let project = self.writable(principal, id).await?;

        let member = ProjectMember::new(
            project.id(),
            request.user_id,
            request.role,
            principal.subject_id(),
        );

        let member = self.members.create(member).await?;
        info!(project_id = %id, user_id = %member.user_id(), "Project member added");
        Ok(member)
    }

    /// Remove a collaborator from one of the caller's projects
    pub async fn remove_member(
        &self,
        principal: &Principal,
        id: ProjectId,
        user_id: ProfileId,
    ) -> Result<(), DomainError> {
        self.writable(principal, id).await?;

        if !self.members.delete(id, user_id).await? {
            return Err(DomainError::UserNotFound);
        }

        info!(project_id = %id, user_id = %user_id, "Project member removed");
        Ok(())
    }

    async fn writable(
        &self,
        principal: &Principal,
        id: ProjectId,
    ) -> Result<Project, DomainError> {
        let project = self
            .projects
            .get(id)
            .await?
            .ok_or(DomainError::ProjectNotFound)?;

        if project.owner_id() != principal.subject_id() {
            return Err(DomainError::forbidden_project_access());
        }
        if project.is_archived() {
            return Err(DomainError::ProjectArchived);
        }

        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::project::{
        InMemoryProjectMemberRepository, InMemoryProjectRepository,
    };
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn service() -> (ProjectService, Arc<InMemoryProjectRepository>) {
        let repo = Arc::new(InMemoryProjectRepository::new());
        let members = Arc::new(InMemoryProjectMemberRepository::new());
        (ProjectService::new(repo.clone(), members), repo)
    }

    fn principal_with_plan(plan: &str) -> Principal {
        Principal::new(
            ProfileId::new(Uuid::new_v4()),
            None,
            Some(plan.to_string()),
            None,
            Utc::now(),
            Utc::now() + Duration::minutes(15),
        )
    }

    fn create_request(name: &str) -> CreateProjectRequest {
        CreateProjectRequest {
            name: name.to_string(),
            slug: None,
            description: None,
            languages: vec!["en".to_string()],
            default_language: "en".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_normalizes_slug() {
        let (service, _) = service();
        let principal = principal_with_plan("pro");

        let project = service
            .create(&principal, create_request("My First Project"))
            .await
            .unwrap();
        assert_eq!(project.slug(), "my-first-project");
    }

    #[tokio::test]
    async fn test_create_rejects_unusable_slug() {
        let (service, _) = service();
        let principal = principal_with_plan("pro");

        let mut request = create_request("日本語");
        request.slug = None;

        let err = service.create(&principal, request).await.unwrap_err();
        assert!(matches!(err, DomainError::ProjectValidation { .. }));
    }

    #[tokio::test]
    async fn test_free_plan_quota() {
        let (service, _) = service();
        let principal = principal_with_plan("free");

        service
            .create(&principal, create_request("first"))
            .await
            .unwrap();

        let err = service
            .create(&principal, create_request("second"))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Project limit exceeded. Your free plan allows 1 project, and you currently have 1."
        );
    }

    #[tokio::test]
    async fn test_missing_plan_claim_counts_as_free() {
        let (service, _) = service();
        let principal = Principal::new(
            ProfileId::new(Uuid::new_v4()),
            None,
            None,
            None,
            Utc::now(),
            Utc::now() + Duration::minutes(15),
        );

        service
            .create(&principal, create_request("only"))
            .await
            .unwrap();

        let err = service
            .create(&principal, create_request("extra"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ForbiddenProjectAccess { .. }));
    }

    #[tokio::test]
    async fn test_enterprise_plan_is_unbounded() {
        let (service, repo) = service();
        let principal = principal_with_plan("enterprise");

        for i in 0..25 {
            service
                .create(&principal, create_request(&format!("project {}", i)))
                .await
                .unwrap();
        }

        assert_eq!(repo.count_by_owner(principal.subject_id()).await.unwrap(), 25);
    }

    #[tokio::test]
    async fn test_list_filters_and_orders() {
        let (service, _) = service();
        let principal = principal_with_plan("pro");

        let first = service
            .create(&principal, create_request("first"))
            .await
            .unwrap();
        let second = service
            .create(&principal, create_request("second"))
            .await
            .unwrap();

        service.archive(&principal, first.id()).await.unwrap();

        let active = service
            .list(&principal, ProjectFilter::Active, ProjectPageRequest::default())
            .await
            .unwrap();
        assert_eq!(active.items.len(), 1);
        assert_eq!(active.items[0].id(), second.id());
        assert_eq!(active.total_count, 1);

        let archived = service
            .list(&principal, ProjectFilter::Archived, ProjectPageRequest::default())
            .await
            .unwrap();
        assert_eq!(archived.items.len(), 1);
        assert_eq!(archived.items[0].id(), first.id());

        let all = service
            .list(&principal, ProjectFilter::All, ProjectPageRequest::default())
            .await
            .unwrap();
        assert_eq!(all.items.len(), 2);
        // Newest first
        assert_eq!(all.items[0].id(), second.id());
    }

    #[tokio::test]
    async fn test_list_pagination_metadata() {
        let (service, _) = service();
        let principal = principal_with_plan("enterprise");

        for i in 0..7 {
            service
                .create(&principal, create_request(&format!("project {}", i)))
                .await
                .unwrap();
        }

        let page = ProjectPageRequest {
            index: 0,
            page_size: 3,
        };
        let first = service
            .list(&principal, ProjectFilter::All, page)
            .await
            .unwrap();
        assert_eq!(first.items.len(), 3);
        assert_eq!(first.total_count, 7);
        assert_eq!(first.total_page_count, 3);
        assert!(first.has_next);

        let last = service
            .list(
                &principal,
                ProjectFilter::All,
                ProjectPageRequest {
                    index: 2,
                    page_size: 3,
                },
            )
            .await
            .unwrap();
        assert_eq!(last.items.len(), 1);
        assert!(!last.has_next);

        // Past the end is an empty page, not an error
        let beyond = service
            .list(
                &principal,
                ProjectFilter::All,
                ProjectPageRequest {
                    index: 9,
                    page_size: 3,
                },
            )
            .await
            .unwrap();
        assert!(beyond.items.is_empty());
        assert!(!beyond.has_next);
    }

    #[tokio::test]
    async fn test_zero_page_size_uses_default() {
        let (service, _) = service();
        let principal = principal_with_plan("pro");

        service
            .create(&principal, create_request("solo"))
            .await
            .unwrap();

        let page = service
            .list(
                &principal,
                ProjectFilter::All,
                ProjectPageRequest {
                    index: 0,
                    page_size: 0,
                },
            )
            .await
            .unwrap();
        assert_eq!(page.page_size, 15);
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_get_enforces_ownership() {
        let (service, _) = service();
        let owner = principal_with_plan("pro");
        let outsider = principal_with_plan("pro");

        let project = service
            .create(&owner, create_request("private"))
            .await
            .unwrap();

        let err = service.get(&outsider, project.id()).await.unwrap_err();
        assert_eq!(err.to_string(), "Forbidden: insufficient project access");
    }

    #[tokio::test]
    async fn test_update_owner_check_precedes_archived_check() {
        let (service, _) = service();
        let owner = principal_with_plan("pro");
        let outsider = principal_with_plan("pro");

        let project = service
            .create(&owner, create_request("locked"))
            .await
            .unwrap();
        service.archive(&owner, project.id()).await.unwrap();

        // Non-owner sees the access error, not the archived state
        let err = service
            .update(&outsider, project.id(), ProjectUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ForbiddenProjectAccess { .. }));

        let err = service
            .update(&owner, project.id(), ProjectUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ProjectArchived));
    }

    #[tokio::test]
    async fn test_update_missing_project() {
        let (service, _) = service();
        let principal = principal_with_plan("pro");

        let err = service
            .update(&principal, ProjectId::generate(), ProjectUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ProjectNotFound));
    }

    #[tokio::test]
    async fn test_archive_twice_is_rejected() {
        let (service, _) = service();
        let principal = principal_with_plan("pro");

        let project = service
            .create(&principal, create_request("once"))
            .await
            .unwrap();

        service.archive(&principal, project.id()).await.unwrap();
        let err = service.archive(&principal, project.id()).await.unwrap_err();
        assert!(matches!(err, DomainError::ProjectArchived));
    }

    #[tokio::test]
    async fn test_add_and_remove_member() {
        let (service, _) = service();
        let owner = principal_with_plan("pro");
        let invitee = ProfileId::new(Uuid::new_v4());

        let project = service
            .create(&owner, create_request("shared"))
            .await
            .unwrap();

        let member = service
            .add_member(
                &owner,
                project.id(),
                AddMemberRequest {
                    user_id: invitee,
                    role: TeamRole::Editor,
                },
            )
            .await
            .unwrap();
        assert_eq!(member.invited_by(), owner.subject_id());

        service
            .remove_member(&owner, project.id(), invitee)
            .await
            .unwrap();

        let err = service
            .remove_member(&owner, project.id(), invitee)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::UserNotFound));
    }

    #[tokio::test]
    async fn test_only_owner_manages_members() {
        let (service, _) = service();
        let owner = principal_with_plan("pro");
        let outsider = principal_with_plan("pro");

        let project = service
            .create(&owner, create_request("guarded"))
            .await
            .unwrap();

        let err = service
            .add_member(
                &outsider,
                project.id(),
                AddMemberRequest {
                    user_id: outsider.subject_id(),
                    role: TeamRole::Viewer,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ForbiddenProjectAccess { .. }));
    }

    #[tokio::test]
    async fn test_archived_project_locks_membership() {
        let (service, _) = service();
        let owner = principal_with_plan("pro");
        let invitee = ProfileId::new(Uuid::new_v4());

        let project = service
            .create(&owner, create_request("frozen"))
            .await
            .unwrap();
        service
            .add_member(
                &owner,
                project.id(),
                AddMemberRequest {
                    user_id: invitee,
                    role: TeamRole::Viewer,
                },
            )
            .await
            .unwrap();
        service.archive(&owner, project.id()).await.unwrap();

        let err = service
            .remove_member(&owner, project.id(), invitee)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ProjectArchived));
    }

    #[tokio::test]
    async fn test_filter_parse() {
        assert_eq!(ProjectFilter::parse("active"), Some(ProjectFilter::Active));
        assert_eq!(ProjectFilter::parse("archived"), Some(ProjectFilter::Archived));
        assert_eq!(ProjectFilter::parse("all"), Some(ProjectFilter::All));
        assert_eq!(ProjectFilter::parse("other"), None);
    }
}
