//! Project endpoint request/response types

use serde::{Deserialize, Serialize};

use crate::domain::profile::ProfileId;
use crate::domain::project::{Project, ProjectMember, ProjectUpdate};
use crate::domain::team::TeamRole;
use crate::domain::DomainError;
use crate::infrastructure::project::{AddMemberRequest, CreateProjectRequest, ProjectPage};

/// Project as exposed over the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub languages: Vec<String>,
    pub default_language: String,
    pub owner_id: String,
    pub archived: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl ProjectResponse {
    pub fn from_domain(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            name: project.name().to_string(),
            slug: project.slug().to_string(),
            description: project.description().map(str::to_string),
            languages: project.languages().to_vec(),
            default_language: project.default_language().to_string(),
            owner_id: project.owner_id().to_string(),
            archived: project.is_archived(),
            created_at: project.created_at(),
            updated_at: project.updated_at(),
        }
    }
}

/// POST /api/v1/projects request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectBody {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub languages: Vec<String>,
    pub default_language: String,
}

impl CreateProjectBody {
    pub fn into_request(self) -> CreateProjectRequest {
        CreateProjectRequest {
            name: self.name,
            slug: self.slug,
            description: self.description,
            languages: self.languages,
            default_language: self.default_language,
        }
    }
}

/// PATCH /api/v1/projects/{id} request body
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub languages: Option<Vec<String>>,
    pub default_language: Option<String>,
}

impl UpdateProjectBody {
    pub fn into_update(self) -> ProjectUpdate {
        ProjectUpdate {
            name: self.name,
            description: self.description,
            languages: self.languages,
            default_language: self.default_language,
        }
    }
}

/// GET /api/v1/projects query parameters
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsQuery {
    pub status: Option<String>,
    pub page_size: Option<u32>,
    pub index: Option<u32>,
}

/// Pagination metadata of a project listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListMeta {
    pub index: u32,
    pub page_size: u32,
    pub has_next: bool,
    pub total_count: u32,
    pub total_page_count: u32,
}

/// GET /api/v1/projects response body
#[derive(Debug, Clone, Serialize)]
pub struct ProjectListResponse {
    pub items: Vec<ProjectResponse>,
    pub meta: ProjectListMeta,
}

impl ProjectListResponse {
    pub fn from_domain(page: &ProjectPage) -> Self {
        Self {
            items: page.items.iter().map(ProjectResponse::from_domain).collect(),
            meta: ProjectListMeta {
                index: page.index,
                page_size: page.page_size,
                has_next: page.has_next,
                total_count: page.total_count,
                total_page_count: page.total_page_count,
            },
        }
    }
}

/// Project member as exposed over the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMemberResponse {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub role: String,
    pub invited_by: String,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

impl ProjectMemberResponse {
    pub fn from_domain(member: &ProjectMember) -> Self {
        Self {
            id: member.id().to_string(),
            project_id: member.project_id().to_string(),
            user_id: member.user_id().to_string(),
            role: member.role().to_string(),
            invited_by: member.invited_by().to_string(),
            joined_at: member.joined_at(),
        }
    }
}

/// POST /api/v1/projects/{id}/members request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberBody {
    pub user_id: String,
    pub role: String,
}

impl AddMemberBody {
    pub fn into_request(self) -> Result<AddMemberRequest, DomainError> {
        let user_id = ProfileId::parse(&self.user_id).map_err(|_| {
            DomainError::project_validation(format!("Invalid user ID: {}", self.user_id))
        })?;
        let role = TeamRole::parse(&self.role).ok_or_else(|| {
            DomainError::project_validation(format!("Invalid member role: {}", self.role))
        })?;

        Ok(AddMemberRequest { user_id, role })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::ProfileId;
    use uuid::Uuid;

    #[test]
    fn test_project_response_field_names() {
        let project = Project::new(
            "Docs",
            "docs",
            None,
            vec!["en".to_string(), "fr".to_string()],
            "en",
            ProfileId::new(Uuid::new_v4()),
        );

        let json = serde_json::to_value(ProjectResponse::from_domain(&project)).unwrap();
        assert_eq!(json["slug"], "docs");
        assert_eq!(json["defaultLanguage"], "en");
        assert_eq!(json["archived"], false);
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_create_body_field_names() {
        let body: CreateProjectBody = serde_json::from_str(
            r#"{"name": "Docs", "languages": ["en"], "defaultLanguage": "en"}"#,
        )
        .unwrap();
        assert_eq!(body.default_language, "en");
        assert!(body.slug.is_none());
    }

    #[test]
    fn test_list_response_meta_field_names() {
        let page = ProjectPage {
            items: vec![],
            index: 1,
            page_size: 15,
            total_count: 16,
            total_page_count: 2,
            has_next: false,
        };

        let json = serde_json::to_value(ProjectListResponse::from_domain(&page)).unwrap();
        assert_eq!(json["meta"]["pageSize"], 15);
        assert_eq!(json["meta"]["totalPageCount"], 2);
        assert_eq!(json["meta"]["hasNext"], false);
    }

    #[test]
    fn test_add_member_body_validation() {
        let body: AddMemberBody = serde_json::from_str(
            r#"{"userId": "11111111-1111-1111-1111-111111111111", "role": "editor"}"#,
        )
        .unwrap();
        let request = body.into_request().unwrap();
        assert_eq!(request.role, TeamRole::Editor);

        let bad_id = AddMemberBody {
            user_id: "nope".to_string(),
            role: "viewer".to_string(),
        };
        let err = bad_id.into_request().unwrap_err();
        assert_eq!(err.to_string(), "Project validation failed: Invalid user ID: nope");

        let bad_role = AddMemberBody {
            user_id: Uuid::new_v4().to_string(),
            role: "admin".to_string(),
        };
        let err = bad_role.into_request().unwrap_err();
        assert!(matches!(err, DomainError::ProjectValidation { .. }));
    }
}
