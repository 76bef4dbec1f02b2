//! PostgreSQL project repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::profile::ProfileId;
use crate::domain::project::{
    Project, ProjectId, ProjectMember, ProjectMemberId, ProjectMemberRepository, ProjectRepository,
};
use crate::domain::team::TeamRole;
use crate::domain::DomainError;

/// PostgreSQL implementation of ProjectRepository
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn get(&self, id: ProjectId) -> Result<Option<Project>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, slug, description, languages, default_language, owner_id,
                   archived, created_at, updated_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get project: {}", e)))?;

        Ok(row.map(|row| row_to_project(&row)))
    }

    async fn create(&self, project: Project) -> Result<Project, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO projects (id, name, slug, description, languages, default_language,
                                  owner_id, archived, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(project.id().as_uuid())
        .bind(project.name())
        .bind(project.slug())
        .bind(project.description())
        .bind(project.languages())
        .bind(project.default_language())
        .bind(project.owner_id().as_uuid())
        .bind(project.is_archived())
        .bind(project.created_at())
        .bind(project.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::project_conflict("Slug already exists")
            } else {
                DomainError::storage(format!("Failed to create project: {}", e))
            }
        })?;

        Ok(project)
    }

    async fn update(&self, project: &Project) -> Result<Project, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET name = $2, description = $3, languages = $4, default_language = $5,
                archived = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(project.id().as_uuid())
        .bind(project.name())
        .bind(project.description())
        .bind(project.languages())
        .bind(project.default_language())
        .bind(project.is_archived())
        .bind(project.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update project: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProjectNotFound);
        }

        Ok(project.clone())
    }

    async fn list_by_owner(&self, owner: ProfileId) -> Result<Vec<Project>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, slug, description, languages, default_language, owner_id,
                   archived, created_at, updated_at
            FROM projects
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list projects: {}", e)))?;

        Ok(rows.iter().map(row_to_project).collect())
    }

    async fn count_by_owner(&self, owner: ProfileId) -> Result<u32, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS total
            FROM projects
            WHERE owner_id = $1
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to count projects: {}", e)))?;

        let total: i64 = row.get("total");
        Ok(total as u32)
    }
}

/// PostgreSQL implementation of ProjectMemberRepository
#[derive(Debug, Clone)]
pub struct PostgresProjectMemberRepository {
    pool: PgPool,
}

impl PostgresProjectMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectMemberRepository for PostgresProjectMemberRepository {
    async fn get_by_project_and_user(
        &self,
        project: ProjectId,
        user: ProfileId,
    ) -> Result<Option<ProjectMember>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, project_id, user_id, role, invited_by, joined_at
            FROM project_members
            WHERE project_id = $1 AND user_id = $2
            "#,
        )
        .bind(project.as_uuid())
        .bind(user.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get project member: {}", e)))?;

        row.map(|row| row_to_member(&row)).transpose()
    }

    async fn create(&self, member: ProjectMember) -> Result<ProjectMember, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO project_members (id, project_id, user_id, role, invited_by, joined_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(member.id().as_uuid())
        .bind(member.project_id().as_uuid())
        .bind(member.user_id().as_uuid())
        .bind(member.role().as_str())
        .bind(member.invited_by().as_uuid())
        .bind(member.joined_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::project_conflict("User is already a member")
            } else {
                DomainError::storage(format!("Failed to add project member: {}", e))
            }
        })?;

        Ok(member)
    }

    async fn delete(&self, project: ProjectId, user: ProfileId) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM project_members
            WHERE project_id = $1 AND user_id = $2
            "#,
        )
        .bind(project.as_uuid())
        .bind(user.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to remove project member: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_member(row: &sqlx::postgres::PgRow) -> Result<ProjectMember, DomainError> {
    let id: Uuid = row.get("id");
    let project_id: Uuid = row.get("project_id");
    let user_id: Uuid = row.get("user_id");
    let invited_by: Uuid = row.get("invited_by");
    let role: String = row.get("role");

    let role = TeamRole::parse(&role)
        .ok_or_else(|| DomainError::storage(format!("Unknown member role: {}", role)))?;

    Ok(ProjectMember::from_parts(
        ProjectMemberId::new(id),
        ProjectId::new(project_id),
        ProfileId::new(user_id),
        role,
        ProfileId::new(invited_by),
        row.get("joined_at"),
    ))
}

fn row_to_project(row: &sqlx::postgres::PgRow) -> Project {
    let id: Uuid = row.get("id");
    let owner_id: Uuid = row.get("owner_id");

    Project::from_parts(
        ProjectId::new(id),
        row.get("name"),
        row.get("slug"),
        row.get("description"),
        row.get("languages"),
        row.get("default_language"),
        ProfileId::new(owner_id),
        row.get("archived"),
        row.get("created_at"),
        row.get("updated_at"),
    )
}
