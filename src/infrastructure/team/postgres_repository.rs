//! PostgreSQL team and membership repositories

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::profile::ProfileId;
use crate::domain::team::{
    MembershipId, MembershipRepository, Team, TeamId, TeamMembership, TeamRepository, TeamRole,
};
use crate::domain::DomainError;

/// PostgreSQL implementation of TeamRepository
#[derive(Debug, Clone)]
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, owner_id, avatar_url, is_personal, created_at, updated_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get team: {}", e)))?;

        Ok(row.map(|row| row_to_team(&row)))
    }

    async fn create(&self, team: Team) -> Result<Team, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO teams (id, name, owner_id, avatar_url, is_personal,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(team.id().as_uuid())
        .bind(team.name())
        .bind(team.owner_id().as_uuid())
        .bind(team.avatar_url())
        .bind(team.is_personal())
        .bind(team.created_at())
        .bind(team.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create team: {}", e)))?;

        Ok(team)
    }

    async fn get_personal_by_owner(&self, owner: ProfileId) -> Result<Option<Team>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, owner_id, avatar_url, is_personal, created_at, updated_at
            FROM teams
            WHERE owner_id = $1 AND is_personal = TRUE
            LIMIT 1
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get personal team: {}", e)))?;

        Ok(row.map(|row| row_to_team(&row)))
    }
}

/// PostgreSQL implementation of MembershipRepository
#[derive(Debug, Clone)]
pub struct PostgresMembershipRepository {
    pool: PgPool,
}

impl PostgresMembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipRepository for PostgresMembershipRepository {
    async fn get_by_user_and_team(
        &self,
        user: ProfileId,
        team: TeamId,
    ) -> Result<Option<TeamMembership>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, team_id, user_id, role, joined_at
            FROM team_memberships
            WHERE user_id = $1 AND team_id = $2
            "#,
        )
        .bind(user.as_uuid())
        .bind(team.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get membership: {}", e)))?;

        row.map(|row| row_to_membership(&row)).transpose()
    }

    async fn create(&self, membership: TeamMembership) -> Result<TeamMembership, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO team_memberships (id, team_id, user_id, role, joined_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(membership.id().as_uuid())
        .bind(membership.team_id().as_uuid())
        .bind(membership.user_id().as_uuid())
        .bind(membership.role().as_str())
        .bind(membership.joined_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create membership: {}", e)))?;

        Ok(membership)
    }

    async fn delete(&self, team: TeamId, user: ProfileId) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM team_memberships
            WHERE team_id = $1 AND user_id = $2
            "#,
        )
        .bind(team.as_uuid())
        .bind(user.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to delete membership: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_user(&self, user: ProfileId) -> Result<Vec<TeamMembership>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, team_id, user_id, role, joined_at
            FROM team_memberships
            WHERE user_id = $1
            ORDER BY joined_at ASC
            "#,
        )
        .bind(user.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list memberships: {}", e)))?;

        rows.iter().map(row_to_membership).collect()
    }
}

fn row_to_team(row: &sqlx::postgres::PgRow) -> Team {
    let id: Uuid = row.get("id");
    let owner_id: Uuid = row.get("owner_id");

    Team::from_parts(
        TeamId::new(id),
        row.get("name"),
        ProfileId::new(owner_id),
        row.get("avatar_url"),
        row.get("is_personal"),
        row.get("created_at"),
        row.get("updated_at"),
    )
}

fn row_to_membership(row: &sqlx::postgres::PgRow) -> Result<TeamMembership, DomainError> {
    let id: Uuid = row.get("id");
    let team_id: Uuid = row.get("team_id");
    let user_id: Uuid = row.get("user_id");
    let role: String = row.get("role");

    let role = TeamRole::parse(&role)
        .ok_or_else(|| DomainError::storage(format!("Unknown membership role '{}'", role)))?;

    Ok(TeamMembership::from_parts(
        MembershipId::new(id),
        TeamId::new(team_id),
        ProfileId::new(user_id),
        role,
        row.get("joined_at"),
    ))
}
