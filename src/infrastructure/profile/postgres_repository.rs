//! PostgreSQL profile repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::profile::{Profile, ProfileId, ProfileRepository, ProfileUpdate};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// PostgreSQL implementation of ProfileRepository
#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn get(&self, id: ProfileId) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, full_name, avatar_url, plan, team_id, created_at, updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get profile: {}", e)))?;

        Ok(row.map(|row| row_to_profile(&row)))
    }

    async fn create(&self, profile: Profile) -> Result<Profile, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (id, email, full_name, avatar_url, plan, team_id,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(profile.id().as_uuid())
        .bind(profile.email())
        .bind(profile.full_name())
        .bind(profile.avatar_url())
        .bind(profile.plan())
        .bind(profile.default_team_id().map(|t| t.as_uuid()))
        .bind(profile.created_at())
        .bind(profile.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::user_conflict(msg)
            } else {
                DomainError::storage(format!("Failed to create profile: {}", e))
            }
        })?;

        Ok(profile)
    }

    async fn update(&self, id: ProfileId, update: ProfileUpdate) -> Result<Profile, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE profiles
            SET full_name = COALESCE($2, full_name),
                avatar_url = COALESCE($3, avatar_url),
                plan = COALESCE($4, plan),
                team_id = COALESCE($5, team_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, full_name, avatar_url, plan, team_id, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(update.full_name)
        .bind(update.avatar_url)
        .bind(update.plan)
        .bind(update.default_team_id.map(|t| t.as_uuid()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update profile: {}", e)))?;

        match row {
            Some(row) => Ok(row_to_profile(&row)),
            None => Err(DomainError::UserNotFound),
        }
    }
}

fn row_to_profile(row: &sqlx::postgres::PgRow) -> Profile {
    let id: Uuid = row.get("id");
    let team_id: Option<Uuid> = row.get("team_id");

    Profile::from_parts(
        ProfileId::new(id),
        row.get("email"),
        row.get("full_name"),
        row.get("avatar_url"),
        row.get("plan"),
        team_id.map(TeamId::new),
        row.get("created_at"),
        row.get("updated_at"),
    )
}
