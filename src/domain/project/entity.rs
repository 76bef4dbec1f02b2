//! Project entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::profile::ProfileId;

/// Project identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(value).map(Self)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Localization project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    languages: Vec<String>,
    default_language: String,
    owner_id: ProfileId,
    /// Archived projects are read-only
    archived: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Partial update for a project
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub languages: Option<Vec<String>>,
    pub default_language: Option<String>,
}

impl Project {
    /// Create a new project owned by `owner_id`; slug must already be
    /// normalized and validated.
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        description: Option<String>,
        languages: Vec<String>,
        default_language: impl Into<String>,
        owner_id: ProfileId,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: ProjectId::generate(),
            name: name.into(),
            slug: slug.into(),
            description,
            languages,
            default_language: default_language.into(),
            owner_id,
            archived: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restore a project from stored fields (repository use)
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: ProjectId,
        name: String,
        slug: String,
        description: Option<String>,
        languages: Vec<String>,
        default_language: String,
        owner_id: ProfileId,
        archived: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            slug,
            description,
            languages,
            default_language,
            owner_id,
            archived,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn owner_id(&self) -> ProfileId {
        self.owner_id
    }

    pub fn is_archived(&self) -> bool {
        self.archived
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Apply a partial update
    pub fn apply_update(&mut self, update: ProjectUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(languages) = update.languages {
            self.languages = languages;
        }
        if let Some(default_language) = update.default_language {
            self.default_language = default_language;
        }
        self.touch();
    }

    /// Mark the project archived
    pub fn archive(&mut self) {
        self.archived = true;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
