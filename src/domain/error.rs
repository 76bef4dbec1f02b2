use thiserror::Error;

/// Core domain errors
///
/// Variant messages are part of the external contract: clients match on the
/// rendered text, so changes here are breaking changes.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Provider authentication failed: {message}")]
    ProviderAuth { message: String },

    #[error("{}", token_text(.reason))]
    Unauthorized { reason: String },

    #[error("{}", token_text(.reason))]
    InvalidToken { reason: String },

    #[error("JWT token expired")]
    TokenExpired,

    #[error("Invalid team ID: {team_id}")]
    InvalidTeam { team_id: String },

    #[error("User is not a member of team {team_id}")]
    TeamAccessForbidden { user_id: String, team_id: String },

    #[error("{}", quota_text(.plan, *.current_count, *.limit))]
    ForbiddenProjectAccess {
        plan: String,
        current_count: u32,
        limit: u32,
    },

    #[error("Project is archived. Only read operations are allowed.")]
    ProjectArchived,

    #[error("{}", reason_text("Project conflict", .reason))]
    ProjectConflict { reason: String },

    #[error("{}", reason_text("Project validation failed", .reason))]
    ProjectValidation { reason: String },

    #[error("Project not found")]
    ProjectNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("{}", reason_text("User conflict", .reason))]
    UserConflict { reason: String },

    #[error("{}", personal_team_text(.user_id))]
    PersonalTeamNotFound { user_id: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

fn token_text(reason: &str) -> String {
    if reason.is_empty() {
        "Invalid token".to_string()
    } else {
        format!("Invalid token: {}", reason)
    }
}

fn reason_text(prefix: &str, reason: &str) -> String {
    if reason.is_empty() {
        prefix.to_string()
    } else {
        format!("{}: {}", prefix, reason)
    }
}

fn personal_team_text(user_id: &str) -> String {
    if user_id.is_empty() {
        "Personal team not found".to_string()
    } else {
        format!("Personal team not found for user: {}", user_id)
    }
}

fn quota_text(plan: &str, current_count: u32, limit: u32) -> String {
    if plan.is_empty() || limit == 0 {
        return "Forbidden: insufficient project access".to_string();
    }

    let noun = if limit == 1 { "project" } else { "projects" };
    format!(
        "Project limit exceeded. Your {} plan allows {} {}, and you currently have {}.",
        plan, limit, noun, current_count
    )
}

impl DomainError {
    pub fn provider_auth(message: impl Into<String>) -> Self {
        Self::ProviderAuth {
            message: message.into(),
        }
    }

    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized {
            reason: reason.into(),
        }
    }

    pub fn invalid_token(reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            reason: reason.into(),
        }
    }

    pub fn invalid_team(team_id: impl Into<String>) -> Self {
        Self::InvalidTeam {
            team_id: team_id.into(),
        }
    }

    pub fn team_access_forbidden(user_id: impl Into<String>, team_id: impl Into<String>) -> Self {
        Self::TeamAccessForbidden {
            user_id: user_id.into(),
            team_id: team_id.into(),
        }
    }

    /// Quota denial carrying the context needed to render the user-facing message
    pub fn project_quota(plan: impl Into<String>, current_count: u32, limit: u32) -> Self {
        Self::ForbiddenProjectAccess {
            plan: plan.into(),
            current_count,
            limit,
        }
    }

    /// Generic project-access denial without quota context (e.g. non-owner writes)
    pub fn forbidden_project_access() -> Self {
        Self::ForbiddenProjectAccess {
            plan: String::new(),
            current_count: 0,
            limit: 0,
        }
    }

    pub fn project_conflict(reason: impl Into<String>) -> Self {
        Self::ProjectConflict {
            reason: reason.into(),
        }
    }

    pub fn project_validation(reason: impl Into<String>) -> Self {
        Self::ProjectValidation {
            reason: reason.into(),
        }
    }

    pub fn user_conflict(reason: impl Into<String>) -> Self {
        Self::UserConflict {
            reason: reason.into(),
        }
    }

    pub fn personal_team_not_found(user_id: impl Into<String>) -> Self {
        Self::PersonalTeamNotFound {
            user_id: user_id.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_token_message() {
        let error = DomainError::invalid_token("missing sub");
        assert_eq!(error.to_string(), "Invalid token: missing sub");

        let error = DomainError::invalid_token("");
        assert_eq!(error.to_string(), "Invalid token");
    }

    #[test]
    fn test_token_expired_message() {
        assert_eq!(DomainError::TokenExpired.to_string(), "JWT token expired");
    }

    #[test]
    fn test_invalid_team_message() {
        let error = DomainError::invalid_team("not-a-uuid");
        assert_eq!(error.to_string(), "Invalid team ID: not-a-uuid");
    }

    #[test]
    fn test_team_access_forbidden_message() {
        let error = DomainError::team_access_forbidden("user-1", "team-1");
        assert_eq!(error.to_string(), "User is not a member of team team-1");
    }

    #[test]
    fn test_quota_message_singular() {
        let error = DomainError::project_quota("free", 2, 1);
        assert_eq!(
            error.to_string(),
            "Project limit exceeded. Your free plan allows 1 project, and you currently have 2."
        );
    }

    #[test]
    fn test_quota_message_plural() {
        let error = DomainError::project_quota("pro", 10, 10);
        assert_eq!(
            error.to_string(),
            "Project limit exceeded. Your pro plan allows 10 projects, and you currently have 10."
        );
    }

    #[test]
    fn test_quota_message_without_context() {
        let error = DomainError::forbidden_project_access();
        assert_eq!(error.to_string(), "Forbidden: insufficient project access");
    }

    #[test]
    fn test_archived_message() {
        assert_eq!(
            DomainError::ProjectArchived.to_string(),
            "Project is archived. Only read operations are allowed."
        );
    }

    #[test]
    fn test_personal_team_message() {
        let error = DomainError::personal_team_not_found("user-1");
        assert_eq!(
            error.to_string(),
            "Personal team not found for user: user-1"
        );
    }
}
