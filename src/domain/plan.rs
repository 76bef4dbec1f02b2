//! Per-plan project quotas
//!
//! Pure decision logic: no store access, deterministic in
//! `(plan, current_count)`.

use serde::{Deserialize, Serialize};

/// Limits at or above this value are treated as unbounded
pub const UNLIMITED_PROJECTS: u32 = 999_999;

/// Subscription plan tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Pro,
    Enterprise,
}

impl Plan {
    /// Parse a plan name. Unknown values return `None`; quota callers fall
    /// back to the free limit (fail-safe, never fail-open).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "free" => Some(Self::Free),
            "pro" => Some(Self::Pro),
            "enterprise" => Some(Self::Enterprise),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }

    /// Maximum number of projects this plan permits
    pub fn project_limit(&self) -> u32 {
        match self {
            Self::Free => 1,
            Self::Pro => 10,
            Self::Enterprise => UNLIMITED_PROJECTS,
        }
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Project limit for a plan name, falling back to the free limit for
/// unrecognized plans
pub fn project_limit(plan: &str) -> u32 {
    Plan::parse(plan).unwrap_or(Plan::Free).project_limit()
}

/// Whether a user on `plan` with `current_count` projects may create one more
pub fn can_create_project(plan: &str, current_count: u32) -> bool {
    let limit = project_limit(plan);
    if limit >= UNLIMITED_PROJECTS {
        return true;
    }
    current_count < limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits() {
        assert_eq!(project_limit("free"), 1);
        assert_eq!(project_limit("pro"), 10);
        assert_eq!(project_limit("enterprise"), UNLIMITED_PROJECTS);
    }

    #[test]
    fn test_unknown_plan_falls_back_to_free() {
        assert_eq!(project_limit("platinum"), 1);
        assert_eq!(project_limit(""), 1);
        assert!(!can_create_project("platinum", 1));
    }

    #[test]
    fn test_can_create_free() {
        assert!(can_create_project("free", 0));
        assert!(!can_create_project("free", 1));
    }

    #[test]
    fn test_can_create_pro() {
        assert!(can_create_project("pro", 9));
        assert!(!can_create_project("pro", 10));
    }

    #[test]
    fn test_can_create_enterprise() {
        assert!(can_create_project("enterprise", 1_000_000));
    }

    #[test]
    fn test_plan_parse_round_trip() {
        for plan in [Plan::Free, Plan::Pro, Plan::Enterprise] {
            assert_eq!(Plan::parse(plan.as_str()), Some(plan));
        }
        assert_eq!(Plan::parse("Enterprise"), None);
    }
}
