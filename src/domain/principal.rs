//! The verified caller of one request

use chrono::{DateTime, Utc};

use crate::domain::profile::ProfileId;
use crate::domain::team::TeamId;

/// Identity and claims recovered from a verified access token.
///
/// Created per request at token-verification time and passed explicitly to
/// every operation that needs the caller's identity; there is no ambient
/// request-scoped storage. A carried `team_id` was membership-verified at
/// issuance, not on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    subject_id: ProfileId,
    email: Option<String>,
    plan: Option<String>,
    team_id: Option<TeamId>,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Principal {
    pub fn new(
        subject_id: ProfileId,
        email: Option<String>,
        plan: Option<String>,
        team_id: Option<TeamId>,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            subject_id,
            email,
            plan,
            team_id,
            issued_at,
            expires_at,
        }
    }

    pub fn subject_id(&self) -> ProfileId {
        self.subject_id
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn plan(&self) -> Option<&str> {
        self.plan.as_deref()
    }

    /// Plan claim, defaulting to `free` for quota decisions
    pub fn plan_or_default(&self) -> &str {
        self.plan.as_deref().unwrap_or("free")
    }

    pub fn team_id(&self) -> Option<TeamId> {
        self.team_id
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_plan_default() {
        let now = Utc::now();
        let principal = Principal::new(
            ProfileId::new(Uuid::new_v4()),
            None,
            None,
            None,
            now,
            now + chrono::Duration::minutes(15),
        );

        assert_eq!(principal.plan(), None);
        assert_eq!(principal.plan_or_default(), "free");
    }
}
