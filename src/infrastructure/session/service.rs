//! Identity session service
//!
//! Orchestrates login against the external identity provider, token refresh
//! and team switching. Token verification itself lives in
//! [`TokenCodec`](crate::infrastructure::auth::TokenCodec); this service owns
//! everything that needs a store.

use std::sync::Arc;
use tracing::info;

use crate::domain::profile::{Profile, ProfileId, ProfileRepository};
use crate::domain::team::TeamId;
use crate::domain::{DomainError, IdentityProvider, Principal};
use crate::infrastructure::auth::{TeamContextResolver, TokenCodec, TokenPair};

/// Established session: fresh tokens plus the profile and team they bind
#[derive(Debug, Clone)]
pub struct Session {
    pub tokens: TokenPair,
    pub profile: Profile,
    pub team_id: Option<TeamId>,
}

/// Service for login, refresh and team switching
#[derive(Debug, Clone)]
pub struct SessionService {
    identity: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfileRepository>,
    resolver: TeamContextResolver,
    codec: Arc<TokenCodec>,
}

impl SessionService {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        profiles: Arc<dyn ProfileRepository>,
        resolver: TeamContextResolver,
        codec: Arc<TokenCodec>,
    ) -> Self {
        Self {
            identity,
            profiles,
            resolver,
            codec,
        }
    }

    /// Exchange a provider credential for a local session.
    ///
    /// A first login creates the profile on the fly from provider data; the
    /// personal team only appears once registration completes, so until then
    /// a login without an explicit team binds no team at all.
    pub async fn login(
        &self,
        credential: &str,
        requested_team: Option<&str>,
    ) -> Result<Session, DomainError> {
        let provider_user = self.identity.get_user(credential).await?;

        let subject = ProfileId::parse(&provider_user.id).map_err(|_| {
            DomainError::provider_auth("Identity provider returned a non-UUID user id")
        })?;

        let profile = match self.profiles.get(subject).await? {
            Some(profile) => profile,
            None => {
                let profile = Profile::new(
                    subject,
                    provider_user.email.clone(),
                    provider_user.metadata_str(&["full_name", "name"]),
                    provider_user.metadata_str(&["avatar_url", "picture"]),
                    Some("free".to_string()),
                );
                info!(user_id = %subject, "Creating profile on first login");
                self.profiles.create(profile).await?
            }
        };

        let requested = requested_team
            .map(|t| {
                TeamId::parse(t).map_err(|_| DomainError::invalid_team(t.to_string()))
            })
            .transpose()?;

        let team_id = self.resolver.resolve(subject, requested).await?;
        let tokens = self.codec.issue(&profile, team_id)?;

        Ok(Session {
            tokens,
            profile,
            team_id,
        })
    }

    /// Mint a new token pair from a refresh token.
    ///
    /// The team binding carries over from the refresh token as-is; membership
    /// was verified when the binding was first established.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Session, DomainError> {
        let principal = self.codec.verify(refresh_token)?;

        let profile = self
            .profiles
            .get(principal.subject_id())
            .await?
            .ok_or_else(|| DomainError::invalid_token("user not found"))?;

        let team_id = principal.team_id();
        let tokens = self.codec.issue(&profile, team_id)?;

        Ok(Session {
            tokens,
            profile,
            team_id,
        })
    }

    /// Rebind an authenticated caller's session to another team.
    pub async fn switch_team(
        &self,
        principal: &Principal,
        team_id: &str,
    ) -> Result<Session, DomainError> {
        let team = TeamId::parse(team_id)
            .map_err(|_| DomainError::invalid_team(team_id.to_string()))?;

        self.resolver
            .verify_membership(principal.subject_id(), team)
            .await?;

        let profile = self
            .profiles
            .get(principal.subject_id())
            .await?
            .ok_or_else(|| DomainError::unauthorized("user not found"))?;

        info!(user_id = %principal.subject_id(), team_id = %team, "Switching team context");
        let tokens = self.codec.issue(&profile, Some(team))?;

        Ok(Session {
            tokens,
            profile,
            team_id: Some(team),
        })
    }
}
