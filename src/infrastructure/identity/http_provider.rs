//! HTTP client for the external identity provider

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::domain::{DomainError, IdentityProvider, ProviderUser};

/// Wire shape of the provider's user endpoint
#[derive(Debug, Deserialize)]
struct ProviderUserResponse {
    #[serde(default)]
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: HashMap<String, Value>,
}

/// Identity provider backed by an HTTP auth service
///
/// Credentials are verified by calling `GET {base_url}/auth/v1/user` with the
/// caller's token; the provider decides validity.
#[derive(Clone)]
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for HttpIdentityProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpIdentityProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &"[hidden]")
            .finish()
    }
}

impl HttpIdentityProvider {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();

        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn get_user(&self, credential: &str) -> Result<ProviderUser, DomainError> {
        let url = format!("{}/auth/v1/user", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", credential))
            .header("apikey", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                DomainError::provider_auth(format!("Identity provider unreachable: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(DomainError::provider_auth(format!(
                "Identity provider rejected credential: HTTP {}",
                status
            )));
        }

        let user: ProviderUserResponse = response.json().await.map_err(|e| {
            DomainError::provider_auth(format!("Malformed identity provider response: {}", e))
        })?;

        if user.id.is_empty() {
            return Err(DomainError::provider_auth(
                "Identity provider returned a user without an id",
            ));
        }

        Ok(ProviderUser {
            id: user.id,
            email: user.email,
            metadata: user.user_metadata,
        })
    }
}
