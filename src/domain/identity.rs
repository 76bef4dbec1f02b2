//! External identity provider seam

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::domain::DomainError;

/// User record returned by the external identity provider
#[derive(Debug, Clone)]
pub struct ProviderUser {
    pub id: String,
    pub email: Option<String>,
    /// Arbitrary provider metadata (display name, avatar, ...)
    pub metadata: HashMap<String, Value>,
}

impl ProviderUser {
    /// First non-empty string value among the given metadata keys
    pub fn metadata_str(&self, keys: &[&str]) -> Option<String> {
        for key in keys {
            if let Some(Value::String(s)) = self.metadata.get(*key) {
                if !s.is_empty() {
                    return Some(s.clone());
                }
            }
        }
        None
    }
}

/// Client for the external identity provider
#[async_trait]
pub trait IdentityProvider: Send + Sync + Debug {
    /// Verify a caller-supplied credential and return the provider's user
    /// record. Any non-success provider response is an error.
    async fn get_user(&self, credential: &str) -> Result<ProviderUser, DomainError>;
}
