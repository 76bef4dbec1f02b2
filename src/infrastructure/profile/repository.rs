//! In-memory profile repository

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::profile::{Profile, ProfileId, ProfileRepository, ProfileUpdate};
use crate::domain::DomainError;

/// In-memory implementation of ProfileRepository
#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<HashMap<ProfileId, Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get(&self, id: ProfileId) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(&id).cloned())
    }

    async fn create(&self, profile: Profile) -> Result<Profile, DomainError> {
        let mut profiles = self.profiles.write().await;

        if profiles.contains_key(&profile.id()) {
            return Err(DomainError::user_conflict(
                "duplicate key value violates unique constraint",
            ));
        }

        profiles.insert(profile.id(), profile.clone());
        Ok(profile)
    }

    async fn update(&self, id: ProfileId, update: ProfileUpdate) -> Result<Profile, DomainError> {
        let mut profiles = self.profiles.write().await;

        let profile = profiles.get_mut(&id).ok_or(DomainError::UserNotFound)?;
        profile.apply_update(update);
        Ok(profile.clone())
    }
}
