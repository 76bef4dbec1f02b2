//! Profile repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Profile, ProfileId, ProfileUpdate};
use crate::domain::DomainError;

/// Repository trait for profile storage
#[async_trait]
pub trait ProfileRepository: Send + Sync + Debug {
    /// Get a profile by id
    async fn get(&self, id: ProfileId) -> Result<Option<Profile>, DomainError>;

    /// Create a new profile; duplicate ids are a `UserConflict`
    async fn create(&self, profile: Profile) -> Result<Profile, DomainError>;

    /// Apply a partial update; absent profiles are a `UserNotFound`
    async fn update(&self, id: ProfileId, update: ProfileUpdate) -> Result<Profile, DomainError>;
}
