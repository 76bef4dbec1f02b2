//! Profile domain
//!
//! Profile entity, partial updates and the profile store trait.

mod entity;
mod repository;

pub use entity::{Profile, ProfileId, ProfileUpdate};
pub use repository::ProfileRepository;
