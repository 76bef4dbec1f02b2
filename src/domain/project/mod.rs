//! Project domain

mod entity;
mod member;
mod repository;
mod validation;

pub use entity::{Project, ProjectId, ProjectUpdate};
pub use member::{ProjectMember, ProjectMemberId};
pub use repository::{ProjectMemberRepository, ProjectRepository};
pub use validation::{normalize_slug, validate_slug};
