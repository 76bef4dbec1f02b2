//! Domain layer - Core business logic and entities

pub mod error;
pub mod identity;
pub mod plan;
pub mod principal;
pub mod profile;
pub mod project;
pub mod team;

pub use error::DomainError;
pub use identity::{IdentityProvider, ProviderUser};
pub use plan::{can_create_project, project_limit, Plan};
pub use principal::Principal;
pub use profile::{Profile, ProfileId, ProfileRepository, ProfileUpdate};
pub use project::{
    normalize_slug, validate_slug, Project, ProjectId, ProjectRepository, ProjectUpdate,
};
pub use team::{
    MembershipId, MembershipRepository, Team, TeamId, TeamMembership, TeamRepository, TeamRole,
};
