//! Team domain
//!
//! Teams, membership rows and their store traits. Membership is the
//! authorization relation the team context resolver checks; it is never
//! mutated by authorization logic.

mod entity;
mod repository;

pub use entity::{MembershipId, Team, TeamId, TeamMembership, TeamRole};
pub use repository::{MembershipRepository, TeamRepository};
