//! Team infrastructure module
//!
//! In-memory and PostgreSQL implementations of the team and membership
//! stores, plus the shared-team service.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::{PostgresMembershipRepository, PostgresTeamRepository};
pub use repository::{InMemoryMembershipRepository, InMemoryTeamRepository};
pub use service::{CreateTeamRequest, TeamService};
