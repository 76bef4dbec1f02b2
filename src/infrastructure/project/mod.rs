//! Project infrastructure module
//!
//! Project store implementations and the quota-enforcing project service.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::{PostgresProjectMemberRepository, PostgresProjectRepository};
pub use repository::{InMemoryProjectMemberRepository, InMemoryProjectRepository};
pub use service::{
    AddMemberRequest, CreateProjectRequest, ProjectFilter, ProjectPage, ProjectPageRequest,
    ProjectService,
};
