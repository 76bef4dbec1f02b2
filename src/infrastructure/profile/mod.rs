//! Profile infrastructure module
//!
//! In-memory and PostgreSQL implementations of the profile store.

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresProfileRepository;
pub use repository::InMemoryProfileRepository;
