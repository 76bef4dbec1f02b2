//! User infrastructure module
//!
//! Registration, the current-user view and profile updates.

mod service;

pub use service::{Me, TeamInfo, UserService};
