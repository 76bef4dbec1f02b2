//! Session orchestration
//!
//! Login, refresh and team switching on top of the identity provider, the
//! stores and the token codec.

mod service;

pub use service::{Session, SessionService};
