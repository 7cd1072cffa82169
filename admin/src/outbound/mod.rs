//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **http**: reqwest-backed services for the admin REST API, sharing one
//!   client that attaches the bearer token and broadcasts failures
//! - **token_store**: cap-std file storage for the bearer token
//!
//! Adapters are thin translators between domain types and wire formats.
//! They contain no business logic.

pub mod http;
pub mod token_store;
