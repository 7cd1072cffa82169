//! Admin client for the saree storefront back office.
//!
//! The crate follows a hexagonal layout. [`domain`] holds the records,
//! session, view state and the ports they drive. [`outbound`] implements
//! those ports over the admin REST API and the local filesystem, and
//! [`inbound`] exposes them as the `saree-admin` command line. [`app`] wires
//! the pieces together from [`config`].
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

pub mod app;
pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
