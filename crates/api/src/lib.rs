//! Boat entry server library.
//!
//! Exposes the building blocks (config, state, controller, error handling,
//! routes) so integration tests and the binary entrypoint can both use them.

pub mod config;
pub mod controller;
pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod routes;
pub mod state;
