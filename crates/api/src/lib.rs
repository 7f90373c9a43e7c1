//! axum integration for `httpreply-core`.
//!
//! Exposes the destination handles, error mapping, configuration, and demo
//! routes so integration tests and the binary entrypoint can both use them.

pub mod config;
pub mod error;
pub mod handle;
pub mod routes;
pub mod state;
pub mod store;
