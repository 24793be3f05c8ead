//! `waitfor-postgres` - PostgreSQL readiness probe
//!
//! Exposes a single [`Resource`] that opens a connection to a PostgreSQL
//! server and pings it, bounded by a cancellable [`Context`]. Retry and
//! backoff are left to the caller.

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

/// Probe configuration loading
pub mod config;
pub mod context;
pub mod driver;
/// Error types
pub mod error;
pub mod postgres;
pub mod resource;

pub use config::ProbeConfig;
pub use context::Context;
pub use error::{ProbeError, Result};
pub use postgres::{new_resource, use_resource, Postgres, SCHEME};
pub use resource::{Resource, ResourceConfig, ResourceFactory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
