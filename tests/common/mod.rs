#![allow(dead_code)]

//! Shared test utilities for waitfor-postgres integration tests

use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Deadline used by probes that are expected to fail
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Slack allowed on top of a deadline before a probe counts as hung
pub const DEADLINE_SLACK: Duration = Duration::from_millis(750);

/// Install a log subscriber once per test binary
///
/// Defaults to debug output for this crate; override with `RUST_LOG`.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("waitfor_postgres=debug,warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_test_writer()
        .try_init();
}

/// Parse a URL that is known to be valid
pub fn url(s: &str) -> Url {
    Url::parse(s).expect("test URL should parse")
}
