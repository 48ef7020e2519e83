//! Tracing setup
//!
//! Logs go to stderr so they never interleave with prompt rendering on stdout.
//!
//! Usage:
//!   employee-tracker --debug                       # debug logging
//!   RUST_LOG=employee_tracker=info employee-tracker  # fine-grained control

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Initialize console tracing. `RUST_LOG` wins over `debug` when set.
pub fn init(debug: bool) -> Result<()> {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
