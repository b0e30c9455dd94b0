//! # Limits Router
//!
//! Command surface for managing per-process CPU and memory limits of an
//! application on a remote platform.
//!
//! The router takes a raw `limits` argument vector, picks the list, set or
//! unset handler, validates the arguments against that handler's grammar and
//! hands a normalized `(app, specs, kind)` request to an injected
//! [`Commander`](core::commander::Commander).
//!
//! ## Example
//!
//! ```no_run
//! use limits_router::{cli::limits, core::commander::DryRunCommander};
//!
//! let argv: Vec<String> = ["limits:set", "--cpu", "cmd=500m"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let mut cmdr = DryRunCommander::new(std::io::stdout(), false);
//! limits(&argv, &mut cmdr, &mut std::io::stdout())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
