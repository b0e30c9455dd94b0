//! Configuration management for the limits router
//!
//! Centralizes the binary's options and provides validation.

use crate::{cli::Args, error::LimitsError};
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

/// Environment variable naming the executor program
pub const EXECUTOR_ENV: &str = "DEIS_LIMITS_EXECUTOR";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Print requests instead of executing them
    pub dry_run: bool,
    /// Print dry-run requests as JSON
    pub json: bool,
    /// External executor configuration
    pub executor: ExecutorConfig,
}

/// External executor configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Program invoked for every request
    pub program: Option<PathBuf>,
    /// Arguments placed before the request arguments
    pub args: Vec<String>,
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, LimitsError> {
        let program = args
            .executor
            .clone()
            .or_else(|| env::var_os(EXECUTOR_ENV).map(PathBuf::from));

        let config = Self {
            debug: args.debug,
            dry_run: args.dry_run,
            json: args.json,
            executor: ExecutorConfig {
                program,
                args: args.executor_args.clone(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), LimitsError> {
        if self.json && !self.dry_run {
            return Err(LimitsError::validation("--json only applies to --dry-run"));
        }

        if let Some(program) = &self.executor.program {
            if program.as_os_str().is_empty() {
                return Err(LimitsError::validation("executor program must not be empty"));
            }
        }

        Ok(())
    }
}
