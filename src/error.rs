//! Error types for the limits router
//!
//! Grammar failures, executor failures and output failures are kept apart so
//! callers can tell a malformed invocation from a failed remote operation.

use thiserror::Error;

/// Main error type for the limits router
#[derive(Error, Debug)]
pub enum LimitsError {
    /// The argument vector did not match the sub-command's grammar
    #[error(transparent)]
    Grammar(#[from] clap::Error),

    /// Errors reported by an executor while performing the operation
    #[error("Executor error: {message}")]
    Executor {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// External executor process failures
    #[error("Process error: {command} failed")]
    Process {
        command: String,
        exit_code: Option<i32>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Writing usage text or dry-run output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl LimitsError {
    /// Create a new executor error
    pub fn executor(message: impl Into<String>) -> Self {
        Self::Executor {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new process error
    pub fn process(command: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            source: None,
        }
    }

    /// Create a new process error for a command that could not be spawned
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Process {
            command: command.into(),
            exit_code: None,
            source: Some(source),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether this error came from argument parsing rather than execution
    pub fn is_grammar(&self) -> bool {
        matches!(self, Self::Grammar(_))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, LimitsError>;
