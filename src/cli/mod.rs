//! Command-line interface module
//!
//! Provides argument parsing, the `limits` router and command execution.

pub mod args;
pub mod commands;
pub mod grammar;
pub mod router;

pub use args::{Args, parse_args};
pub use commands::execute_command;
pub use router::{LimitsCommand, limits};
