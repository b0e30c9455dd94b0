//! Utility modules for common functionality
//!
//! Provides process execution for the external executor.

pub mod process;

pub use process::ProcessRunner;
