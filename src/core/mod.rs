//! Core functionality for limits requests
//!
//! Contains the limit kind and limit token grammar, the normalized request
//! and the executor capability.

pub mod commander;
pub mod kind;
pub mod request;
pub mod spec;

pub use commander::{Commander, DryRunCommander, ProcessCommander};
pub use kind::LimitKind;
pub use request::{LimitsRequest, Operation};
