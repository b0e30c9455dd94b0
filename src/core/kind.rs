//! Resource axis a limit applies to

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which resource a request/limit pair constrains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitKind {
    /// Memory, in B/K/M/G units
    #[default]
    Memory,
    /// CPU, in whole CPUs or milli units
    Cpu,
}

impl LimitKind {
    /// Resolve the kind from the `--cpu` flag.
    ///
    /// `--memory` is on by default, so only the presence of `--cpu` matters.
    #[must_use]
    pub const fn from_cpu_flag(cpu: bool) -> Self {
        if cpu { Self::Cpu } else { Self::Memory }
    }

    /// Wire name passed to executors
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Cpu => "cpu",
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
