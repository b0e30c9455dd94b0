//! Per-sub-command argument grammars
//!
//! Each grammar parses the argument vector with the sub-command name in the
//! binary-name position, so `["limits:set", "web=2G"]` parses as-is.

use crate::core::{
    kind::LimitKind,
    spec::{parse_limit_token, parse_process_type},
};
use clap::Parser;

const SET_LONG_ABOUT: &str = "\
Sets resource requests and limits for an application.

A resource limit is a finite resource within a pod that the platform can
restrict. A resource request is used by the scheduler to pick a node that can
guarantee the requested resource. A single value is used as both request and
limit. Requests and limits apply to each individual pod, so a memory limit of
1G means each pod gets 1G of memory. Values must satisfy
0 <= request <= limit.

With --memory (the default), units are Bytes (B), Kilobytes (K), Megabytes (M)
or Gigabytes (G): 'limits:set cmd=1G' caps every cmd process at 1 Gigabyte.

With --cpu, units are a number of CPUs or milli units: 'limits:set --cpu
cmd=500m' caps every cmd process at half a CPU.

Only one kind of limit can be set per call.";

const UNSET_LONG_ABOUT: &str = "\
Unsets resource limits for an application.

Removes the memory limit (the default) or, with --cpu, the CPU limit from each
listed process type.";

/// `limits:list`
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "limits:list",
    bin_name = "deis limits:list",
    about = "Lists resource limits for an application."
)]
pub struct ListArgs {
    /// The uniquely identifiable name of the application
    #[arg(short = 'a', long)]
    pub app: Option<String>,
}

/// `limits:set`
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "limits:set",
    bin_name = "deis limits:set",
    about = "Sets resource requests and limits for an application.",
    long_about = SET_LONG_ABOUT
)]
pub struct SetArgs {
    /// The uniquely identifiable name of the application
    #[arg(short = 'a', long)]
    pub app: Option<String>,

    /// Values apply to CPU
    #[arg(long)]
    pub cpu: bool,

    /// Values apply to memory [default]
    #[arg(short = 'm', long)]
    pub memory: bool,

    /// Process type and value, as <limit> or <request>/<limit>, e.g. web=2G db=1G/2G
    #[arg(
        value_name = "TYPE=VALUE",
        required = true,
        num_args = 1..,
        value_parser = parse_limit_token
    )]
    pub limits: Vec<String>,
}

impl SetArgs {
    /// `--cpu` wins; `--memory` is not checked against it here
    #[must_use]
    pub const fn kind(&self) -> LimitKind {
        LimitKind::from_cpu_flag(self.cpu)
    }
}

/// `limits:unset`
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "limits:unset",
    bin_name = "deis limits:unset",
    about = "Unsets resource limits for an application.",
    long_about = UNSET_LONG_ABOUT
)]
pub struct UnsetArgs {
    /// The uniquely identifiable name of the application
    #[arg(short = 'a', long)]
    pub app: Option<String>,

    /// Unset the CPU limit
    #[arg(long, conflicts_with = "memory")]
    pub cpu: bool,

    /// Unset the memory limit [default]
    #[arg(short = 'm', long)]
    pub memory: bool,

    /// Process type as defined in the Procfile, such as 'web' or 'worker'
    #[arg(
        value_name = "TYPE",
        required = true,
        num_args = 1..,
        value_parser = parse_process_type
    )]
    pub types: Vec<String>,
}

impl UnsetArgs {
    #[must_use]
    pub const fn kind(&self) -> LimitKind {
        LimitKind::from_cpu_flag(self.cpu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_list() {
        let args = ListArgs::try_parse_from(["limits:list", "--app=myapp"]).unwrap();
        assert_eq!(args.app.as_deref(), Some("myapp"));

        let args = ListArgs::try_parse_from(["limits:list", "-a", "other"]).unwrap();
        assert_eq!(args.app.as_deref(), Some("other"));
    }

    #[test]
    fn test_list_rejects_positionals() {
        assert!(ListArgs::try_parse_from(["limits:list", "web"]).is_err());
    }

    #[test]
    fn test_set_accepts_both_kind_flags() {
        let args =
            SetArgs::try_parse_from(["limits:set", "--memory", "--cpu", "cmd=1"]).unwrap();
        assert!(args.memory);
        assert_eq!(args.kind(), LimitKind::Cpu);
    }

    #[test]
    fn test_set_requires_a_limit() {
        let err = SetArgs::try_parse_from(["limits:set", "--cpu"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_set_rejects_bare_type() {
        let err = SetArgs::try_parse_from(["limits:set", "web"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_unset_kind_flags_are_exclusive() {
        let err = UnsetArgs::try_parse_from(["limits:unset", "--memory", "--cpu", "web"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_unset_defaults_to_memory() {
        let args = UnsetArgs::try_parse_from(["limits:unset", "-m", "web"]).unwrap();
        assert_eq!(args.kind(), LimitKind::Memory);
        assert_eq!(args.types, vec!["web"]);
    }

    #[test]
    fn test_help_is_reported_as_display_help() {
        let err = SetArgs::try_parse_from(["limits:set", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
