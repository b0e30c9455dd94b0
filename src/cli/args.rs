//! Command-line argument parsing for the `deis-limits` binary

use clap::Parser;
use std::path::PathBuf;

/// Manage per-process CPU and memory limits for an application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "deis-limits")]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Print the normalized request instead of executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print dry-run requests as JSON lines
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Program that performs list/set/unset against the platform
    #[arg(long, value_name = "PROGRAM")]
    pub executor: Option<PathBuf>,

    /// Extra argument passed to the executor before the request
    #[arg(long = "executor-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub executor_args: Vec<String>,

    /// The limits command and its arguments, e.g. `limits:set web=2G`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub argv: Vec<String>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_args() {
        let args = Args::try_parse_from(["deis-limits", "limits:list"]).unwrap();
        assert!(!args.debug);
        assert!(!args.dry_run);
        assert_eq!(args.argv, vec!["limits:list"]);
    }

    #[test]
    fn test_limits_flags_are_passed_through() {
        let args = Args::try_parse_from([
            "deis-limits",
            "--debug",
            "--dry-run",
            "limits:set",
            "--cpu",
            "-a",
            "myapp",
            "cmd=500m",
        ])
        .unwrap();
        assert!(args.debug);
        assert!(args.dry_run);
        assert_eq!(args.argv, vec!["limits:set", "--cpu", "-a", "myapp", "cmd=500m"]);
    }

    #[test]
    fn test_json_requires_dry_run() {
        assert!(Args::try_parse_from(["deis-limits", "--json", "limits"]).is_err());
    }

    #[test]
    fn test_executor_options() {
        let args = Args::try_parse_from([
            "deis-limits",
            "--executor",
            "/usr/local/bin/deis",
            "--executor-arg",
            "--verbose",
            "limits",
        ])
        .unwrap();
        assert_eq!(args.executor, Some(PathBuf::from("/usr/local/bin/deis")));
        assert_eq!(args.executor_args, vec!["--verbose"]);
    }
}
