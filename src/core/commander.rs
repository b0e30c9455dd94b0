//! Executor capability and the executors shipped with the binary
//!
//! The router only ever talks to [`Commander`]; what happens behind it
//! (a remote call, a forwarded process, a printout) is up to the implementor.

use crate::{
    config::Config,
    core::{kind::LimitKind, request::LimitsRequest},
    error::{LimitsError, Result},
    utils::process::ProcessRunner,
};
use std::{io::Write, path::PathBuf};
use tracing::{debug, info, instrument};

const MISSING_EXECUTOR: &str =
    "no executor program configured; pass --executor, set DEIS_LIMITS_EXECUTOR or use --dry-run";

/// Performs the remote operation behind each `limits` sub-command
pub trait Commander {
    /// List limits for `app`, or for the default app when `None`
    fn limits_list(&mut self, app: Option<&str>) -> Result<()>;

    /// Apply `<type>=<value>` limits of the given kind
    fn limits_set(&mut self, app: Option<&str>, limits: &[String], kind: LimitKind) -> Result<()>;

    /// Remove limits of the given kind from the listed process types
    fn limits_unset(
        &mut self,
        app: Option<&str>,
        types: &[String],
        kind: LimitKind,
    ) -> Result<()>;
}

/// Prints each request instead of executing it
#[derive(Debug)]
pub struct DryRunCommander<W: Write> {
    out: W,
    json: bool,
}

impl<W: Write> DryRunCommander<W> {
    /// Create a dry-run executor writing to `out`, one line per request
    pub const fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    /// Consume the executor and return its writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, request: &LimitsRequest) -> Result<()> {
        debug!("Dry run: {}", request);
        if self.json {
            let line = serde_json::to_string(request)
                .map_err(|e| LimitsError::executor(format!("Failed to encode request: {e}")))?;
            writeln!(self.out, "{line}")?;
        } else {
            writeln!(self.out, "{request}")?;
        }
        Ok(())
    }
}

impl<W: Write> Commander for DryRunCommander<W> {
    fn limits_list(&mut self, app: Option<&str>) -> Result<()> {
        self.emit(&LimitsRequest::list(app))
    }

    fn limits_set(&mut self, app: Option<&str>, limits: &[String], kind: LimitKind) -> Result<()> {
        self.emit(&LimitsRequest::set(app, limits, kind))
    }

    fn limits_unset(
        &mut self,
        app: Option<&str>,
        types: &[String],
        kind: LimitKind,
    ) -> Result<()> {
        self.emit(&LimitsRequest::unset(app, types, kind))
    }
}

/// Forwards each request to an external executor program
#[derive(Debug)]
pub struct ProcessCommander {
    program: Option<PathBuf>,
    base_args: Vec<String>,
    runner: ProcessRunner,
}

impl ProcessCommander {
    /// Create an executor from configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            program: config.executor.program.clone(),
            base_args: config.executor.args.clone(),
            runner: ProcessRunner::new(config.debug),
        }
    }

    #[instrument(skip(self), fields(operation = ?request.operation))]
    fn forward(&self, request: &LimitsRequest) -> Result<()> {
        let program = self
            .program
            .as_ref()
            .ok_or_else(|| LimitsError::config(MISSING_EXECUTOR))?;

        let mut args: Vec<String> = self.base_args.clone();
        args.extend(request.to_args());
        let args_str: Vec<&str> = args.iter().map(String::as_str).collect();

        info!("Forwarding {} to {}", request.operation.command_name(), program.display());
        self.runner.run_command(&program.to_string_lossy(), &args_str)
    }
}

impl Commander for ProcessCommander {
    fn limits_list(&mut self, app: Option<&str>) -> Result<()> {
        self.forward(&LimitsRequest::list(app))
    }

    fn limits_set(&mut self, app: Option<&str>, limits: &[String], kind: LimitKind) -> Result<()> {
        self.forward(&LimitsRequest::set(app, limits, kind))
    }

    fn limits_unset(
        &mut self,
        app: Option<&str>,
        types: &[String],
        kind: LimitKind,
    ) -> Result<()> {
        self.forward(&LimitsRequest::unset(app, types, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExecutorConfig;

    fn process_config(program: Option<&str>) -> Config {
        Config {
            executor: ExecutorConfig {
                program: program.map(PathBuf::from),
                args: Vec::new(),
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_dry_run_plain() {
        let mut cmdr = DryRunCommander::new(Vec::new(), false);
        cmdr.limits_set(Some("myapp"), &["web=2G".to_string()], LimitKind::Memory).unwrap();
        let out = String::from_utf8(cmdr.into_inner()).unwrap();
        assert_eq!(out, "limits:set app=myapp kind=memory web=2G\n");
    }

    #[test]
    fn test_dry_run_json() {
        let mut cmdr = DryRunCommander::new(Vec::new(), true);
        cmdr.limits_unset(None, &["web".to_string()], LimitKind::Cpu).unwrap();
        let out = String::from_utf8(cmdr.into_inner()).unwrap();
        let request: LimitsRequest = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(request, LimitsRequest::unset(None, &["web".to_string()], LimitKind::Cpu));
    }

    #[test]
    fn test_process_without_program() {
        let mut cmdr = ProcessCommander::new(&process_config(None));
        let err = cmdr.limits_list(None).unwrap_err();
        assert!(matches!(err, LimitsError::Config { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_process_forwards_exit_status() {
        let ok = process_config(Some("true"));
        assert!(ProcessCommander::new(&ok).limits_list(None).is_ok());

        let failing = process_config(Some("false"));
        let err = ProcessCommander::new(&failing).limits_list(Some("myapp")).unwrap_err();
        match err {
            LimitsError::Process { exit_code, .. } => assert_eq!(exit_code, Some(1)),
            other => panic!("Expected Process error, got {other:?}"),
        }
    }
}
