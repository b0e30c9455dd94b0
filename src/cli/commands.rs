//! Command execution for the CLI

use crate::{
    cli::router,
    config::Config,
    core::commander::{Commander, DryRunCommander, ProcessCommander},
};
use std::io::{self, Write};
use tracing::{debug, instrument};

/// Build the configured executor and route `argv` through it
#[instrument(skip(config, out))]
pub fn execute_command<W: Write>(
    config: &Config,
    argv: &[String],
    out: &mut W,
) -> anyhow::Result<()> {
    let mut commander = build_commander(config);
    router::limits(argv, commander.as_mut(), out)?;
    out.flush()?;
    Ok(())
}

fn build_commander(config: &Config) -> Box<dyn Commander> {
    if config.dry_run {
        debug!("Using dry-run executor (json: {})", config.json);
        Box::new(DryRunCommander::new(io::stdout(), config.json))
    } else {
        debug!("Using process executor: {:?}", config.executor.program);
        Box::new(ProcessCommander::new(config))
    }
}
