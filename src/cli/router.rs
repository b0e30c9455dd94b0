//! `limits` command group routing
//!
//! Dispatches an argument vector to the list, set or unset handler, parses
//! it against that handler's grammar and makes exactly one executor call.
//! Unknown sub-commands and help requests print usage and succeed.

use crate::{
    cli::grammar::{ListArgs, SetArgs, UnsetArgs},
    core::commander::Commander,
    error::{LimitsError, Result},
};
use clap::{Parser, error::ErrorKind};
use std::io::Write;
use tracing::{debug, instrument};

/// Usage block for the `limits` group
pub const GROUP_USAGE: &str = "
Valid commands for limits:

limits:list        list resource limits for an app
limits:set         set resource limits for an app
limits:unset       unset resource limits for an app

Use 'deis help [command]' to learn more.
";

/// Sub-commands of the `limits` group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitsCommand {
    List,
    Set,
    Unset,
    Unknown,
}

impl LimitsCommand {
    /// Resolve the discriminator; the bare group name lists
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "limits" | "limits:list" => Self::List,
            "limits:set" => Self::Set,
            "limits:unset" => Self::Unset,
            _ => Self::Unknown,
        }
    }
}

/// Route a `limits` argument vector to its handler
#[instrument(skip(cmdr, out))]
pub fn limits<C, W>(argv: &[String], cmdr: &mut C, out: &mut W) -> Result<()>
where
    C: Commander + ?Sized,
    W: Write + ?Sized,
{
    let Some(name) = argv.first() else {
        debug!("Empty argument vector, printing group usage");
        return print_group_usage(out);
    };

    // `limits --help` documents the group, not the list handler
    if name == "limits" && wants_help(argv) {
        return print_group_usage(out);
    }

    match LimitsCommand::from_name(name) {
        LimitsCommand::List => limits_list(argv, cmdr, out),
        LimitsCommand::Set => limits_set(argv, cmdr, out),
        LimitsCommand::Unset => limits_unset(argv, cmdr, out),
        LimitsCommand::Unknown => {
            debug!("Unknown limits sub-command: {}", name);
            print_group_usage(out)
        }
    }
}

fn limits_list<C, W>(argv: &[String], cmdr: &mut C, out: &mut W) -> Result<()>
where
    C: Commander + ?Sized,
    W: Write + ?Sized,
{
    let Some(args) = parse_grammar::<ListArgs, W>(argv, "limits:list", out)? else {
        return Ok(());
    };

    debug!("Listing limits for app {:?}", args.app);
    cmdr.limits_list(args.app.as_deref())
}

fn limits_set<C, W>(argv: &[String], cmdr: &mut C, out: &mut W) -> Result<()>
where
    C: Commander + ?Sized,
    W: Write + ?Sized,
{
    let Some(args) = parse_grammar::<SetArgs, W>(argv, "limits:set", out)? else {
        return Ok(());
    };

    let kind = args.kind();
    debug!("Setting {} limits {:?} for app {:?}", kind, args.limits, args.app);
    cmdr.limits_set(args.app.as_deref(), &args.limits, kind)
}

fn limits_unset<C, W>(argv: &[String], cmdr: &mut C, out: &mut W) -> Result<()>
where
    C: Commander + ?Sized,
    W: Write + ?Sized,
{
    let Some(args) = parse_grammar::<UnsetArgs, W>(argv, "limits:unset", out)? else {
        return Ok(());
    };

    let kind = args.kind();
    debug!("Unsetting {} limits {:?} for app {:?}", kind, args.types, args.app);
    cmdr.limits_unset(args.app.as_deref(), &args.types, kind)
}

/// Parse `argv` against a grammar, with `name` in the binary-name slot.
///
/// Returns `Ok(None)` when help was requested and has been written to `out`.
fn parse_grammar<P, W>(argv: &[String], name: &str, out: &mut W) -> Result<Option<P>>
where
    P: Parser,
    W: Write + ?Sized,
{
    let rest = argv.iter().skip(1).map(String::as_str);
    match P::try_parse_from(std::iter::once(name).chain(rest)) {
        Ok(args) => Ok(Some(args)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", err.render())?;
            Ok(None)
        }
        Err(err) => Err(LimitsError::Grammar(err)),
    }
}

fn wants_help(argv: &[String]) -> bool {
    argv.get(1)
        .is_some_and(|arg| arg == "-h" || arg == "--help")
}

fn print_group_usage<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    write!(out, "{GROUP_USAGE}")?;
    Ok(())
}
