//! `<type>=<value>` limit specification grammar
//!
//! Only the syntactic shape is checked here. Quantities, units and the
//! request/limit split are left to the executor, and the token itself is
//! forwarded verbatim.

use regex::Regex;
use std::sync::LazyLock;

static LIMIT_TOKEN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^=\s]+=[^=/\s]+(?:/[^=/\s]+)?$"));

/// Whether `token` has the `<type>=<value>` or `<type>=<request>/<limit>` shape
fn is_limit_token(token: &str) -> Result<bool, String> {
    let re = LIMIT_TOKEN
        .as_ref()
        .map_err(|e| format!("limit token pattern is invalid: {e}"))?;
    Ok(re.is_match(token))
}

/// Clap value parser for `limits:set` positionals.
///
/// Returns the token unchanged so executors see exactly what the user typed.
pub fn parse_limit_token(token: &str) -> Result<String, String> {
    if !is_limit_token(token)? {
        return Err(format!(
            "'{token}' is not of the form <type>=<value> or <type>=<request>/<limit>"
        ));
    }
    Ok(token.to_string())
}

/// Clap value parser for `limits:unset` positionals
pub fn parse_process_type(token: &str) -> Result<String, String> {
    if token.trim().is_empty() {
        return Err("process type must not be empty".to_string());
    }
    Ok(token.to_string())
}
