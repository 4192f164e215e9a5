//! Config get/set command implementation.

use std::io::Write;

use crate::cli::{ConfigGetArgs, ConfigSetArgs};
use crate::config::{ConfigContext, ConfigKey, Scope};
use crate::error::Result;

/// Execute `config get`.
///
/// Without `--global` the resolved value is printed (project, then home,
/// then default). With `--global` only the home scope is consulted.
///
/// # Errors
///
/// Returns an error if the key is unknown or output fails.
pub fn execute_get<W: Write>(args: &ConfigGetArgs, ctx: &ConfigContext, out: &mut W) -> Result<()> {
    let key: ConfigKey = args.key.parse()?;
    let value = if args.global {
        ctx.get_scoped(key, Scope::Home)
            .unwrap_or_else(|| key.default_value())
            .to_string()
    } else {
        ctx.get(key)
    };
    writeln!(out, "{value}")?;
    Ok(())
}

/// Execute `config set`.
///
/// # Errors
///
/// Returns an error if the key is unknown, a project write is attempted
/// outside a project, or the file cannot be saved.
pub fn execute_set<W: Write>(
    args: &ConfigSetArgs,
    ctx: &mut ConfigContext,
    out: &mut W,
) -> Result<()> {
    let key: ConfigKey = args.key.parse()?;
    let scope = if args.global {
        Scope::Home
    } else {
        Scope::Project
    };
    ctx.set(key, &args.value, scope)?;
    writeln!(out, "Setting {} to {} successfully", key, args.value)?;
    Ok(())
}
