//! Deployment user command implementation.

use std::io::Write;

use tracing::info;

use crate::cli::UserSubcommand;
use crate::config::ConfigContext;
use crate::deployment::{houston_client, user};
use crate::error::Result;

/// Execute a `deployment user` subcommand against Houston.
///
/// # Errors
///
/// Returns the Houston error message unchanged, or an I/O error.
pub fn execute_user<W: Write>(
    command: &UserSubcommand,
    ctx: &ConfigContext,
    out: &mut W,
) -> Result<()> {
    let client = houston_client(ctx)?;
    info!(api_url = client.api_url(), "using Houston");

    match command {
        UserSubcommand::Add(args) => {
            user::add_user(&args.deployment_id, &args.email, &args.role, &client, out)
        }
        UserSubcommand::Remove(args) => {
            user::delete_user(&args.deployment_id, &args.email, &client, out)
        }
        UserSubcommand::Update(args) => {
            user::update_user(&args.deployment_id, &args.email, &args.role, &client, out)
        }
    }
}
