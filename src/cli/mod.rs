//! Command-line interface for `astro_cli`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use houston::Role;

use crate::config::ConfigContext;
use crate::logging;

/// astro - Astronomer CLI.
#[derive(Parser, Debug)]
#[command(name = "astro")]
#[command(
    author,
    version,
    about = "Manage Astronomer configuration and deployment users",
    long_about = None
)]
pub struct Cli {
    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, env = "ASTRO_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read/write configuration
    Config(ConfigCommand),

    /// Manage deployments
    Deployment(DeploymentCommand),

    /// Generate shell completion scripts
    Completion(CompletionArgs),

    /// Show version information
    Version(VersionArgs),
}

#[derive(Args, Debug)]
pub struct ConfigCommand {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a config value
    Get(ConfigGetArgs),

    /// Set a config value
    Set(ConfigSetArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConfigGetArgs {
    /// Dotted config key, e.g. cloud.domain
    pub key: String,

    /// Read the home config instead of the resolved value
    #[arg(short, long)]
    pub global: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Dotted config key, e.g. cloud.domain
    pub key: String,

    /// Value to store
    pub value: String,

    /// Write to the home config instead of the project config
    #[arg(short, long)]
    pub global: bool,
}

#[derive(Args, Debug)]
pub struct DeploymentCommand {
    /// Deployment subcommand
    #[command(subcommand)]
    pub command: DeploymentSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DeploymentSubcommand {
    /// Manage deployment user roles
    User(UserCommand),
}

#[derive(Args, Debug)]
pub struct UserCommand {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// Grant a user a role on a deployment
    Add(UserAddArgs),

    /// Remove a user's role from a deployment
    #[command(alias = "delete")]
    Remove(UserRemoveArgs),

    /// Change a user's role on a deployment
    Update(UserUpdateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct UserAddArgs {
    /// Email of the user
    pub email: String,

    /// Deployment to modify
    #[arg(long)]
    pub deployment_id: String,

    /// Role to grant (DEPLOYMENT_ADMIN, DEPLOYMENT_EDITOR, DEPLOYMENT_VIEWER)
    #[arg(long, default_value = Role::DeploymentViewer.as_str())]
    pub role: String,
}

#[derive(Args, Debug, Clone)]
pub struct UserRemoveArgs {
    /// Email of the user
    pub email: String,

    /// Deployment to modify
    #[arg(long)]
    pub deployment_id: String,
}

#[derive(Args, Debug, Clone)]
pub struct UserUpdateArgs {
    /// Email of the user
    pub email: String,

    /// Deployment to modify
    #[arg(long)]
    pub deployment_id: String,

    /// New role (DEPLOYMENT_ADMIN, DEPLOYMENT_EDITOR, DEPLOYMENT_VIEWER)
    #[arg(long)]
    pub role: String,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Args, Debug, Clone, Default)]
pub struct VersionArgs {
    /// Print only the version number
    #[arg(long)]
    pub short: bool,

    /// Emit JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Version(args) => commands::version::execute(&args, &mut stdout)?,
        Commands::Completion(args) => commands::completion::execute(&args, &mut stdout),
        Commands::Config(config) => {
            let mut ctx = ConfigContext::init()?;
            match config.command {
                ConfigSubcommand::Get(args) => {
                    commands::config::execute_get(&args, &ctx, &mut stdout)?;
                }
                ConfigSubcommand::Set(args) => {
                    commands::config::execute_set(&args, &mut ctx, &mut stdout)?;
                }
            }
        }
        Commands::Deployment(deployment) => {
            let ctx = ConfigContext::init()?;
            match deployment.command {
                DeploymentSubcommand::User(user) => {
                    commands::deployment::execute_user(&user.command, &ctx, &mut stdout)?;
                }
            }
        }
    }

    Ok(())
}
