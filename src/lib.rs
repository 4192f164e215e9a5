//! `astro_cli` - Astronomer command-line client library
//!
//! This crate provides the core functionality for the `astro` CLI tool:
//! two-tier YAML configuration and deployment user role management against
//! the Houston GraphQL API.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Home/project configuration resolution
//! - [`deployment`] - Deployment user operations (add, remove, update)
//! - [`error`] - Error types and handling
//! - [`logging`] - tracing subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod deployment;
pub mod error;
pub mod logging;

pub use config::{ConfigContext, ConfigKey, Scope};
pub use error::{AstroError, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
