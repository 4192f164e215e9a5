//! Configuration management for `astro_cli`.
//!
//! Configuration is loaded from YAML files in two scopes:
//! - Home config (`~/.astro/config.yaml`), created with defaults on first run
//! - Project config (`<project>/.astro/config.yaml`), found by walking up
//!   from the working directory
//!
//! Project values win over home values, which win over registered defaults.

mod context;
mod file;
mod key;
mod locator;
mod store;

pub use context::{ConfigContext, project_root};
pub use file::ConfigFile;
pub use key::ConfigKey;
pub use locator::find_dir_in_path;
pub use store::{ConfigStore, Scope, create_config};

/// Marker directory for both home and project config.
pub const CONFIG_DIR: &str = ".astro";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE_NAME: &str = "config.yaml";
