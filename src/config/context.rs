//! Two-tier configuration: home scope plus an optional project scope.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::key::ConfigKey;
use super::locator::find_dir_in_path;
use super::store::{ConfigStore, Scope, create_config};
use super::{CONFIG_DIR, CONFIG_FILE_NAME};
use crate::error::{AstroError, Result};

/// Resolved configuration for one CLI invocation.
///
/// Built once at startup and passed to whatever needs settings. Reads prefer
/// the project store, then the home store, then the registered default.
#[derive(Debug, Clone)]
pub struct ConfigContext {
    home: ConfigStore,
    project: Option<ConfigStore>,
}

impl ConfigContext {
    /// Initialize from the user's home directory and the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error only if the home or current directory cannot be
    /// determined. Problems with the config files themselves are logged and
    /// leave the affected scope empty.
    pub fn init() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not determine home directory")
        })?;
        let cwd = std::env::current_dir()?;
        Ok(Self::init_with(&home, &cwd))
    }

    /// Initialize with explicit home and working directories.
    #[must_use]
    pub fn init_with(home: &Path, cwd: &Path) -> Self {
        let home_dir = home.join(CONFIG_DIR);
        let home_store = init_home(&home_dir);
        let project = init_project(&home_dir, cwd);
        Self {
            home: home_store,
            project,
        }
    }

    /// Whether a project config file is in effect.
    #[must_use]
    pub fn project_config_exists(&self) -> bool {
        self.project.as_ref().is_some_and(ConfigStore::is_bound)
    }

    /// Resolve `key`: project value, then home value, then default.
    #[must_use]
    pub fn get(&self, key: ConfigKey) -> String {
        self.project
            .as_ref()
            .and_then(|store| store.get(key))
            .or_else(|| self.home.get(key))
            .unwrap_or_else(|| key.default_value())
            .to_string()
    }

    /// Value set in a single scope, without falling back.
    #[must_use]
    pub fn get_scoped(&self, key: ConfigKey, scope: Scope) -> Option<&str> {
        match scope {
            Scope::Home => self.home.get(key),
            Scope::Project => self.project.as_ref().and_then(|store| store.get(key)),
        }
    }

    /// Set `key` in the given scope and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`AstroError::NotInProject`] when writing project scope with no
    /// project config, or [`AstroError::ConfigIo`] if the scope's file could
    /// not be loaded at startup or saving fails.
    pub fn set(&mut self, key: ConfigKey, value: &str, scope: Scope) -> Result<()> {
        let store = match scope {
            Scope::Home => &mut self.home,
            Scope::Project => self.project.as_mut().ok_or(AstroError::NotInProject)?,
        };
        store.set(key, value);
        store.save()?;
        info!(%key, %scope, "config value set");
        Ok(())
    }

    /// Create `<project_path>/.astro/config.yaml` and use it as the project
    /// scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created.
    pub fn create_project_config(&mut self, project_path: &Path) -> Result<()> {
        let dir = project_path.join(CONFIG_DIR);
        let file = dir.join(CONFIG_FILE_NAME);
        let mut store = ConfigStore::new(Scope::Project);
        create_config(&mut store, &dir, &file)?;
        info!(path = %file.display(), "created project config");
        self.project = Some(store);
        Ok(())
    }

    /// Fully qualified Houston API URL.
    #[must_use]
    pub fn api_url(&self) -> String {
        format!(
            "{}://houston.{}:{}/v1",
            self.get(ConfigKey::CloudApiProtocol),
            self.get(ConfigKey::CloudDomain),
            self.get(ConfigKey::CloudApiPort),
        )
    }
}

fn init_home(home_dir: &Path) -> ConfigStore {
    let file = home_dir.join(CONFIG_FILE_NAME);
    let mut store = ConfigStore::with_defaults(Scope::Home);

    if !file.exists() {
        if let Err(e) = create_config(&mut store, home_dir, &file) {
            warn!("Error creating default config in home dir: {e}");
            return store;
        }
        info!(path = %file.display(), "created default home config");
    }

    match ConfigStore::load(Scope::Home, &file) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{e}");
            store
        }
    }
}

fn init_project(home_dir: &Path, cwd: &Path) -> Option<ConfigStore> {
    let marker = match find_dir_in_path(cwd, CONFIG_DIR) {
        Ok(Some(marker)) => marker,
        Ok(None) => {
            debug!(cwd = %cwd.display(), "no project directory found");
            return None;
        }
        Err(e) => {
            warn!("{}", AstroError::ProjectSearch(e));
            return None;
        }
    };

    if same_location(&marker, home_dir) {
        debug!("project search reached the home config dir; no project");
        return None;
    }

    let file = marker.join(CONFIG_FILE_NAME);
    if !file.exists() {
        debug!(path = %file.display(), "project dir has no config file");
        return None;
    }

    match ConfigStore::load(Scope::Project, &file) {
        Ok(store) => Some(store),
        Err(e) => {
            warn!("{e}");
            None
        }
    }
}

/// Paths are the same if they are equal as written or after resolving
/// symlinks; either match counts as the same location.
fn same_location(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (dunce::canonicalize(a), dunce::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Parent of the nearest `.astro` directory above `cwd`.
///
/// # Errors
///
/// Returns [`AstroError::ProjectSearch`] if the upward search fails.
pub fn project_root(cwd: &Path) -> Result<Option<PathBuf>> {
    root_of_marker(cwd, CONFIG_DIR)
}

fn root_of_marker(cwd: &Path, marker: &str) -> Result<Option<PathBuf>> {
    let found = find_dir_in_path(cwd, marker).map_err(AstroError::ProjectSearch)?;
    Ok(found.and_then(|dir| dir.parent().map(Path::to_path_buf)))
}
