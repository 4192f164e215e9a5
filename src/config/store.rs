//! A single scope's configuration, optionally backed by a YAML file.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::file::ConfigFile;
use super::key::ConfigKey;
use crate::error::{AstroError, Result};

#[cfg(unix)]
const CONFIG_DIR_MODE: u32 = 0o770;
#[cfg(unix)]
const CONFIG_FILE_MODE: u32 = 0o600;

/// Which config file a store belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Home,
    Project,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Home => "home",
            Self::Project => "project",
        })
    }
}

/// In-memory values for one scope plus the file they persist to.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    scope: Scope,
    path: Option<PathBuf>,
    values: ConfigFile,
}

impl ConfigStore {
    /// An empty store not yet bound to a file.
    #[must_use]
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            path: None,
            values: ConfigFile::default(),
        }
    }

    /// An unbound store pre-populated with registered defaults.
    #[must_use]
    pub fn with_defaults(scope: Scope) -> Self {
        Self {
            scope,
            path: None,
            values: ConfigFile::with_defaults(),
        }
    }

    /// Read `path` into a store bound to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn load(scope: Scope, path: &Path) -> Result<Self> {
        let mut store = Self::new(scope);
        store.path = Some(path.to_path_buf());
        store.reload()?;
        Ok(store)
    }

    /// Replace in-memory values with the contents of the bound file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. Values are left
    /// unchanged in that case.
    pub fn reload(&mut self) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        let contents = fs::read_to_string(path)
            .map_err(|e| AstroError::config_io("reading", self.scope, parent_of(path), e))?;
        self.values = parse(&contents, path)?;
        debug!(scope = %self.scope, path = %path.display(), "config loaded");
        Ok(())
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.path.is_some()
    }

    /// Value explicitly present in this scope.
    #[must_use]
    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: ConfigKey, value: impl Into<String>) {
        self.values.set(key, value);
    }

    /// Write the in-memory values to the bound file.
    ///
    /// # Errors
    ///
    /// Returns a [`AstroError::ConfigIo`] naming this store's scope if no file
    /// is bound (for example the file failed to load) or the write fails.
    pub fn save(&self) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Err(AstroError::config_io(
                "saving",
                self.scope,
                PathBuf::new(),
                io::Error::new(io::ErrorKind::NotFound, "no config file is loaded"),
            ));
        };
        self.write_to(path)
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(&self.values).map_err(|e| {
            AstroError::config_io("saving", self.scope, parent_of(path), io::Error::other(e))
        })?;
        fs::write(path, yaml)
            .map_err(|e| AstroError::config_io("saving", self.scope, parent_of(path), e))?;
        debug!(scope = %self.scope, path = %path.display(), "config saved");
        Ok(())
    }
}

fn parent_of(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

fn parse(contents: &str, path: &Path) -> Result<ConfigFile> {
    if contents.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str(contents).map_err(|e| AstroError::ConfigParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Create `dir` and `file`, then persist the store's current values there
/// and bind the store to the new file.
///
/// The directory is created with mode 0770 and the file is restricted to
/// 0600 (owner read/write).
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written.
pub fn create_config(store: &mut ConfigStore, dir: &Path, file: &Path) -> Result<()> {
    let scope = store.scope;
    create_dir(dir).map_err(|e| AstroError::config_io("creating", scope, dir, e))?;
    fs::File::create(file).map_err(|e| AstroError::config_io("creating", scope, dir, e))?;
    restrict_permissions(file).map_err(|e| AstroError::config_io("creating", scope, dir, e))?;

    store.write_to(file)?;
    store.path = Some(file.to_path_buf());
    Ok(())
}

#[cfg(unix)]
fn create_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new()
        .recursive(true)
        .mode(CONFIG_DIR_MODE)
        .create(dir)
}

#[cfg(not(unix))]
fn create_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn restrict_permissions(file: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(file, fs::Permissions::from_mode(CONFIG_FILE_MODE))
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &Path) -> io::Result<()> {
    Ok(())
}
