//! Registry of known configuration settings.

use std::fmt;
use std::str::FromStr;

use crate::error::AstroError;

/// A registered setting: dotted path, required flag and default.
///
/// Every variant is listed in [`ConfigKey::ALL`]; paths are unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    CloudDomain,
    CloudApiProtocol,
    CloudApiPort,
    PostgresUser,
    PostgresPassword,
    PostgresHost,
    PostgresPort,
    RegistryAuthority,
    RegistryUser,
    RegistryPassword,
    ProjectName,
    UserApiAuthToken,
}

impl ConfigKey {
    pub const ALL: [Self; 12] = [
        Self::CloudDomain,
        Self::CloudApiProtocol,
        Self::CloudApiPort,
        Self::PostgresUser,
        Self::PostgresPassword,
        Self::PostgresHost,
        Self::PostgresPort,
        Self::RegistryAuthority,
        Self::RegistryUser,
        Self::RegistryPassword,
        Self::ProjectName,
        Self::UserApiAuthToken,
    ];

    /// Dotted path of the setting inside the YAML file.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::CloudDomain => "cloud.domain",
            Self::CloudApiProtocol => "cloud.api.protocol",
            Self::CloudApiPort => "cloud.api.port",
            Self::PostgresUser => "postgres.user",
            Self::PostgresPassword => "postgres.password",
            Self::PostgresHost => "postgres.host",
            Self::PostgresPort => "postgres.port",
            Self::RegistryAuthority => "docker.registry.authority",
            Self::RegistryUser => "docker.registry.user",
            Self::RegistryPassword => "docker.registry.password",
            Self::ProjectName => "project.name",
            Self::UserApiAuthToken => "user.apiAuthToken",
        }
    }

    #[must_use]
    pub const fn required(self) -> bool {
        true
    }

    /// Registered default; empty means "must be set before use".
    #[must_use]
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::CloudApiProtocol => "https",
            Self::CloudApiPort => "443",
            Self::PostgresUser | Self::PostgresPassword | Self::PostgresHost => "postgres",
            Self::PostgresPort => "5432",
            Self::RegistryUser | Self::RegistryPassword => "admin",
            Self::CloudDomain
            | Self::RegistryAuthority
            | Self::ProjectName
            | Self::UserApiAuthToken => "",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for ConfigKey {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.path() == s)
            .ok_or_else(|| AstroError::UnknownKey { key: s.to_string() })
    }
}
