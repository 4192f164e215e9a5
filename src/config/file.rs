//! Typed layout of `config.yaml`.
//!
//! Dotted keys map to nested sections (`cloud.api.port` is
//! `cloud: { api: { port } }`). Leaves are `Option<String>` so an unset key
//! is distinct from one explicitly set to an empty string.

use serde::{Deserialize, Deserializer, Serialize};

use super::key::ConfigKey;

fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Accept any YAML scalar, so `port: 5432` reads the same as `port: "5432"`.
fn scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|value| match value {
        Scalar::Str(s) => s,
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "is_default")]
    pub cloud: CloudSection,
    #[serde(default, skip_serializing_if = "is_default")]
    pub postgres: PostgresSection,
    #[serde(default, skip_serializing_if = "is_default")]
    pub docker: DockerSection,
    #[serde(default, skip_serializing_if = "is_default")]
    pub project: ProjectSection,
    #[serde(default, skip_serializing_if = "is_default")]
    pub user: UserSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudSection {
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "is_default")]
    pub api: CloudApiSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudApiSection {
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgresSection {
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerSection {
    #[serde(default, skip_serializing_if = "is_default")]
    pub registry: RegistrySection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySection {
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSection {
    #[serde(default, deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSection {
    #[serde(
        rename = "apiAuthToken",
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_auth_token: Option<String>,
}

impl ConfigFile {
    /// A file holding every registered non-empty default.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut file = Self::default();
        for key in ConfigKey::ALL {
            let default = key.default_value();
            if !default.is_empty() {
                file.set(key, default);
            }
        }
        file
    }

    #[must_use]
    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        let slot = match key {
            ConfigKey::CloudDomain => &self.cloud.domain,
            ConfigKey::CloudApiProtocol => &self.cloud.api.protocol,
            ConfigKey::CloudApiPort => &self.cloud.api.port,
            ConfigKey::PostgresUser => &self.postgres.user,
            ConfigKey::PostgresPassword => &self.postgres.password,
            ConfigKey::PostgresHost => &self.postgres.host,
            ConfigKey::PostgresPort => &self.postgres.port,
            ConfigKey::RegistryAuthority => &self.docker.registry.authority,
            ConfigKey::RegistryUser => &self.docker.registry.user,
            ConfigKey::RegistryPassword => &self.docker.registry.password,
            ConfigKey::ProjectName => &self.project.name,
            ConfigKey::UserApiAuthToken => &self.user.api_auth_token,
        };
        slot.as_deref()
    }

    pub fn set(&mut self, key: ConfigKey, value: impl Into<String>) {
        *self.slot_mut(key) = Some(value.into());
    }

    fn slot_mut(&mut self, key: ConfigKey) -> &mut Option<String> {
        match key {
            ConfigKey::CloudDomain => &mut self.cloud.domain,
            ConfigKey::CloudApiProtocol => &mut self.cloud.api.protocol,
            ConfigKey::CloudApiPort => &mut self.cloud.api.port,
            ConfigKey::PostgresUser => &mut self.postgres.user,
            ConfigKey::PostgresPassword => &mut self.postgres.password,
            ConfigKey::PostgresHost => &mut self.postgres.host,
            ConfigKey::PostgresPort => &mut self.postgres.port,
            ConfigKey::RegistryAuthority => &mut self.docker.registry.authority,
            ConfigKey::RegistryUser => &mut self.docker.registry.user,
            ConfigKey::RegistryPassword => &mut self.docker.registry.password,
            ConfigKey::ProjectName => &mut self.project.name,
            ConfigKey::UserApiAuthToken => &mut self.user.api_auth_token,
        }
    }
}
