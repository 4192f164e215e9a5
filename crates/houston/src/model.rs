//! Data types exchanged with Houston.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deployment-level roles known to Houston.
///
/// The server remains the authority on which roles exist; operations take the
/// role as a plain string and this enum only names the well-known values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    DeploymentAdmin,
    DeploymentEditor,
    DeploymentViewer,
}

impl Role {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DeploymentAdmin => "DEPLOYMENT_ADMIN",
            Self::DeploymentEditor => "DEPLOYMENT_EDITOR",
            Self::DeploymentViewer => "DEPLOYMENT_VIEWER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User reference embedded in a role binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleUser {
    pub username: String,
}

/// Deployment reference embedded in a role binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRef {
    pub release_name: String,
}

/// Role binding echoed back by the deployment-user mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentUserRole {
    pub id: String,
    pub user: RoleUser,
    pub role: String,
    pub deployment: DeploymentRef,
}
