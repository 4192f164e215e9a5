//! GraphQL request envelopes and the deployment-user mutations.

use serde::Serialize;

/// A GraphQL operation as sent on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<V: Serialize> {
    pub query: &'static str,
    pub variables: V,
}

/// Variables shared by the deployment-user mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentUserVariables {
    pub deployment_id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

pub const DEPLOYMENT_USER_ADD: &str = "
mutation AddDeploymentUser($email: String!, $deploymentId: Id!, $role: Role!) {
  deploymentAddUserRole(email: $email, deploymentId: $deploymentId, role: $role) {
    id
    user {
      username
    }
    role
    deployment {
      releaseName
    }
  }
}";

pub const DEPLOYMENT_USER_REMOVE: &str = "
mutation RemoveDeploymentUser($email: String!, $deploymentId: Id!) {
  deploymentRemoveUserRole(email: $email, deploymentId: $deploymentId) {
    id
    user {
      username
    }
    role
    deployment {
      releaseName
    }
  }
}";

pub const DEPLOYMENT_USER_UPDATE: &str = "
mutation UpdateDeploymentUser($email: String!, $deploymentId: Id!, $role: Role!) {
  deploymentUpdateUserRole(email: $email, deploymentId: $deploymentId, role: $role) {
    id
    user {
      username
    }
    role
    deployment {
      releaseName
    }
  }
}";

/// The three deployment-user mutations and the response field each fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentUserMutation {
    Add,
    Remove,
    Update,
}

impl DeploymentUserMutation {
    #[must_use]
    pub const fn document(self) -> &'static str {
        match self {
            Self::Add => DEPLOYMENT_USER_ADD,
            Self::Remove => DEPLOYMENT_USER_REMOVE,
            Self::Update => DEPLOYMENT_USER_UPDATE,
        }
    }

    /// Name of the `data` field carrying the mutation result.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::Add => "deploymentAddUserRole",
            Self::Remove => "deploymentRemoveUserRole",
            Self::Update => "deploymentUpdateUserRole",
        }
    }

    #[must_use]
    pub fn request(
        self,
        deployment_id: &str,
        email: &str,
        role: Option<&str>,
    ) -> GraphQlRequest<DeploymentUserVariables> {
        GraphQlRequest {
            query: self.document(),
            variables: DeploymentUserVariables {
                deployment_id: deployment_id.to_string(),
                email: email.to_string(),
                role: role.map(str::to_string),
            },
        }
    }
}
