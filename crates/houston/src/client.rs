//! Houston GraphQL client.

use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{HoustonError, Result};
use crate::model::DeploymentUserRole;
use crate::request::{DeploymentUserMutation, GraphQlRequest};
use crate::transport::{HttpRequest, HttpResponse, Transport};

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
    #[serde(default)]
    extensions: Option<ErrorExtensions>,
}

#[derive(Debug, Deserialize)]
struct ErrorExtensions {
    #[serde(default)]
    code: Option<String>,
}

/// Some 400 responses wrap the error list as `{"error": {"errors": [...]}}`.
#[derive(Debug, Deserialize)]
struct NestedErrors {
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
    #[serde(default)]
    error: Option<NestedErrors>,
}

impl Envelope {
    fn into_first_error(self) -> Option<GraphQlError> {
        self.errors
            .into_iter()
            .flatten()
            .next()
            .or_else(|| self.error.and_then(|nested| nested.errors.into_iter().next()))
    }
}

/// Client for the Houston API, generic over its transport.
pub struct HoustonClient<T: Transport> {
    transport: T,
    api_url: String,
    token: Option<String>,
}

impl<T: Transport> HoustonClient<T> {
    pub fn new(transport: T, api_url: impl Into<String>) -> Self {
        Self {
            transport,
            api_url: api_url.into(),
            token: None,
        }
    }

    /// Attach an API token, sent as the `authorization` header. Empty tokens
    /// are ignored.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.is_empty()).then_some(token);
        self
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Execute a GraphQL operation and decode `data.<field>`.
    ///
    /// # Errors
    ///
    /// Returns [`HoustonError::Api`] with the first GraphQL error message,
    /// [`HoustonError::Http`] for other non-2xx responses, or
    /// [`HoustonError::MissingData`] when the field is absent.
    pub fn execute<V, R>(&self, request: &GraphQlRequest<V>, field: &str) -> Result<R>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        let mut headers = Vec::new();
        if let Some(token) = &self.token {
            headers.push(("authorization".to_string(), token.clone()));
        }
        let http_request = HttpRequest {
            url: self.api_url.clone(),
            headers,
            body: serde_json::to_string(request)?,
        };

        debug!(field, "executing Houston operation");
        let response = self.transport.post(&http_request)?;
        decode_response(&response, field)
    }

    /// Add a role binding for `email` on a deployment.
    ///
    /// # Errors
    ///
    /// See [`HoustonClient::execute`].
    pub fn add_deployment_user(
        &self,
        deployment_id: &str,
        email: &str,
        role: &str,
    ) -> Result<DeploymentUserRole> {
        self.deployment_user(DeploymentUserMutation::Add, deployment_id, email, Some(role))
    }

    /// Remove the role binding for `email` on a deployment.
    ///
    /// # Errors
    ///
    /// See [`HoustonClient::execute`].
    pub fn remove_deployment_user(
        &self,
        deployment_id: &str,
        email: &str,
    ) -> Result<DeploymentUserRole> {
        self.deployment_user(DeploymentUserMutation::Remove, deployment_id, email, None)
    }

    /// Change the role bound to `email` on a deployment.
    ///
    /// # Errors
    ///
    /// See [`HoustonClient::execute`].
    pub fn update_deployment_user(
        &self,
        deployment_id: &str,
        email: &str,
        role: &str,
    ) -> Result<DeploymentUserRole> {
        self.deployment_user(DeploymentUserMutation::Update, deployment_id, email, Some(role))
    }

    fn deployment_user(
        &self,
        mutation: DeploymentUserMutation,
        deployment_id: &str,
        email: &str,
        role: Option<&str>,
    ) -> Result<DeploymentUserRole> {
        let request = mutation.request(deployment_id, email, role);
        self.execute(&request, mutation.field())
    }
}

fn decode_response<R: DeserializeOwned>(response: &HttpResponse, field: &str) -> Result<R> {
    let mut envelope: Envelope = match serde_json::from_str(&response.body) {
        Ok(envelope) => envelope,
        Err(err) if !response.is_success() => {
            warn!(status = response.status, "undecodable error response: {err}");
            return Err(HoustonError::Http {
                status: response.status,
                body: response.body.clone(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    let data = envelope.data.take();
    if let Some(first) = envelope.into_first_error() {
        let code = first.extensions.and_then(|ext| ext.code);
        debug!(status = response.status, ?code, "GraphQL error returned");
        return Err(HoustonError::api(first.message, code));
    }

    if !response.is_success() {
        return Err(HoustonError::Http {
            status: response.status,
            body: response.body.clone(),
        });
    }

    match data.and_then(|mut data| data.get_mut(field).map(Value::take)) {
        Some(Value::Null) | None => Err(HoustonError::MissingData {
            field: field.to_string(),
        }),
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}
