//! Deployment operations backed by Houston.

pub mod user;

use houston::{HoustonClient, HttpTransport};

use crate::config::{ConfigContext, ConfigKey};
use crate::error::Result;

/// Build a Houston client from the resolved API URL and auth token.
///
/// # Errors
///
/// Returns an error if the HTTP transport cannot be initialized.
pub fn houston_client(config: &ConfigContext) -> Result<HoustonClient<HttpTransport>> {
    let transport = HttpTransport::new()?;
    Ok(HoustonClient::new(transport, config.api_url())
        .with_token(config.get(ConfigKey::UserApiAuthToken)))
}
