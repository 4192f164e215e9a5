//! HTTP transport seam.
//!
//! [`HoustonClient`](crate::HoustonClient) only needs "POST this body, give
//! me the status and body back". Production uses [`HttpTransport`]; tests
//! plug in an [`FnTransport`] closure.

use std::time::Duration;

use tracing::debug;

use crate::error::Result;

/// Default request timeout for [`HttpTransport`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// An outgoing POST request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    /// Look up a header by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a single HTTP POST.
pub trait Transport {
    /// Send `request` and return whatever the server answered.
    ///
    /// # Errors
    ///
    /// Returns an error only when no response could be obtained; non-2xx
    /// statuses are returned as ordinary responses.
    fn post(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// Blocking `reqwest` transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build a transport with [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post(&self, request: &HttpRequest) -> Result<HttpResponse> {
        debug!(url = %request.url, "POST");
        let mut builder = self
            .client
            .post(&request.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(request.body.clone());
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(status, bytes = body.len(), "response received");
        Ok(HttpResponse { status, body })
    }
}

/// Transport backed by a closure, for canned responses.
pub struct FnTransport<F>(F)
where
    F: Fn(&HttpRequest) -> HttpResponse;

impl<F> FnTransport<F>
where
    F: Fn(&HttpRequest) -> HttpResponse,
{
    pub const fn new(handler: F) -> Self {
        Self(handler)
    }
}

impl<F> Transport for FnTransport<F>
where
    F: Fn(&HttpRequest) -> HttpResponse,
{
    fn post(&self, request: &HttpRequest) -> Result<HttpResponse> {
        Ok((self.0)(request))
    }
}
