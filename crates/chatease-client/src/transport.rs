//! HTTP transport seam.
//!
//! The client needs exactly one HTTP capability: a single POST with headers
//! and a JSON body. Requests and responses cross the seam as plain data so
//! tests can substitute a fake transport and assert on what would have hit
//! the wire.

use async_trait::async_trait;

use crate::error::ClientError;

/// One outbound POST request, described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// An HTTP response reduced to the fields the client interprets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Numeric status code.
    pub status: u16,
    /// Canonical reason phrase ("OK", "Bad Request", ...).
    pub status_text: String,
    /// Body read as text; empty when unreadable.
    pub body: String,
}

impl HttpResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one HTTP POST round-trip.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute `request` and return the response with its body read as text.
    ///
    /// Implementations must propagate transport-level failures (DNS,
    /// connection refused, ...) as errors rather than synthesizing a status.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}

/// Production transport backed by [`reqwest::Client`].
///
/// No timeout or retry policy is layered on top; reqwest's defaults apply.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let mut builder = self.inner.post(&request.url).body(request.body);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status();
        // Best-effort body read: a failed read must not mask the status.
        let body = response.text().await.unwrap_or_default();

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
