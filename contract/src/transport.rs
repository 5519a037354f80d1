//! The shared request helper and the transport seam behind it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser sends requests through `gloo-net`, the CLI through `reqwest`.
//! Both implement [`ApiTransport`]; everything above that line (headers,
//! bearer token, status classification, logging) lives here once.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::endpoint::{Endpoint, Method, join_url};
use crate::outcome::{ApiError, ApiOutcome};

/// A fully described API call, independent of any HTTP library.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint, body: None, bearer: None }
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach the bearer token, if one is stored.
    #[must_use]
    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.endpoint.method()
    }

    #[must_use]
    pub fn path(&self) -> String {
        self.endpoint.path()
    }

    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        join_url(base_url, &self.path())
    }

    /// Headers every transport must send.
    #[must_use]
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("Content-Type", "application/json".to_owned()),
            ("Accept", "application/json".to_owned()),
        ];
        if let Some(token) = &self.bearer {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        headers
    }
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

/// Sends an [`ApiRequest`] and returns whatever came back.
///
/// Not `Send`: browser futures are single-threaded.
#[async_trait::async_trait(?Send)]
pub trait ApiTransport {
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response was received.
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError>;
}

/// Send one request and classify the response.
pub async fn execute<T, Tr>(transport: &Tr, request: &ApiRequest) -> ApiOutcome<T>
where
    T: DeserializeOwned,
    Tr: ApiTransport + ?Sized,
{
    let method = request.method();
    let path = request.path();
    tracing::debug!(%method, %path, "api request");

    let outcome = match transport.send(request).await {
        Ok(raw) => ApiOutcome::from_response(raw.status, &raw.body),
        Err(error) => ApiOutcome::Transport(error),
    };
    match &outcome {
        ApiOutcome::Transport(error) => tracing::error!(%method, %path, %error, "api request failed"),
        ApiOutcome::Success(_) => tracing::debug!(%method, %path, "api request succeeded"),
        ApiOutcome::Validation(_) => tracing::info!(%method, %path, "api rejected payload"),
        ApiOutcome::Unauthorized { status, .. } | ApiOutcome::Failed { status, .. } => {
            tracing::warn!(%method, %path, status, "api request refused");
        }
    }
    outcome
}
