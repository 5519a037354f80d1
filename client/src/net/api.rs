//! Browser transport for the blog REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub transport that reports a network error, since
//! the API is only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an [`ApiError`]; the shared helper in
//! `contract` turns it into the generic error toast so a dead API never
//! panics during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contract::{ApiError, ApiRequest, ApiTransport, RawResponse};

use crate::state::session::BrowserSession;

/// API root used when no build-time override is given.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// API root, baked in at build time from `POSTBOARD_API_URL`.
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("POSTBOARD_API_URL"))
}

fn resolve_base_url(raw: Option<&'static str>) -> &'static str {
    raw.map(str::trim)
        .filter(|url| !url.is_empty())
        .map_or(DEFAULT_API_URL, |url| url.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn network_failed_message(error: impl std::fmt::Display) -> String {
    format!("request could not be completed: {error}")
}

/// Sends [`ApiRequest`]s with the browser's `fetch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserTransport {
    base_url: &'static str,
}

impl BrowserTransport {
    pub fn new(base_url: &'static str) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &'static str {
        self.base_url
    }
}

impl Default for BrowserTransport {
    fn default() -> Self {
        Self::new(api_base_url())
    }
}

#[async_trait::async_trait(?Send)]
impl ApiTransport for BrowserTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use contract::Method;
            use gloo_net::http::Request;

            let url = request.url(self.base_url);
            let mut builder = match request.method() {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            for (name, value) in request.headers() {
                builder = builder.header(name, &value);
            }

            let sent = match &request.body {
                Some(body) => {
                    builder
                        .body(body.to_string())
                        .map_err(|e| ApiError::Network(network_failed_message(e)))?
                        .send()
                        .await
                }
                None => builder.send().await,
            };
            let response = sent.map_err(|e| ApiError::Network(network_failed_message(e)))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Network(network_failed_message(e)))?;
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.base_url, request);
            Err(ApiError::Network("not available during server rendering".to_owned()))
        }
    }
}

/// Transport and session handles shared through Leptos context.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiContext {
    pub transport: BrowserTransport,
    pub session: BrowserSession,
}

impl ApiContext {
    pub fn from_env() -> Self {
        Self::default()
    }
}
