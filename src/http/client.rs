//! Low-level HTTP client — `FreedaiyHttp`.
//!
//! One method per backend endpoint, one request per call. Non-success replies
//! are reported with the endpoint's failure message; nothing is retried.

use crate::domain::lead::LeadRequest;
use crate::domain::post::Post;
use crate::domain::product::Product;
use crate::domain::resource::Resource;
use crate::domain::subscription::SubscriptionRequest;
use crate::error::{FailureCause, HttpError};
use crate::http::endpoint::Endpoint;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the FreeDAIY backend.
///
/// Holds only the base URL and a pooled connection handle; clones share both.
#[derive(Debug, Clone)]
pub struct FreedaiyHttp {
    base_url: String,
    client: Client,
}

impl FreedaiyHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_timeout(base_url, None)
    }

    /// Build a client whose requests give up after `timeout` (native only).
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, HttpError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.pool_max_idle_per_host(10);
            if let Some(t) = timeout {
                builder = builder.timeout(t);
            }
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().map_err(HttpError::Client)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    // ── Submissions ──────────────────────────────────────────────────────

    pub async fn subscribe(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<serde_json::Value, HttpError> {
        self.post(Endpoint::Subscribe, request).await
    }

    pub async fn submit_lead(&self, request: &LeadRequest) -> Result<serde_json::Value, HttpError> {
        self.post(Endpoint::Leads, request).await
    }

    // ── Content ──────────────────────────────────────────────────────────

    pub async fn get_posts(&self) -> Result<Vec<Post>, HttpError> {
        self.get(Endpoint::Posts).await
    }

    pub async fn get_products(&self) -> Result<Vec<Product>, HttpError> {
        self.get(Endpoint::Products).await
    }

    pub async fn get_resources(&self) -> Result<Vec<Resource>, HttpError> {
        self.get(Endpoint::Resources).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, HttpError> {
        self.do_request(endpoint, None::<&()>).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<T, HttpError> {
        self.do_request(endpoint, Some(body)).await
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: Endpoint,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let url = self.url(endpoint);
        let method = endpoint.method();
        let message = endpoint.failure_message();

        tracing::debug!(method = %method, url = %url, "Sending request");

        let mut req = self.client.request(method.clone(), &url);
        if let Some(b) = body {
            // Sets `Content-Type: application/json`.
            req = req.json(b);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(method = %method, url = %url, error = %e, "{}", message);
                return Err(HttpError::RequestFailed {
                    message,
                    cause: FailureCause::Transport(e),
                });
            }
        };

        let status = resp.status();
        if !status.is_success() {
            let body_text = match resp.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "Failed to read error body");
                    String::new()
                }
            };
            tracing::warn!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                "{}",
                message
            );
            return Err(HttpError::RequestFailed {
                message,
                cause: FailureCause::Status {
                    status: status.as_u16(),
                    body: body_text,
                },
            });
        }

        let bytes = resp.bytes().await.map_err(|e| HttpError::RequestFailed {
            message,
            cause: FailureCause::Transport(e),
        })?;

        serde_json::from_slice::<T>(&bytes).map_err(|source| {
            tracing::warn!(url = %url, error = %source, "Malformed response body");
            HttpError::DecodeFailed { message, source }
        })
    }
}
