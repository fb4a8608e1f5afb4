//! High-level client — `FreedaiyClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::domain::content::client::Content;
use crate::domain::lead::client::Leads;
use crate::domain::post::client::Posts;
use crate::domain::product::client::Products;
use crate::domain::resource::client::Resources;
use crate::domain::subscription::client::Subscriptions;
use crate::error::SdkError;
use crate::http::FreedaiyHttp;
use crate::network::{resolve_base_url, BACKEND_URL_ENV, DEFAULT_API_URL};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::content::client::Content as ContentClient;
pub use crate::domain::lead::client::Leads as LeadsClient;
pub use crate::domain::post::client::Posts as PostsClient;
pub use crate::domain::product::client::Products as ProductsClient;
pub use crate::domain::resource::client::Resources as ResourcesClient;
pub use crate::domain::subscription::client::Subscriptions as SubscriptionsClient;

/// The primary entry point for the FreeDAIY SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.subscriptions()`, `client.posts()`, etc.
///
/// The client holds no mutable state. Clones share the connection pool.
#[derive(Debug, Clone)]
pub struct FreedaiyClient {
    pub(crate) http: FreedaiyHttp,
}

impl FreedaiyClient {
    pub fn builder() -> FreedaiyClientBuilder {
        FreedaiyClientBuilder::default()
    }

    /// Low-level HTTP client, one method per endpoint.
    pub fn http(&self) -> &FreedaiyHttp {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions { client: self }
    }

    pub fn leads(&self) -> Leads<'_> {
        Leads { client: self }
    }

    pub fn posts(&self) -> Posts<'_> {
        Posts { client: self }
    }

    pub fn products(&self) -> Products<'_> {
        Products { client: self }
    }

    pub fn resources(&self) -> Resources<'_> {
        Resources { client: self }
    }

    pub fn content(&self) -> Content<'_> {
        Content { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct FreedaiyClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
}

impl Default for FreedaiyClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

impl FreedaiyClientBuilder {
    /// Builder whose base URL comes from `FREEDAIY_BACKEND_URL`, or the
    /// local default when that is unset.
    pub fn from_env() -> Self {
        let base_url = resolve_base_url(std::env::var(BACKEND_URL_ENV).ok());
        Self::default().base_url(&base_url)
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout. Unset by default: requests wait indefinitely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<FreedaiyClient, SdkError> {
        tracing::debug!(base_url = %self.base_url, timeout = ?self.timeout, "Building FreeDAIY client");
        Ok(FreedaiyClient {
            http: FreedaiyHttp::with_timeout(&self.base_url, self.timeout)?,
        })
    }
}
