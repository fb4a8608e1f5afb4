//! # FreeDAIY SDK
//!
//! A typed Rust client for the FreeDAIY site backend: newsletter sign-ups,
//! lead capture, and the content shown on the landing page. Works on native
//! and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain records, errors (always available, WASM-safe)
//! 2. **HTTP API** — `FreedaiyHttp`, one request per call, no retries
//! 3. **High-Level Client** — `FreedaiyClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use freedaiy_sdk::prelude::*;
//!
//! let client = FreedaiyClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! client.subscriptions().subscribe("a@example.com").await?;
//! let products = client.products().list_filtered(ProductFilter::Crm).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and form helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): records, form rules, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client and endpoint table.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `FreedaiyClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{ItemId, SubmissionStatus};

    // Domain types
    pub use crate::domain::content::LandingContent;
    pub use crate::domain::lead::LeadRequest;
    pub use crate::domain::post::Post;
    pub use crate::domain::product::{Product, ProductFilter};
    pub use crate::domain::resource::Resource;
    pub use crate::domain::subscription::SubscriptionRequest;

    // Errors
    pub use crate::error::{FailureCause, HttpError, SdkError};

    // Network
    pub use crate::network::{BACKEND_URL_ENV, DEFAULT_API_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        ContentClient, FreedaiyClient, FreedaiyClientBuilder, LeadsClient, PostsClient,
        ProductsClient, ResourcesClient, SubscriptionsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{Endpoint, FreedaiyHttp};
}
