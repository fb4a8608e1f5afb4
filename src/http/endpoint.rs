//! The backend's endpoint table.

use reqwest::Method;

/// One backend operation: method, path, and the message it fails with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Subscribe,
    Leads,
    Posts,
    Products,
    Resources,
}

impl Endpoint {
    pub const ALL: [Endpoint; 5] = [
        Endpoint::Subscribe,
        Endpoint::Leads,
        Endpoint::Posts,
        Endpoint::Products,
        Endpoint::Resources,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Subscribe => "/subscribe",
            Endpoint::Leads => "/leads",
            Endpoint::Posts => "/posts",
            Endpoint::Products => "/products",
            Endpoint::Resources => "/resources",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::Subscribe | Endpoint::Leads => Method::POST,
            Endpoint::Posts | Endpoint::Products | Endpoint::Resources => Method::GET,
        }
    }

    /// Message carried by `HttpError` when this operation fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Endpoint::Subscribe => "Subscription failed",
            Endpoint::Leads => "Lead submission failed",
            Endpoint::Posts => "Failed to load posts",
            Endpoint::Products => "Failed to load products",
            Endpoint::Resources => "Failed to load resources",
        }
    }
}
