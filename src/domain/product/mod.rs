//! Product domain — digital products and templates.

#[cfg(feature = "http")]
pub mod client;
pub mod filter;

use crate::shared::ItemId;
use serde::{Deserialize, Serialize};

pub use filter::ProductFilter;

/// A product card from `GET /products`.
///
/// Fields the backend sends beyond the named ones are kept in `extra` and
/// re-encoded unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ItemId,
    pub title: String,
    /// Category label, e.g. `"CRM"`. Matched by [`ProductFilter`].
    pub tag: String,
    /// Audience level, e.g. `"Starter"`.
    pub level: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
