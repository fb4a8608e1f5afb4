//! Post domain — blog entries shown in the insights section.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::ItemId;
use serde::{Deserialize, Serialize};

/// A blog post preview from `GET /posts`.
///
/// Fields the backend sends beyond the named ones are kept in `extra` and
/// re-encoded unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: ItemId,
    pub title: String,
    pub category: String,
    /// Display string, e.g. `"6 min read"`.
    pub reading_time: String,
    pub preview: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
