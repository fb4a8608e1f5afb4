//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Records exchanged with the backend, plus form-level rules
//! - `client.rs` — Sub-client with HTTP methods
//!
//! Records are wire-shaped: the backend owns them and the SDK returns them
//! exactly as decoded.

pub mod content;
pub mod lead;
pub mod post;
pub mod product;
pub mod resource;
pub mod subscription;
