//! HTTP client layer — `FreedaiyHttp` and the endpoint table.

pub mod client;
pub mod endpoint;

pub use client::FreedaiyHttp;
pub use endpoint::Endpoint;
