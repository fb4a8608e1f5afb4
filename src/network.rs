//! Network URL constants for the FreeDAIY SDK.

/// Default REST API base URL (a locally running backend).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable consulted by `FreedaiyClientBuilder::from_env`.
pub const BACKEND_URL_ENV: &str = "FREEDAIY_BACKEND_URL";

/// Resolve the base URL from an optional environment value.
///
/// Unset and blank values fall back to [`DEFAULT_API_URL`].
pub fn resolve_base_url(env_value: Option<String>) -> String {
    match env_value {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}
