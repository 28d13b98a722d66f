//! Helpers for constructing management-API request URLs.

/// Get the base URL for API requests.
///
/// The studio frontend is served by the same host that exposes the
/// management API, so requests target the current origin. Outside a browser
/// context this returns an empty string, which yields relative URLs.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path.
///
/// # Example
/// ```rust,no_run
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/api/database/schemas");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
