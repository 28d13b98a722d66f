//! Ambient project identity used by every management-API call.
//!
//! The studio is opened with the target project encoded in the page URL,
//! e.g. `/?ref=acme-prod&connection=postgres%3A%2F%2F...`. The context is
//! parsed once at mount and provided to the whole app via Leptos context.

use serde::Deserialize;

/// Identity of the database project this view operates on.
///
/// Both fields may be absent; callers that need them are expected to stay
/// in their loading state rather than error out (the data source contract).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectContext {
    pub project_ref: Option<String>,
    pub connection_string: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProjectQuery {
    #[serde(rename = "ref")]
    project_ref: Option<String>,
    #[serde(rename = "connection")]
    connection_string: Option<String>,
}

impl ProjectContext {
    /// Parse the project identity from the current window location.
    pub fn from_location() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = window.location().search().unwrap_or_default();
        Self::from_query(raw.trim_start_matches('?'))
    }

    /// Parse the project identity from a raw query string (no leading `?`).
    ///
    /// Unknown parameters are ignored; a malformed query yields an empty
    /// context, which the data source treats as "no project yet".
    pub fn from_query(query: &str) -> Self {
        match serde_qs::from_str::<ProjectQuery>(query) {
            Ok(q) => Self {
                project_ref: q.project_ref.filter(|r| !r.is_empty()),
                connection_string: q.connection_string.filter(|c| !c.is_empty()),
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ref_and_connection() {
        let ctx = ProjectContext::from_query("ref=acme-prod&connection=postgres%3A%2F%2Fdb");
        assert_eq!(ctx.project_ref.as_deref(), Some("acme-prod"));
        assert_eq!(ctx.connection_string.as_deref(), Some("postgres://db"));
    }

    #[test]
    fn missing_parameters_stay_absent() {
        let ctx = ProjectContext::from_query("ref=acme-prod");
        assert_eq!(ctx.project_ref.as_deref(), Some("acme-prod"));
        assert_eq!(ctx.connection_string, None);

        let ctx = ProjectContext::from_query("");
        assert_eq!(ctx, ProjectContext::default());
    }

    #[test]
    fn empty_values_count_as_absent() {
        let ctx = ProjectContext::from_query("ref=&connection=");
        assert_eq!(ctx, ProjectContext::default());
    }
}
