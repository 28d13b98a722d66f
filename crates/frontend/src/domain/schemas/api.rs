//! API client for the database schema endpoints.

use crate::shared::api_utils::api_url;
use contracts::database::{DatabaseSchema, ListSchemasResponse};
use gloo_net::http::Request;

/// List the schemas of the project's database.
pub async fn list_schemas(
    project_ref: &str,
    connection_string: Option<&str>,
) -> Result<Vec<DatabaseSchema>, String> {
    let url = api_url(&format!(
        "/api/projects/{}/database/schemas",
        urlencoding::encode(project_ref)
    ));
    let mut request = Request::get(&url);
    if let Some(connection_string) = connection_string {
        request = request.header("x-connection-string", connection_string);
    }
    let response = request.send().await.map_err(|e| e.to_string())?;
    if response.status() != 200 {
        return Err(format!("Server error: {}", response.status()));
    }
    response
        .json::<ListSchemasResponse>()
        .await
        .map(|r| r.schemas)
        .map_err(|e| e.to_string())
}
