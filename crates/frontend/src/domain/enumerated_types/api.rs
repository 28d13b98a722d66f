//! API client for the database enumerated-type endpoints.
//!
//! All mutations are delegated to the management API; this module never
//! builds DDL itself.

use crate::shared::api_utils::api_url;
use contracts::database::{
    CreateEnumeratedTypeRequest, EnumeratedType, ListEnumeratedTypesResponse,
    UpdateEnumeratedTypeRequest,
};
use gloo_net::http::{Request, RequestBuilder};

fn types_url(project_ref: &str) -> String {
    api_url(&format!(
        "/api/projects/{}/database/enumerated-types",
        urlencoding::encode(project_ref)
    ))
}

fn with_connection(
    request: RequestBuilder,
    connection_string: Option<&str>,
) -> RequestBuilder {
    match connection_string {
        Some(connection_string) => request.header("x-connection-string", connection_string),
        None => request,
    }
}

/// List every enumerated type of the project's database, all schemas
/// included. Schema scoping happens client-side in the list view.
pub async fn list_enumerated_types(
    project_ref: &str,
    connection_string: Option<&str>,
) -> Result<Vec<EnumeratedType>, String> {
    let request = with_connection(Request::get(&types_url(project_ref)), connection_string);
    let response = request.send().await.map_err(|e| e.to_string())?;
    if response.status() != 200 {
        return Err(format!("Server error: {}", response.status()));
    }
    let text = response.text().await.map_err(|e| e.to_string())?;
    serde_json::from_str::<ListEnumeratedTypesResponse>(&text)
        .map(|r| r.types)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a new enumerated type.
pub async fn create_enumerated_type(
    project_ref: &str,
    connection_string: Option<&str>,
    request: &CreateEnumeratedTypeRequest,
) -> Result<(), String> {
    let response = with_connection(Request::post(&types_url(project_ref)), connection_string)
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }
    Ok(())
}

/// Replace name, labels, and comment of an existing enumerated type.
pub async fn update_enumerated_type(
    project_ref: &str,
    connection_string: Option<&str>,
    request: &UpdateEnumeratedTypeRequest,
) -> Result<(), String> {
    let url = format!("{}/{}", types_url(project_ref), request.id);
    let response = with_connection(Request::patch(&url), connection_string)
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }
    Ok(())
}

/// Drop an enumerated type by its catalog id.
pub async fn delete_enumerated_type(
    project_ref: &str,
    connection_string: Option<&str>,
    id: i64,
) -> Result<(), String> {
    let url = format!("{}/{}", types_url(project_ref), id);
    let response = with_connection(Request::delete(&url), connection_string)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }
    Ok(())
}
