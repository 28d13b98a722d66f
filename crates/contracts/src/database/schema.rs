use serde::{Deserialize, Serialize};

/// Summary of a database schema, as listed by the management API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSchema {
    pub id: i64,
    pub name: String,
}

/// Envelope for the schema list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSchemasResponse {
    pub schemas: Vec<DatabaseSchema>,
}
