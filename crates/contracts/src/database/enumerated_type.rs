use serde::{Deserialize, Serialize};

/// A user-defined enumerated type as reported by the database catalog.
///
/// The record is read-only on the frontend: `enums` keeps the declaration
/// order of the labels, and duplicates (which the catalog should never
/// produce) are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumeratedType {
    /// Catalog oid, stable for the lifetime of the type.
    pub id: i64,
    /// Schema the type is declared in.
    pub schema: String,
    /// Type name.
    pub name: String,
    /// Labels in declaration order.
    pub enums: Vec<String>,
    /// Catalog comment, if one was set.
    #[serde(default)]
    pub comment: Option<String>,
}

/// Envelope for the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnumeratedTypesResponse {
    pub types: Vec<EnumeratedType>,
}

/// Payload for creating a new enumerated type.
///
/// Label contents are not validated here; the management API owns the DDL
/// and its constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEnumeratedTypeRequest {
    pub schema: String,
    pub name: String,
    pub labels: Vec<String>,
    pub comment: Option<String>,
}

/// Payload for updating an existing enumerated type.
///
/// `labels` is the full desired label list; the management API diffs it
/// against the catalog state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEnumeratedTypeRequest {
    pub id: i64,
    pub name: String,
    pub labels: Vec<String>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_record() {
        let json = r#"{"id":16712,"schema":"public","name":"mood","enums":["sad","ok","happy"],"comment":"user mood"}"#;
        let t: EnumeratedType = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, 16712);
        assert_eq!(t.schema, "public");
        assert_eq!(t.name, "mood");
        assert_eq!(t.enums, vec!["sad", "ok", "happy"]);
        assert_eq!(t.comment.as_deref(), Some("user mood"));
    }

    #[test]
    fn comment_is_optional_on_the_wire() {
        let json = r#"{"id":1,"schema":"public","name":"mood","enums":[]}"#;
        let t: EnumeratedType = serde_json::from_str(json).unwrap();
        assert_eq!(t.comment, None);

        let json = r#"{"id":1,"schema":"public","name":"mood","enums":[],"comment":null}"#;
        let t: EnumeratedType = serde_json::from_str(json).unwrap();
        assert_eq!(t.comment, None);
    }

    #[test]
    fn duplicate_labels_survive_deserialization() {
        let json = r#"{"id":2,"schema":"public","name":"status","enums":["on","off","on"]}"#;
        let t: EnumeratedType = serde_json::from_str(json).unwrap();
        assert_eq!(t.enums, vec!["on", "off", "on"]);
    }
}
