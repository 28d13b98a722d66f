use contracts::database::EnumeratedType;
use leptos::prelude::*;

/// View-local state of the enumerated-types list.
///
/// `type_to_edit` and `type_to_delete` are independent selections: both may
/// be absent, each holds at most one record, and asserting one never
/// touches the other. Every field is cleared only by its own close
/// callback.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumeratedTypesListState {
    pub search: String,
    pub selected_schema: String,
    pub show_create_panel: bool,
    pub type_to_edit: Option<EnumeratedType>,
    pub type_to_delete: Option<EnumeratedType>,
}

impl Default for EnumeratedTypesListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            selected_schema: "public".to_string(),
            show_create_panel: false,
            type_to_edit: None,
            type_to_delete: None,
        }
    }
}

impl EnumeratedTypesListState {
    /// Schema picker change. The search filter deliberately survives.
    pub fn select_schema(&mut self, schema: String) {
        self.selected_schema = schema;
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
    }

    pub fn open_create_panel(&mut self) {
        self.show_create_panel = true;
    }

    pub fn close_create_panel(&mut self) {
        self.show_create_panel = false;
    }

    pub fn select_for_edit(&mut self, ty: EnumeratedType) {
        self.type_to_edit = Some(ty);
    }

    pub fn clear_edit(&mut self) {
        self.type_to_edit = None;
    }

    pub fn select_for_delete(&mut self, ty: EnumeratedType) {
        self.type_to_delete = Some(ty);
    }

    pub fn clear_delete(&mut self) {
        self.type_to_delete = None;
    }
}

pub fn create_state() -> RwSignal<EnumeratedTypesListState> {
    RwSignal::new(EnumeratedTypesListState::default())
}

/// Project the data-source items onto the rows the table shows.
///
/// Keeps items whose schema equals `selected_schema` exactly and, when
/// `search` is non-empty, whose name contains it case-insensitively.
/// Original order is preserved; nothing is deduplicated, sorted, or
/// truncated. Absent items project to an empty sequence.
pub fn filter_enumerated_types(
    items: Option<&[EnumeratedType]>,
    selected_schema: &str,
    search: &str,
) -> Vec<EnumeratedType> {
    let search_lower = search.to_lowercase();
    items
        .unwrap_or(&[])
        .iter()
        .filter(|ty| ty.schema == selected_schema)
        .filter(|ty| search.is_empty() || ty.name.to_lowercase().contains(&search_lower))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(id: i64, schema: &str, name: &str, enums: &[&str]) -> EnumeratedType {
        EnumeratedType {
            id,
            schema: schema.to_string(),
            name: name.to_string(),
            enums: enums.iter().map(|s| s.to_string()).collect(),
            comment: None,
        }
    }

    fn sample() -> Vec<EnumeratedType> {
        vec![
            ty(1, "public", "mood", &["sad", "ok"]),
            ty(2, "private", "mood", &["x"]),
        ]
    }

    #[test]
    fn absent_items_project_to_empty() {
        assert!(filter_enumerated_types(None, "public", "").is_empty());
    }

    #[test]
    fn filters_by_schema_exactly() {
        let items = sample();
        let rows = filter_enumerated_types(Some(&items), "public", "");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].schema, "public");
        assert_eq!(rows[0].enums, vec!["sad", "ok"]);

        // Schema comparison is case-sensitive.
        assert!(filter_enumerated_types(Some(&items), "Public", "").is_empty());
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let items = sample();
        let rows = filter_enumerated_types(Some(&items), "public", "MO");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
    }

    #[test]
    fn search_without_match_projects_to_empty() {
        let items = sample();
        assert!(filter_enumerated_types(Some(&items), "public", "zz").is_empty());
    }

    #[test]
    fn preserves_source_order_as_stable_subsequence() {
        let items = vec![
            ty(10, "public", "order_status", &["new"]),
            ty(11, "audit", "order_status", &["new"]),
            ty(12, "public", "payment_status", &["paid"]),
            ty(13, "public", "shipping_status", &["sent"]),
        ];
        let rows = filter_enumerated_types(Some(&items), "public", "status");
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 12, 13]);
    }

    #[test]
    fn schema_and_search_filters_commute() {
        let items = vec![
            ty(1, "public", "mood", &[]),
            ty(2, "private", "mood", &[]),
            ty(3, "public", "status", &[]),
        ];

        let search_lower = "mo";
        let schema_then_search: Vec<i64> = items
            .iter()
            .filter(|t| t.schema == "public")
            .filter(|t| t.name.to_lowercase().contains(search_lower))
            .map(|t| t.id)
            .collect();
        let search_then_schema: Vec<i64> = items
            .iter()
            .filter(|t| t.name.to_lowercase().contains(search_lower))
            .filter(|t| t.schema == "public")
            .map(|t| t.id)
            .collect();
        let projected: Vec<i64> = filter_enumerated_types(Some(&items), "public", "mo")
            .iter()
            .map(|t| t.id)
            .collect();

        assert_eq!(schema_then_search, search_then_schema);
        assert_eq!(projected, schema_then_search);
    }

    #[test]
    fn duplicates_are_not_deduplicated() {
        let items = vec![
            ty(1, "public", "mood", &["a"]),
            ty(2, "public", "mood", &["a"]),
        ];
        assert_eq!(filter_enumerated_types(Some(&items), "public", "").len(), 2);
    }

    #[test]
    fn initial_state_matches_mount_defaults() {
        let state = EnumeratedTypesListState::default();
        assert_eq!(state.search, "");
        assert_eq!(state.selected_schema, "public");
        assert!(!state.show_create_panel);
        assert_eq!(state.type_to_edit, None);
        assert_eq!(state.type_to_delete, None);
    }

    #[test]
    fn schema_change_keeps_search_and_vice_versa() {
        let mut state = EnumeratedTypesListState::default();
        state.set_search("mo".to_string());
        state.select_schema("audit".to_string());
        assert_eq!(state.search, "mo");
        assert_eq!(state.selected_schema, "audit");

        state.set_search("status".to_string());
        assert_eq!(state.selected_schema, "audit");
    }

    #[test]
    fn open_then_close_restores_pre_open_state() {
        let mut state = EnumeratedTypesListState::default();
        state.set_search("mo".to_string());
        let before = state.clone();

        state.open_create_panel();
        state.close_create_panel();
        assert_eq!(state, before);

        state.select_for_edit(ty(1, "public", "mood", &["sad"]));
        state.clear_edit();
        assert_eq!(state, before);

        state.select_for_delete(ty(1, "public", "mood", &["sad"]));
        state.clear_delete();
        assert_eq!(state, before);
    }

    #[test]
    fn edit_and_delete_selections_are_independent() {
        let mut state = EnumeratedTypesListState::default();
        let mood = ty(1, "public", "mood", &["sad", "ok"]);
        let status = ty(2, "public", "status", &["on"]);

        state.select_for_edit(mood.clone());
        assert_eq!(state.type_to_edit.as_ref(), Some(&mood));
        assert_eq!(state.type_to_delete, None);

        state.select_for_delete(status.clone());
        assert_eq!(state.type_to_edit.as_ref(), Some(&mood));
        assert_eq!(state.type_to_delete.as_ref(), Some(&status));

        state.clear_edit();
        assert_eq!(state.type_to_edit, None);
        assert_eq!(state.type_to_delete.as_ref(), Some(&status));
    }
}
