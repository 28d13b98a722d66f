//! Query handle for the enumerated-types data source.
//!
//! The handle is a context service in the shape the rest of the app uses:
//! a `Copy` struct around an `RwSignal`, provided at the app root. The view
//! treats it as a subscription; every `fetch` re-emits a snapshot and the
//! subscribers re-project.

use super::api;
use crate::shared::project::ProjectContext;
use contracts::database::EnumeratedType;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Latest value emitted by the data source.
#[derive(Clone, Debug, PartialEq)]
pub enum QuerySnapshot {
    Loading,
    Error(String),
    Success(Vec<EnumeratedType>),
}

impl QuerySnapshot {
    /// Items of a successful snapshot; `None` while loading or failed.
    pub fn items(&self) -> Option<&[EnumeratedType]> {
        match self {
            QuerySnapshot::Success(items) => Some(items),
            _ => None,
        }
    }
}

/// Shared handle to the enumerated-types query.
#[derive(Clone, Copy)]
pub struct EnumeratedTypesQuery {
    snapshot: RwSignal<QuerySnapshot>,
}

impl EnumeratedTypesQuery {
    pub fn new() -> Self {
        Self {
            snapshot: RwSignal::new(QuerySnapshot::Loading),
        }
    }

    /// Reactive read of the latest snapshot.
    pub fn snapshot(&self) -> QuerySnapshot {
        self.snapshot.get()
    }

    /// Start (or restart) a fetch for the given project identity.
    ///
    /// Without a project ref the source stays in `loading` and no request
    /// is issued; the view keeps rendering the skeleton until an identity
    /// arrives with a remount.
    pub fn fetch(&self, project: &ProjectContext) {
        let Some(project_ref) = project.project_ref.clone() else {
            return;
        };
        let connection_string = project.connection_string.clone();
        let snapshot = self.snapshot;
        snapshot.set(QuerySnapshot::Loading);
        spawn_local(async move {
            match api::list_enumerated_types(&project_ref, connection_string.as_deref()).await {
                Ok(types) => snapshot.set(QuerySnapshot::Success(types)),
                Err(e) => {
                    log!("Failed to load enumerated types: {}", e);
                    snapshot.set(QuerySnapshot::Error(e));
                }
            }
        });
    }
}

impl Default for EnumeratedTypesQuery {
    fn default() -> Self {
        Self::new()
    }
}
