use crate::domain::enumerated_types::query::EnumeratedTypesQuery;
use crate::domain::enumerated_types::ui::list::EnumeratedTypesList;
use crate::shared::project::ProjectContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The project identity comes from the page URL and never changes while
    // the view is mounted.
    provide_context(ProjectContext::from_location());

    // Provide the enumerated-types query handle for the list view and the
    // workflow panels.
    provide_context(EnumeratedTypesQuery::new());

    view! {
        <main class="page">
            <EnumeratedTypesList />
        </main>
    }
}
