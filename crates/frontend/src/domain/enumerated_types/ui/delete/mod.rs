use crate::domain::enumerated_types::api;
use crate::domain::enumerated_types::query::EnumeratedTypesQuery;
use crate::shared::modal::Modal;
use crate::shared::project::ProjectContext;
use contracts::database::EnumeratedType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

/// Confirmation modal for dropping an enumerated type.
///
/// Open while the list view holds a record marked for delete. The drop
/// itself is delegated to the management API; failures stay inside the
/// modal.
#[component]
#[allow(non_snake_case)]
pub fn DeleteEnumeratedTypeModal(
    /// Record marked for delete; the modal is open while this is `Some`
    #[prop(into)]
    selected: Signal<Option<EnumeratedType>>,
    /// Callback when the modal should close
    on_close: Callback<()>,
) -> impl IntoView {
    let project = use_context::<ProjectContext>().expect("ProjectContext not found in context");
    let query = use_context::<EnumeratedTypesQuery>()
        .expect("EnumeratedTypesQuery not found in context");

    let deleting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Drop stale errors when a new record is marked.
    Effect::new(move |_| {
        if selected.get().is_some() {
            error.set(None);
        }
    });

    let confirm = Callback::new(move |_: ()| {
        let Some(ty) = selected.get_untracked() else {
            return;
        };
        let Some(project_ref) = project.project_ref.clone() else {
            error.set(Some("No project selected".to_string()));
            return;
        };
        let connection_string = project.connection_string.clone();
        deleting.set(true);
        error.set(None);
        let project = project.clone();
        spawn_local(async move {
            match api::delete_enumerated_type(&project_ref, connection_string.as_deref(), ty.id)
                .await
            {
                Ok(()) => {
                    deleting.set(false);
                    query.fetch(&project);
                    on_close.run(());
                }
                Err(e) => {
                    deleting.set(false);
                    error.set(Some(e));
                }
            }
        });
    });

    view! {
        <Show when=move || selected.get().is_some()>
            <Modal title="Confirm to delete" on_close=on_close>
                <p class="modal-text">
                    {move || {
                        selected.get().map(|ty| format!(
                            "Are you sure you want to delete the type \"{}\"? This action cannot be undone.",
                            ty.name
                        ))
                    }}
                </p>

                {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}

                <div class="form-actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || deleting.get())
                        on_click=move |_| confirm.run(())
                    >
                        "Delete type"
                    </Button>
                </div>
            </Modal>
        </Show>
    }
}
