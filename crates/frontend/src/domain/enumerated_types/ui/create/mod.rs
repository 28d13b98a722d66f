use crate::domain::enumerated_types::api;
use crate::domain::enumerated_types::query::EnumeratedTypesQuery;
use crate::shared::components::side_panel::SidePanel;
use crate::shared::icons::icon;
use crate::shared::project::ProjectContext;
use contracts::database::CreateEnumeratedTypeRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

/// Side panel for creating a new enumerated type in the selected schema.
///
/// Owns its own form state; the list view only supplies visibility, the
/// target schema, and the close callback. On success the shared query
/// handle re-emits and the list re-projects.
#[component]
#[allow(non_snake_case)]
pub fn CreateEnumeratedTypePanel(
    /// Whether the panel is shown
    #[prop(into)]
    visible: Signal<bool>,
    /// Schema the new type is created in
    #[prop(into)]
    schema: Signal<String>,
    /// Callback when the panel should close
    on_close: Callback<()>,
) -> impl IntoView {
    let project = use_context::<ProjectContext>().expect("ProjectContext not found in context");
    let query = use_context::<EnumeratedTypesQuery>()
        .expect("EnumeratedTypesQuery not found in context");

    let name = RwSignal::new(String::new());
    let comment = RwSignal::new(String::new());
    let labels = RwSignal::new(vec![String::new()]);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Reset the form every time the panel opens.
    Effect::new(move |_| {
        if visible.get() {
            name.set(String::new());
            comment.set(String::new());
            labels.set(vec![String::new()]);
            error.set(None);
        }
    });

    let submit = Callback::new(move |_: ()| {
        if name.get_untracked().trim().is_empty() {
            error.set(Some("Name is required".to_string()));
            return;
        }
        let Some(project_ref) = project.project_ref.clone() else {
            error.set(Some("No project selected".to_string()));
            return;
        };
        let connection_string = project.connection_string.clone();
        let request = CreateEnumeratedTypeRequest {
            schema: schema.get_untracked(),
            name: name.get_untracked().trim().to_string(),
            labels: labels.get_untracked(),
            comment: Some(comment.get_untracked()).filter(|c| !c.trim().is_empty()),
        };
        saving.set(true);
        error.set(None);
        let project = project.clone();
        spawn_local(async move {
            match api::create_enumerated_type(&project_ref, connection_string.as_deref(), &request)
                .await
            {
                Ok(()) => {
                    saving.set(false);
                    query.fetch(&project);
                    on_close.run(());
                }
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e));
                }
            }
        });
    });

    view! {
        <SidePanel
            title=Signal::derive(|| "Create a new enumerated type".to_string())
            visible=visible
            on_close=on_close
        >
            <div class="details-form">
                <div class="form-group">
                    <label for="create-type-name">"Name"</label>
                    <input
                        type="text"
                        id="create-type-name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        placeholder="type_name"
                    />
                </div>
                <div class="form-group">
                    <label>"Schema"</label>
                    <input type="text" prop:value=move || schema.get() disabled=true />
                </div>
                <div class="form-group">
                    <label for="create-type-comment">"Comment"</label>
                    <textarea
                        id="create-type-comment"
                        prop:value=move || comment.get()
                        on:input=move |ev| comment.set(event_target_value(&ev))
                        placeholder="Optional comment"
                    ></textarea>
                </div>
                <div class="form-group">
                    <label>"Values"</label>
                    {move || labels.get().into_iter().enumerate().map(|(i, label)| view! {
                        <div class="form-row">
                            <input
                                type="text"
                                prop:value=label
                                on:input=move |ev| labels.update(|ls| {
                                    if let Some(slot) = ls.get_mut(i) {
                                        *slot = event_target_value(&ev);
                                    }
                                })
                            />
                            <button
                                class="button button--icon"
                                title="Remove value"
                                on:click=move |_| labels.update(|ls| {
                                    if i < ls.len() {
                                        ls.remove(i);
                                    }
                                })
                            >
                                {icon("trash")}
                            </button>
                        </div>
                    }).collect_view()}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| labels.update(|ls| ls.push(String::new()))
                    >
                        "Add value"
                    </Button>
                </div>

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
                        disabled=Signal::derive(move || saving.get())
                        on_click=move |_| submit.run(())
                    >
                        "Create type"
                    </Button>
                </div>
            </div>
        </SidePanel>
    }
}
