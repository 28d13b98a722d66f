use crate::domain::schemas::api;
use crate::shared::icons::icon;
use crate::shared::project::ProjectContext;
use contracts::database::DatabaseSchema;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Dropdown picker for the database schema the list view is scoped to.
///
/// Loads the schema list once on mount. Load failures are swallowed unless
/// `show_error` is set; the picker then degrades to showing only the
/// currently selected name.
#[component]
#[allow(non_snake_case)]
pub fn SchemaSelector(
    /// Currently selected schema name
    #[prop(into)]
    selected_schema_name: Signal<String>,
    /// Emits the schema name chosen in the dropdown
    on_select_schema: Callback<String>,
    /// Render load failures inside the dropdown
    #[prop(optional)]
    show_error: bool,
    /// Size modifier appended to the trigger class, e.g. "small"
    #[prop(optional, into)]
    size: String,
    /// Fixed width, e.g. "260px"
    #[prop(optional, into)]
    width: String,
) -> impl IntoView {
    let project = use_context::<ProjectContext>().expect("ProjectContext not found in context");

    let (schemas, set_schemas) = signal(Vec::<DatabaseSchema>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let is_open = RwSignal::new(false);

    Effect::new(move |_| {
        let project = project.clone();
        spawn_local(async move {
            let Some(project_ref) = project.project_ref else {
                // No project identity yet; keep the picker empty.
                set_loading.set(false);
                return;
            };
            match api::list_schemas(&project_ref, project.connection_string.as_deref()).await {
                Ok(list) => {
                    set_schemas.set(list);
                    set_loading.set(false);
                }
                Err(e) => {
                    log!("Failed to load schemas: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    let trigger_class = if size.is_empty() {
        "schema-selector__trigger button button--secondary".to_string()
    } else {
        format!(
            "schema-selector__trigger button button--secondary button--{}",
            size
        )
    };
    let style = if width.is_empty() {
        String::new()
    } else {
        format!("width: {};", width)
    };

    view! {
        <div class="schema-selector" style=style>
            <button class=trigger_class on:click=move |_| is_open.update(|v| *v = !*v)>
                {icon("database")}
                <span class="schema-selector__label">
                    "schema: " {move || selected_schema_name.get()}
                </span>
                {icon("chevron-down")}
            </button>

            <Show when=move || is_open.get()>
                <div class="schema-selector__menu">
                    <Show when=move || loading.get()>
                        <div class="schema-selector__hint">"Loading schemas..."</div>
                    </Show>
                    {move || {
                        if show_error {
                            error.get().map(|e| view! {
                                <div class="schema-selector__hint schema-selector__hint--error">
                                    "Failed to load schemas: " {e}
                                </div>
                            })
                        } else {
                            None
                        }
                    }}
                    <For
                        each=move || schemas.get()
                        key=|schema| schema.id
                        children=move |schema: DatabaseSchema| {
                            let name = schema.name.clone();
                            let display = schema.name.clone();
                            let is_selected =
                                move || selected_schema_name.get() == schema.name;
                            view! {
                                <button
                                    class="schema-selector__item"
                                    class:selected=is_selected
                                    on:click=move |_| {
                                        is_open.set(false);
                                        on_select_schema.run(name.clone());
                                    }
                                >
                                    {display}
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
