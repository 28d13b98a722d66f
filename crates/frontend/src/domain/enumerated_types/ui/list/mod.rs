pub mod state;

use self::state::{create_state, filter_enumerated_types};
use super::create::CreateEnumeratedTypePanel;
use super::delete::DeleteEnumeratedTypeModal;
use super::edit::EditEnumeratedTypePanel;
use crate::domain::enumerated_types::query::{EnumeratedTypesQuery, QuerySnapshot};
use crate::domain::schemas::ui::picker::SchemaSelector;
use crate::shared::components::alert_error::AlertError;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::skeleton::SkeletonLoader;
use crate::shared::icons::icon;
use crate::shared::project::ProjectContext;
use contracts::database::EnumeratedType;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Flex, FlexAlign, FlexJustify, Space};

/// List view for the database's user-defined enumerated types.
///
/// Owns schema scoping, the name filter, and the selection state that
/// launches the create/edit/delete workflows. The data source is the shared
/// query handle; mutations happen inside the workflow panels and come back
/// to this view only through a re-emitted snapshot.
#[component]
#[allow(non_snake_case)]
pub fn EnumeratedTypesList() -> impl IntoView {
    let project = use_context::<ProjectContext>().expect("ProjectContext not found in context");
    let query = use_context::<EnumeratedTypesQuery>()
        .expect("EnumeratedTypesQuery not found in context");
    let state = create_state();

    // Kick off the initial fetch with the ambient project identity.
    {
        let project = project.clone();
        Effect::new(move |_| query.fetch(&project));
    }

    let search = Signal::derive(move || state.with(|s| s.search.clone()));
    let selected_schema = Signal::derive(move || state.with(|s| s.selected_schema.clone()));

    let rows = Signal::derive(move || {
        let snapshot = query.snapshot();
        state.with(|s| filter_enumerated_types(snapshot.items(), &s.selected_schema, &s.search))
    });

    let on_select_schema =
        Callback::new(move |schema: String| state.update(|s| s.select_schema(schema)));
    let on_search = Callback::new(move |value: String| state.update(|s| s.set_search(value)));
    let on_edit = Callback::new(move |ty: EnumeratedType| state.update(|s| s.select_for_edit(ty)));
    let on_delete =
        Callback::new(move |ty: EnumeratedType| state.update(|s| s.select_for_delete(ty)));

    view! {
        <div class="enumerated-types">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Space>
                    <SchemaSelector
                        selected_schema_name=selected_schema
                        on_select_schema=on_select_schema
                        size="small"
                        width="260px"
                    />
                    <SearchInput
                        value=search
                        on_change=on_search
                        placeholder="Search for a type"
                        width="250px"
                    />
                </Space>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| state.update(|s| s.open_create_panel())
                >
                    "Create type"
                </Button>
            </Flex>

            {move || match query.snapshot() {
                QuerySnapshot::Loading => view! { <SkeletonLoader /> }.into_any(),
                QuerySnapshot::Error(error) => view! {
                    <AlertError
                        subject="Failed to retrieve database enumerated types"
                        error=error
                    />
                }.into_any(),
                QuerySnapshot::Success(_) => view! {
                    <EnumeratedTypesTable
                        rows=rows
                        search=search
                        selected_schema=selected_schema
                        on_edit=on_edit
                        on_delete=on_delete
                    />
                }.into_any(),
            }}

            <CreateEnumeratedTypePanel
                visible=Signal::derive(move || state.with(|s| s.show_create_panel))
                schema=selected_schema
                on_close=Callback::new(move |_| state.update(|s| s.close_create_panel()))
            />
            <EditEnumeratedTypePanel
                selected=Signal::derive(move || state.with(|s| s.type_to_edit.clone()))
                on_close=Callback::new(move |_| state.update(|s| s.clear_edit()))
            />
            <DeleteEnumeratedTypeModal
                selected=Signal::derive(move || state.with(|s| s.type_to_delete.clone()))
                on_close=Callback::new(move |_| state.update(|s| s.clear_delete()))
            />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn EnumeratedTypesTable(
    rows: Signal<Vec<EnumeratedType>>,
    search: Signal<String>,
    selected_schema: Signal<String>,
    on_edit: Callback<EnumeratedType>,
    on_delete: Callback<EnumeratedType>,
) -> impl IntoView {
    view! {
        <div class="table-container" style="margin-top: 16px;">
            <table class="table__data table--striped">
                <thead>
                    <tr>
                        <th style="width: 120px;">"Schema"</th>
                        <th>"Name"</th>
                        <th>"Values"</th>
                        <th style="width: 56px;"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let items = rows.get();
                        if items.is_empty() {
                            if search.get().is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="4" class="table__empty">
                                            <p class="table__empty-title">
                                                "No enumerated types created yet"
                                            </p>
                                            <p class="table__empty-subtext">
                                                {format!(
                                                    "There are no enumerated types found in the schema \"{}\"",
                                                    selected_schema.get()
                                                )}
                                            </p>
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                view! {
                                    <tr>
                                        <td colspan="4" class="table__empty">
                                            <p class="table__empty-title">"No results found"</p>
                                            <p class="table__empty-subtext">
                                                {format!(
                                                    "Your search for \"{}\" did not return any results",
                                                    search.get()
                                                )}
                                            </p>
                                        </td>
                                    </tr>
                                }.into_any()
                            }
                        } else {
                            view! {
                                <For
                                    each=move || rows.get()
                                    key=|ty| ty.id
                                    children=move |ty: EnumeratedType| view! {
                                        <EnumeratedTypeRow ty=ty on_edit=on_edit on_delete=on_delete />
                                    }
                                />
                            }.into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn EnumeratedTypeRow(
    ty: EnumeratedType,
    on_edit: Callback<EnumeratedType>,
    on_delete: Callback<EnumeratedType>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let record = StoredValue::new(ty.clone());
    let values = ty.enums.join(", ");

    view! {
        <tr>
            <td class="cell-truncate" style="width: 120px; max-width: 120px;">{ty.schema}</td>
            <td>{ty.name}</td>
            <td>{values}</td>
            <td>
                <div class="row-actions" style="display: flex; justify-content: flex-end;">
                    <button
                        class="button button--icon"
                        title="Type actions"
                        on:click=move |_| is_open.update(|v| *v = !*v)
                    >
                        {icon("more-vertical")}
                    </button>
                    <Show when=move || is_open.get()>
                        <div class="row-actions__menu">
                            <button
                                class="row-actions__item"
                                on:click=move |_| {
                                    is_open.set(false);
                                    on_edit.run(record.get_value());
                                }
                            >
                                {icon("edit")}
                                " Update type"
                            </button>
                            <button
                                class="row-actions__item row-actions__item--danger"
                                on:click=move |_| {
                                    is_open.set(false);
                                    on_delete.run(record.get_value());
                                }
                            >
                                {icon("trash")}
                                " Delete type"
                            </button>
                        </div>
                    </Show>
                </div>
            </td>
        </tr>
    }
}
