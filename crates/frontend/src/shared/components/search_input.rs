use crate::shared::icons::icon;
use leptos::prelude::*;

/// Text filter input with a search icon slot and a clear button.
///
/// Fully controlled: the caller owns the value and receives every change
/// through `on_change`.
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Callback for every value change
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
    /// Input width, e.g. "250px"
    #[prop(optional, into)]
    width: String,
) -> impl IntoView {
    let style = if width.is_empty() {
        String::new()
    } else {
        format!("width: {};", width)
    };

    view! {
        <div class="search-input" style=style>
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Clear search"
                    on:click=move |_| on_change.run(String::new())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
