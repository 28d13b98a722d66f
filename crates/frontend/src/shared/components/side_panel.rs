use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Right-anchored sliding panel for create/edit workflows.
///
/// Mounted permanently by the owning view; `visible` drives whether the
/// overlay and panel render. Closing is a plain state reset on the caller's
/// side, so the panel never owns the flag itself.
#[component]
pub fn SidePanel(
    /// Panel title
    #[prop(into)]
    title: Signal<String>,
    /// Whether the panel is shown
    #[prop(into)]
    visible: Signal<bool>,
    /// Callback when the panel should close
    on_close: Callback<()>,
    /// Panel content
    children: ChildrenFn,
) -> impl IntoView {
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <Show when=move || visible.get()>
            <div class="side-panel-overlay" on:click=move |_| on_close.run(())>
                <aside class="side-panel" on:click=stop_propagation>
                    <div class="side-panel__header">
                        <h3 class="side-panel__title">{move || title.get()}</h3>
                        <button class="button button--icon" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                    </div>
                    <div class="side-panel__body">{children()}</div>
                </aside>
            </div>
        </Show>
    }
}
