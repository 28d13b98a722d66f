use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Centered modal dialog with a title bar and a close button.
///
/// Clicking the overlay or the close button runs `on_close`; the dialog
/// itself swallows clicks so the overlay handler does not fire.
#[component]
pub fn Modal(
    /// Title shown in the modal header
    #[prop(into)]
    title: String,
    /// Callback when the modal should close
    on_close: Callback<()>,
    /// Modal content
    children: ChildrenFn,
) -> impl IntoView {
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
