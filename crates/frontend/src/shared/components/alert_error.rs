use leptos::prelude::*;

/// Error banner for failed data-source queries.
///
/// Renders a fixed subject line with the raw error payload underneath, so
/// the toolbar above stays usable while the failure is visible.
#[component]
pub fn AlertError(
    /// Short description of what failed
    #[prop(into)]
    subject: String,
    /// Raw error payload from the data source
    #[prop(into)]
    error: String,
) -> impl IntoView {
    view! {
        <div class="alert alert--error">
            <span class="alert__icon">"⚠"</span>
            <div class="alert__content">
                <p class="alert__subject">{subject}</p>
                <p class="alert__message">{error}</p>
            </div>
        </div>
    }
}
