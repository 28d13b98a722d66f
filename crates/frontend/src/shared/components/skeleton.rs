use leptos::prelude::*;

/// Shimmering placeholder shown while a query is still loading.
#[component]
pub fn SkeletonLoader() -> impl IntoView {
    view! {
        <div class="skeleton-loader">
            <div class="skeleton skeleton--title"></div>
            <div class="skeleton skeleton--row"></div>
            <div class="skeleton skeleton--row"></div>
            <div class="skeleton skeleton--row"></div>
        </div>
    }
}
