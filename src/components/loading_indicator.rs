//! Loading Indicator Component

use leptos::prelude::*;

/// Centered spinner shown while the initial fetch is in flight
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="loading-spinner"></div>
        </div>
    }
}
