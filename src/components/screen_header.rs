//! Screen Header Component
//!
//! Navigation-bar style header with a centered title.

use leptos::prelude::*;

/// Blue header bar with a bold white title
#[component]
pub fn ScreenHeader(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <header class="screen-header">
            <span class="screen-header-title">{title}</span>
        </header>
    }
}
