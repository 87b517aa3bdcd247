//! My Items Frontend App
//!
//! Single screen: a navigation-style header over the items list.

use leptos::prelude::*;

use crate::components::{ItemsScreen, ScreenHeader};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-layout">
            <ScreenHeader title="My Items" />
            <ItemsScreen />
        </div>
    }
}
