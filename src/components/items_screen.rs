//! Items Screen Component
//!
//! Owns the authoritative item list: one fetch on mount, optimistic removal
//! on a confirmed swipe, then the DELETE request fire-and-forget.

use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_swipedelete::{bind_global_mouseup, create_swipe_signals};

use crate::api;
use crate::components::{LoadingIndicator, SwipeRow};
use crate::items::{remove_item, restore_item, DeletePolicy};
use crate::models::Item;

/// The items list screen
#[component]
pub fn ItemsScreen(#[prop(optional)] delete_policy: DeletePolicy) -> impl IntoView {
    let (items, set_items) = signal(Vec::<Item>::new());
    let (loading, set_loading) = signal(true);

    // Load items on mount; loading flips true -> false exactly once,
    // whatever the outcome. A failed fetch renders an empty list.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_items().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[ITEMS] Loaded {} items", loaded.len()).into());
                    set_items.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[ITEMS] Error fetching items: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    });

    // Swipe state shared by all rows; one global mouseup dispatcher resolves
    // whichever row owns the gesture. Remove first, then ask the server.
    let swipe = create_swipe_signals();
    bind_global_mouseup(swipe, move |id: u32| {
        let mut removed: Option<(usize, Item)> = None;
        set_items.update(|list| removed = remove_item(list, id));
        if removed.is_none() {
            return;
        }
        spawn_local(async move {
            if let Err(e) = api::delete_item(id).await {
                web_sys::console::error_1(&format!("[ITEMS] Error deleting item {}: {}", id, e).into());
                if delete_policy == DeletePolicy::RestoreOnError {
                    if let Some((index, item)) = removed {
                        set_items.update(|list| restore_item(list, index, item));
                    }
                }
            }
        });
    });

    view! {
        <Show when=move || loading.get()>
            <LoadingIndicator />
        </Show>
        <Show when=move || !loading.get()>
            <div class="items-table">
                <h1 class="items-title">"Items List"</h1>
                <div class="items-table-body">
                    <div class="items-header-row">
                        <span class="header-cell">"What"</span>
                        <span class="header-cell">"When"</span>
                    </div>
                    <For
                        each=move || items.get()
                        key=|item| item.id
                        children=move |item| {
                            view! { <SwipeRow item=item swipe=swipe /> }
                        }
                    />
                </div>
                <p class="item-count">{move || format!("{} items", items.get().len())}</p>
            </div>
        </Show>
    }
}
