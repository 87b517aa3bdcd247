//! Swipe Row Component
//!
//! One item row: two cells sliding over a delete affordance. The row owns no
//! gesture state itself; it renders whatever offset the shared swipe signals
//! hold while this row owns the gesture.

use leptos::prelude::*;

use leptos_swipedelete::{make_on_mousedown, transition_for, SwipePhase, SwipeSignals};

use crate::models::Item;

/// A single swipeable item row
#[component]
pub fn SwipeRow(item: Item, swipe: SwipeSignals) -> impl IntoView {
    let id = item.id;
    let on_mousedown = make_on_mousedown(swipe, id);

    // Rows not owning the gesture sit at rest
    let content_style = move || {
        let (offset, phase) = if swipe.row_read.get() == Some(id) {
            (swipe.offset_read.get(), swipe.phase_read.get())
        } else {
            (0.0, SwipePhase::Idle)
        };
        format!(
            "transform: translateX({}px); transition: {};",
            offset,
            transition_for(phase)
        )
    };

    view! {
        <div class="swipe-row">
            <div class="swipe-row-backdrop">
                <span class="swipe-row-delete-label">"Delete"</span>
            </div>
            <div class="swipe-row-content" style=content_style on:mousedown=on_mousedown>
                <span class="cell">{item.what.clone()}</span>
                <span class="cell">{item.when.clone()}</span>
            </div>
        </div>
    }
}
