//! Leptos SwipeDelete Utilities
//!
//! Swipe-to-delete for Leptos list rows using mouse events.
//! Uses movement threshold to distinguish swipe from click, a fixed leftward
//! threshold to commit the delete, and fires the delete callback only after
//! the slide-out animation has finished.

mod machine;

pub use machine::{
    ReleaseAction, SwipeMachine, SwipePhase, DELETE_THRESHOLD_PX, DRAG_START_THRESHOLD_PX,
    EXIT_DURATION_MS, EXIT_OFFSET_PX, SNAP_BACK_DURATION_MS,
};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

/// Swipe state signals
///
/// One bundle per list: only one row can own a gesture at a time, so the
/// machine and its mirrors are shared rather than per-row.
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    /// Row that owns the current gesture (set on mousedown, cleared on settle)
    pub row_read: ReadSignal<Option<u32>>,
    pub row_write: WriteSignal<Option<u32>>,
    pub phase_read: ReadSignal<SwipePhase>,
    pub phase_write: WriteSignal<SwipePhase>,
    /// Horizontal offset of the owning row, in pixels (always <= 0)
    pub offset_read: ReadSignal<f64>,
    pub offset_write: WriteSignal<f64>,
    machine: StoredValue<SwipeMachine>,
}

pub fn create_swipe_signals() -> SwipeSignals {
    let (row_read, row_write) = signal(None::<u32>);
    let (phase_read, phase_write) = signal(SwipePhase::Idle);
    let (offset_read, offset_write) = signal(0f64);
    SwipeSignals {
        row_read,
        row_write,
        phase_read,
        phase_write,
        offset_read,
        offset_write,
        machine: StoredValue::new(SwipeMachine::new()),
    }
}

/// CSS transition for the row transform in a given phase. While dragging the
/// transform follows the pointer directly; the two release paths animate.
pub fn transition_for(phase: SwipePhase) -> &'static str {
    match phase {
        SwipePhase::Idle | SwipePhase::Dragging => "none",
        // spring-like overshoot on cancel
        SwipePhase::SnappingBack => "transform 300ms cubic-bezier(0.175, 0.885, 0.32, 1.275)",
        SwipePhase::Confirming => "transform 200ms ease-out",
    }
}

/// Copy the machine's phase and offset into the render signals
fn mirror(swipe: &SwipeSignals) {
    let m = swipe.machine.get_value();
    swipe.phase_write.set(m.phase());
    swipe.offset_write.set(m.offset());
}

/// Clear the gesture entirely (machine reset, no owning row)
fn reset(swipe: &SwipeSignals) {
    swipe.machine.set_value(SwipeMachine::new());
    swipe.row_write.set(None);
    swipe.phase_write.set(SwipePhase::Idle);
    swipe.offset_write.set(0.0);
}

/// Create mousedown handler for swipeable rows
/// Records the gesture origin; the row stays idle until the pointer moves
pub fn make_on_mousedown(swipe: SwipeSignals, row_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        // One gesture at a time; an animating row keeps ownership until it settles
        if swipe.row_read.get_untracked().is_some() {
            return;
        }
        swipe.machine.update_value(|m| {
            *m = SwipeMachine::new();
            m.press(ev.client_x() as f64);
        });
        swipe.row_write.set(Some(row_id));
        mirror(&swipe);
    }
}

/// Create mousemove handler for document - feeds the pointer position into
/// the machine while a row owns the gesture
pub fn bind_global_mousemove(swipe: SwipeSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if swipe.row_read.get_untracked().is_none() {
            return;
        }
        swipe.machine.update_value(|m| m.drag_to(ev.client_x() as f64));
        mirror(&swipe);
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for release classification
///
/// `on_delete` runs exactly once per confirmed swipe, strictly after the
/// slide-out animation window has elapsed.
pub fn bind_global_mouseup<F>(swipe: SwipeSignals, on_delete: F)
where
    F: Fn(u32) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let Some(row_id) = swipe.row_read.get_untracked() else {
            return;
        };
        let mut action = None;
        swipe.machine.update_value(|m| action = m.release());
        mirror(&swipe);

        match action {
            Some(ReleaseAction::Confirm) => {
                // Animation completion as a continuation: notify the parent
                // only after the row has visually left the screen
                let on_delete = on_delete.clone();
                spawn_local(async move {
                    TimeoutFuture::new(EXIT_DURATION_MS).await;
                    on_delete(row_id);
                    reset(&swipe);
                });
            }
            Some(ReleaseAction::SnapBack) => {
                spawn_local(async move {
                    TimeoutFuture::new(SNAP_BACK_DURATION_MS).await;
                    // A confirmed row can't get here; only release a row
                    // that is still springing back
                    if swipe.phase_read.get_untracked() == SwipePhase::SnappingBack {
                        swipe.machine.update_value(|m| m.settle());
                        reset(&swipe);
                    }
                });
            }
            None => {}
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(swipe);
}
