//! Swipe gesture state machine.
//!
//! Pure model of one swipe-to-delete gesture: an explicit phase enum plus a
//! single horizontal offset in pixels. No DOM types here so the transitions
//! can be tested headlessly; the event wiring lives in `lib.rs`.

/// Movement threshold in pixels before a press becomes a drag
pub const DRAG_START_THRESHOLD_PX: f64 = 5.0;

/// Leftward distance in pixels that commits a delete on release
pub const DELETE_THRESHOLD_PX: f64 = 100.0;

/// Terminal offset for a confirmed delete (row fully off-screen)
pub const EXIT_OFFSET_PX: f64 = -300.0;

/// Duration of the slide-out animation
pub const EXIT_DURATION_MS: u32 = 200;

/// Duration of the snap-back spring
pub const SNAP_BACK_DURATION_MS: u32 = 300;

/// Gesture phases
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipePhase {
    /// No active gesture, offset is 0
    #[default]
    Idle,
    /// Offset tracks the pointer
    Dragging,
    /// Released below the threshold, offset animates back to 0
    SnappingBack,
    /// Released past the threshold, offset animates off-screen
    Confirming,
}

/// What a release resolved to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseAction {
    /// Threshold met: slide out, then fire the delete callback
    Confirm,
    /// Threshold not met: spring back to rest
    SnapBack,
}

/// One gesture: phase + offset, driven by press/drag/release.
///
/// Only leftward movement is reflected in the offset; rightward drags clamp
/// to 0. A machine that has confirmed is terminal and must not be reused.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeMachine {
    phase: SwipePhase,
    start_x: f64,
    offset: f64,
}

impl SwipeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    /// Current horizontal displacement from rest. Never positive.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Record the gesture origin. Ignored unless idle.
    pub fn press(&mut self, x: f64) {
        if self.phase == SwipePhase::Idle {
            self.start_x = x;
        }
    }

    /// Track pointer movement. The gesture stays `Idle` until the pointer
    /// has moved more than [`DRAG_START_THRESHOLD_PX`] from the press point,
    /// so taps and vertical scrolls never move the row.
    pub fn drag_to(&mut self, x: f64) {
        let dx = x - self.start_x;
        match self.phase {
            SwipePhase::Idle => {
                if dx.abs() > DRAG_START_THRESHOLD_PX {
                    self.phase = SwipePhase::Dragging;
                    self.offset = dx.min(0.0);
                }
            }
            SwipePhase::Dragging => {
                // Rightward movement is clamped, not mirrored
                self.offset = dx.min(0.0);
            }
            SwipePhase::SnappingBack | SwipePhase::Confirming => {}
        }
    }

    /// End the gesture. Classifies the accumulated leftward distance and
    /// moves the offset to its terminal value. Returns `None` if there is no
    /// live gesture to resolve, so a release can never be classified twice.
    pub fn release(&mut self) -> Option<ReleaseAction> {
        match self.phase {
            SwipePhase::Dragging if self.offset < -DELETE_THRESHOLD_PX => {
                self.phase = SwipePhase::Confirming;
                self.offset = EXIT_OFFSET_PX;
                Some(ReleaseAction::Confirm)
            }
            SwipePhase::Idle | SwipePhase::Dragging => {
                self.phase = SwipePhase::SnappingBack;
                self.offset = 0.0;
                Some(ReleaseAction::SnapBack)
            }
            SwipePhase::SnappingBack | SwipePhase::Confirming => None,
        }
    }

    /// Finish a snap-back: the spring has settled, the row is idle again.
    /// A confirmed machine stays terminal.
    pub fn settle(&mut self) {
        if self.phase == SwipePhase::SnappingBack {
            *self = Self::new();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragged(dxs: &[f64]) -> SwipeMachine {
        let mut m = SwipeMachine::new();
        m.press(0.0);
        for dx in dxs {
            m.drag_to(*dx);
        }
        m
    }

    #[test]
    fn test_tap_does_not_start_drag() {
        let m = dragged(&[-3.0, 2.0]);
        assert_eq!(m.phase(), SwipePhase::Idle);
        assert_eq!(m.offset(), 0.0);
    }

    #[test]
    fn test_leftward_past_activation_starts_drag() {
        let m = dragged(&[-10.0]);
        assert_eq!(m.phase(), SwipePhase::Dragging);
        assert_eq!(m.offset(), -10.0);
    }

    #[test]
    fn test_offset_is_never_positive() {
        let mut m = dragged(&[-40.0]);
        m.drag_to(30.0);
        assert_eq!(m.offset(), 0.0);
        m.drag_to(-15.0);
        assert_eq!(m.offset(), -15.0);
    }

    #[test]
    fn test_long_swipe_confirms() {
        // Observed scenario: [-10, -50, -120] then release
        let mut m = dragged(&[-10.0, -50.0, -120.0]);
        assert_eq!(m.release(), Some(ReleaseAction::Confirm));
        assert_eq!(m.phase(), SwipePhase::Confirming);
        assert_eq!(m.offset(), EXIT_OFFSET_PX);
    }

    #[test]
    fn test_short_swipe_snaps_back() {
        // Observed scenario: [-10, -40, -60] then release
        let mut m = dragged(&[-10.0, -40.0, -60.0]);
        assert_eq!(m.release(), Some(ReleaseAction::SnapBack));
        assert_eq!(m.phase(), SwipePhase::SnappingBack);
        assert_eq!(m.offset(), 0.0);
    }

    #[test]
    fn test_rightward_swipe_is_a_trivial_cancel() {
        // Observed scenario: [5, 10] then release
        let mut m = dragged(&[5.0, 10.0]);
        assert_eq!(m.offset(), 0.0);
        assert_eq!(m.release(), Some(ReleaseAction::SnapBack));
        assert_eq!(m.offset(), 0.0);
    }

    #[test]
    fn test_exactly_at_threshold_snaps_back() {
        let mut m = dragged(&[-100.0]);
        assert_eq!(m.release(), Some(ReleaseAction::SnapBack));
    }

    #[test]
    fn test_just_past_threshold_confirms() {
        let mut m = dragged(&[-101.0]);
        assert_eq!(m.release(), Some(ReleaseAction::Confirm));
    }

    #[test]
    fn test_classification_uses_final_position_not_peak() {
        // Swing far left, then come back before letting go
        let mut m = dragged(&[-150.0, -30.0]);
        assert_eq!(m.release(), Some(ReleaseAction::SnapBack));
    }

    #[test]
    fn test_release_resolves_at_most_once() {
        let mut m = dragged(&[-120.0]);
        assert_eq!(m.release(), Some(ReleaseAction::Confirm));
        assert_eq!(m.release(), None);
        assert_eq!(m.phase(), SwipePhase::Confirming);
    }

    #[test]
    fn test_confirmed_machine_ignores_further_input() {
        let mut m = dragged(&[-120.0]);
        m.release();
        m.drag_to(-10.0);
        m.settle();
        assert_eq!(m.phase(), SwipePhase::Confirming);
        assert_eq!(m.offset(), EXIT_OFFSET_PX);
    }

    #[test]
    fn test_settle_returns_snap_back_to_idle() {
        let mut m = dragged(&[-60.0]);
        m.release();
        m.settle();
        assert_eq!(m.phase(), SwipePhase::Idle);
        assert_eq!(m.offset(), 0.0);
    }

    #[test]
    fn test_release_without_drag_snaps_back() {
        let mut m = SwipeMachine::new();
        m.press(100.0);
        assert_eq!(m.release(), Some(ReleaseAction::SnapBack));
        assert_eq!(m.offset(), 0.0);
    }
}
