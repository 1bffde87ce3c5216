//! Pointer gesture classification (the touch-swipe analog)
//!
//! Displacements are `start - end`, so dragging up or left yields positive
//! deltas and positive deltas mean "forward". The axis with the larger
//! absolute displacement decides vertical vs horizontal intent; a step
//! fires when the displacement clears the distance threshold OR the
//! velocity clears the velocity threshold, so both slow long drags and
//! fast short flicks register.

use std::time::Duration;

/// Thresholds resolved for the current breakpoint.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    /// Minimum displacement in cells
    pub distance: f64,
    /// Minimum velocity in cells per second
    pub velocity: f64,
}

/// A classified swipe; the payload is the step direction (+1 forward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Vertical(i8),
    Horizontal(i8),
}

/// Classify a completed gesture, or `None` when it clears neither threshold.
pub fn classify(dx: f64, dy: f64, elapsed: Duration, thresholds: &Thresholds) -> Option<Swipe> {
    // Guard against a zero-duration release
    let secs = elapsed.as_secs_f64().max(0.001);

    if dy.abs() > dx.abs() {
        let velocity = dy.abs() / secs;
        if dy.abs() > thresholds.distance || velocity > thresholds.velocity {
            Some(Swipe::Vertical(if dy > 0.0 { 1 } else { -1 }))
        } else {
            None
        }
    } else {
        let velocity = dx.abs() / secs;
        if dx.abs() > thresholds.distance || velocity > thresholds.velocity {
            Some(Swipe::Horizontal(if dx > 0.0 { 1 } else { -1 }))
        } else {
            None
        }
    }
}
