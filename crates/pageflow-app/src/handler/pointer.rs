//! Pointer input routing: wheel debounce, drags, and clicks
//!
//! A press/release pair is either a click (released within slop of the
//! press) that hit-tests the chrome, or a drag classified as a swipe
//! gesture with breakpoint-dependent thresholds.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::gesture::{self, Swipe, Thresholds};
use crate::handler::UpdateResult;
use crate::layout::{ChromeLayout, ChromeTarget};
use crate::message::Message;
use crate::state::{AppState, PointerPress};

/// Wheel events step vertically by delta sign. After a triggering event,
/// further wheel events are ignored for the debounce window regardless of
/// the transition lock, so one continuous scroll fires one step.
pub fn handle_wheel(state: &mut AppState, delta: i32) -> UpdateResult {
    let now = Instant::now();
    let window = Duration::from_millis(state.settings.wheel.debounce_ms);
    if let Some(last) = state.last_wheel {
        if now.duration_since(last) < window {
            trace!("wheel ignored: debounce window open");
            return UpdateResult::none();
        }
    }
    state.last_wheel = Some(now);

    match delta.signum() {
        1 => UpdateResult::message(Message::StepVertical { direction: 1 }),
        -1 => UpdateResult::message(Message::StepVertical { direction: -1 }),
        _ => UpdateResult::none(),
    }
}

/// Record the press position and timestamp (touch-start analog).
pub fn handle_pointer_down(state: &mut AppState, x: u16, y: u16) -> UpdateResult {
    state.pointer_down = Some(PointerPress {
        x,
        y,
        at: Instant::now(),
    });
    UpdateResult::none()
}

/// Resolve a release into a click or a swipe (touch-end analog).
pub fn handle_pointer_up(state: &mut AppState, x: u16, y: u16) -> UpdateResult {
    let Some(press) = state.pointer_down.take() else {
        return UpdateResult::none();
    };

    // start - end: dragging up/left gives positive (forward) deltas
    let dx = press.x as f64 - x as f64;
    let dy = press.y as f64 - y as f64;

    let slop = state.settings.gesture.click_slop;
    if dx.abs() <= slop && dy.abs() <= slop {
        return handle_click(state, x, y);
    }

    let thresholds = Thresholds {
        distance: state.settings.gesture.distance_for(state.breakpoint),
        velocity: state.settings.gesture.velocity_for(state.breakpoint),
    };
    match gesture::classify(dx, dy, press.at.elapsed(), &thresholds) {
        Some(Swipe::Vertical(direction)) => {
            UpdateResult::message(Message::StepVertical { direction })
        }
        Some(Swipe::Horizontal(direction)) => {
            UpdateResult::message(Message::StepHorizontal { direction })
        }
        None => UpdateResult::none(),
    }
}

/// Hit-test a click against the chrome: menu entries jump, arrows step.
/// Hidden affordances do not react.
fn handle_click(state: &mut AppState, x: u16, y: u16) -> UpdateResult {
    let (width, height) = state.viewport;
    let layout = ChromeLayout::compute(width, height, &state.deck);
    match layout.hit_test(x, y) {
        Some(ChromeTarget::Menu(target)) => UpdateResult::message(Message::JumpTo { target }),
        Some(ChromeTarget::ArrowUp) if state.ui.show_vertical_arrows => {
            UpdateResult::message(Message::StepVertical { direction: -1 })
        }
        Some(ChromeTarget::ArrowDown) if state.ui.show_vertical_arrows => {
            UpdateResult::message(Message::StepVertical { direction: 1 })
        }
        Some(ChromeTarget::ArrowLeft) if state.ui.show_horizontal_arrows => {
            UpdateResult::message(Message::StepHorizontal { direction: -1 })
        }
        Some(ChromeTarget::ArrowRight) if state.ui.show_horizontal_arrows => {
            UpdateResult::message(Message::StepHorizontal { direction: 1 })
        }
        _ => UpdateResult::none(),
    }
}
