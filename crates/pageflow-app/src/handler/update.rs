//! Main update function - handles state transitions (TEA pattern)

use pageflow_core::Breakpoint;

use crate::engine;
use crate::message::Message;
use crate::state::AppState;
use crate::sync;

use super::{keys, pointer, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Raw Pointer Input
        // ─────────────────────────────────────────────────────────
        Message::Wheel { delta } => pointer::handle_wheel(state, delta),
        Message::PointerDown { x, y } => pointer::handle_pointer_down(state, x, y),
        Message::PointerUp { x, y } => pointer::handle_pointer_up(state, x, y),

        // ─────────────────────────────────────────────────────────
        // Navigation Commands
        // ─────────────────────────────────────────────────────────
        Message::StepVertical { direction } => engine::step_vertical(state, direction),
        Message::StepHorizontal { direction } => engine::step_horizontal(state, direction),
        Message::JumpTo { target } => engine::jump_to(state, target),

        // ─────────────────────────────────────────────────────────
        // Timer Completions
        // ─────────────────────────────────────────────────────────
        Message::TransitionFinished => {
            engine::finish_transition(state);
            UpdateResult::none()
        }
        Message::JumpStepDue => engine::advance_jump(state),

        Message::Resize { width, height } => {
            state.viewport = (width, height);
            state.breakpoint = Breakpoint::from_width(width);
            // Layout/threshold parameters only; never touches nav indices
            sync::recompute_affordances(state);
            UpdateResult::none()
        }

        Message::Tick => UpdateResult::none(),
    }
}
