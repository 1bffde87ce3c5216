//! Transition engine: single-step moves and multi-step jumps
//!
//! Two states, Idle and Transitioning, tracked by `nav.locked`. Every
//! transition-initiating operation checks the lock first and is a silent
//! no-op while a transition is in flight; the lock clears only when the
//! event loop delivers `TransitionFinished` after the fixed duration.
//! Cancellation is not supported.

use std::time::Duration;

use tracing::{debug, trace};

use crate::handler::{UpdateAction, UpdateResult};
use crate::state::{AppState, JumpPlan, LoopStyle};
use crate::{selector, sync};

/// Cyclic index arithmetic: `(i + direction + n) mod n`.
fn wrap_step(index: usize, direction: i8, count: usize) -> usize {
    let n = count as isize;
    ((index as isize + direction as isize + n) % n) as usize
}

fn transition_duration(state: &AppState) -> Duration {
    Duration::from_millis(state.settings.transition.duration_ms)
}

fn jump_step_delay(state: &AppState) -> Duration {
    Duration::from_millis(state.settings.transition.jump_step_ms)
}

/// Single vertical step; +1 forward (down), -1 backward (up).
///
/// Wrapping forward from the last section or backward from the first marks
/// the loop (rotation-style) transition.
pub fn step_vertical(state: &mut AppState, direction: i8) -> UpdateResult {
    if state.nav.locked {
        trace!("vertical step rejected: transition in flight");
        return UpdateResult::none();
    }
    let count = state.section_count();
    if count <= 1 {
        return UpdateResult::none();
    }

    let old = state.nav.current_vertical;
    let new = wrap_step(old, direction, count);

    state.nav.locked = true;
    state.nav.loop_style = if old == count - 1 && direction > 0 {
        Some(LoopStyle::VerticalForward)
    } else if old == 0 && direction < 0 {
        Some(LoopStyle::VerticalBackward)
    } else {
        None
    };
    state.nav.current_vertical = new;

    selector::apply_background(state);
    sync::refresh_all(state);

    debug!(from = old, to = new, loop_style = ?state.nav.loop_style, "vertical step");
    UpdateResult::action(UpdateAction::ScheduleUnlock {
        after: transition_duration(state),
    })
}

/// Single horizontal step within the active section; +1 right, -1 left.
///
/// Scoped to the active section's slide count; vertical state, colors and
/// the fragment are untouched. A section flagged for slides but carrying
/// none behaves as "no slides".
pub fn step_horizontal(state: &mut AppState, direction: i8) -> UpdateResult {
    if state.nav.locked {
        trace!("horizontal step rejected: transition in flight");
        return UpdateResult::none();
    }
    let section = state.nav.current_vertical;
    let count = state.deck.slide_count(section);
    if count <= 1 {
        return UpdateResult::none();
    }

    let old = state.nav.slide_index(section);
    let new = wrap_step(old, direction, count);

    state.nav.locked = true;
    state.nav.loop_style = if old == count - 1 && direction > 0 {
        Some(LoopStyle::HorizontalForward)
    } else if old == 0 && direction < 0 {
        Some(LoopStyle::HorizontalBackward)
    } else {
        None
    };
    state.nav.current_horizontal[section] = new;

    sync::recompute_affordances(state);

    debug!(section, from = old, to = new, "horizontal step");
    UpdateResult::action(UpdateAction::ScheduleUnlock {
        after: transition_duration(state),
    })
}

/// Multi-step push transition to a target section (menu activation).
///
/// Decomposes into single steps in the resolved direction with a fixed
/// inter-step delay. Intermediate steps update color/arrows/menu; the
/// fragment updates only on the final step. The whole sequence runs under
/// one lock. Out-of-range and current-index targets are silently ignored.
pub fn jump_to(state: &mut AppState, target: usize) -> UpdateResult {
    if state.nav.locked {
        trace!("jump rejected: transition in flight");
        return UpdateResult::none();
    }
    let current = state.nav.current_vertical;
    if target == current || target >= state.section_count() {
        trace!(target, current, "jump ignored");
        return UpdateResult::none();
    }

    state.nav.locked = true;
    let direction: i8 = if target > current { 1 } else { -1 };
    let steps = current.abs_diff(target);

    debug!(from = current, to = target, steps, "jump start");
    perform_jump_step(state, direction);

    if steps > 1 {
        state.nav.jump = Some(JumpPlan {
            target,
            direction,
            remaining: steps - 1,
        });
        UpdateResult::action(UpdateAction::ScheduleJumpStep {
            after: jump_step_delay(state),
        })
    } else {
        sync::recompute_fragment(state);
        UpdateResult::action(UpdateAction::ScheduleUnlock {
            after: transition_duration(state),
        })
    }
}

/// Continue an in-flight jump when its inter-step delay elapses.
pub fn advance_jump(state: &mut AppState) -> UpdateResult {
    let Some(plan) = state.nav.jump else {
        // Stale timer after the jump already completed
        return UpdateResult::none();
    };

    perform_jump_step(state, plan.direction);

    if plan.remaining > 1 {
        state.nav.jump = Some(JumpPlan {
            remaining: plan.remaining - 1,
            ..plan
        });
        UpdateResult::action(UpdateAction::ScheduleJumpStep {
            after: jump_step_delay(state),
        })
    } else {
        state.nav.jump = None;
        sync::recompute_fragment(state);
        debug!(target = plan.target, "jump complete");
        UpdateResult::action(UpdateAction::ScheduleUnlock {
            after: transition_duration(state),
        })
    }
}

/// One linear step of a jump. Jumps stay in range by construction, so no
/// wrap arithmetic and no loop marker here.
fn perform_jump_step(state: &mut AppState, direction: i8) {
    let new = (state.nav.current_vertical as isize + direction as isize) as usize;
    state.nav.current_vertical = new;
    selector::apply_background(state);
    sync::recompute_affordances(state);
    sync::recompute_menu(state);
}

/// The fixed transition duration elapsed: clear the loop marker and unlock.
pub fn finish_transition(state: &mut AppState) {
    state.nav.loop_style = None;
    state.nav.locked = false;
}
