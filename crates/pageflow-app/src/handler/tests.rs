//! Handler integration tests: the update loop driven message by message

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use pageflow_core::{Deck, TextContrast};

use crate::config::Settings;
use crate::handler::{update, UpdateAction, UpdateResult};
use crate::input_key::InputKey;
use crate::layout::ChromeLayout;
use crate::message::Message;
use crate::state::{AppState, LoopStyle, PointerPress};

/// Build a deck of `n` plain sections with ids `s0..s{n-1}`.
fn deck(n: usize) -> Deck {
    let mut toml = String::new();
    for i in 0..n {
        toml.push_str(&format!(
            "[[sections]]\nid = \"s{i}\"\ntitle = \"Section {i}\"\n"
        ));
    }
    toml::from_str(&toml).unwrap()
}

fn state_with(deck: Deck, initial: usize) -> AppState {
    AppState::with_rng(deck, Settings::default(), initial, StdRng::seed_from_u64(42))
}

fn state(n: usize) -> AppState {
    state_with(deck(n), 0)
}

/// Run a message and any follow-up messages it produces; return the last
/// action requested.
fn run(state: &mut AppState, message: Message) -> Option<UpdateAction> {
    let mut msg = Some(message);
    let mut action = None;
    while let Some(m) = msg {
        let result: UpdateResult = update(state, m);
        if result.action.is_some() {
            action = result.action;
        }
        msg = result.message;
    }
    action
}

fn complete(state: &mut AppState) {
    run(state, Message::TransitionFinished);
}

// ─────────────────────────────────────────────────────────────────
// Vertical stepping
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_completed_forward_steps_accumulate_modulo_n() {
    let mut s = state(5);
    for _ in 0..7 {
        let action = run(&mut s, Message::StepVertical { direction: 1 });
        assert!(matches!(action, Some(UpdateAction::ScheduleUnlock { .. })));
        complete(&mut s);
    }
    assert_eq!(s.nav.current_vertical, 7 % 5);
    assert!(!s.nav.locked);
}

#[test]
fn test_wrap_forward_marks_loop() {
    let mut s = state_with(deck(4), 3);
    run(&mut s, Message::StepVertical { direction: 1 });
    assert_eq!(s.nav.current_vertical, 0);
    assert_eq!(s.nav.loop_style, Some(LoopStyle::VerticalForward));
}

#[test]
fn test_wrap_backward_marks_loop() {
    let mut s = state(4);
    run(&mut s, Message::StepVertical { direction: -1 });
    assert_eq!(s.nav.current_vertical, 3);
    assert_eq!(s.nav.loop_style, Some(LoopStyle::VerticalBackward));
}

#[test]
fn test_interior_step_has_no_loop_marker() {
    let mut s = state_with(deck(4), 1);
    run(&mut s, Message::StepVertical { direction: 1 });
    assert_eq!(s.nav.current_vertical, 2);
    assert_eq!(s.nav.loop_style, None);
}

#[test]
fn test_loop_marker_clears_when_transition_ends() {
    let mut s = state_with(deck(4), 3);
    run(&mut s, Message::StepVertical { direction: 1 });
    assert!(s.nav.loop_style.is_some());
    complete(&mut s);
    assert_eq!(s.nav.loop_style, None);
    assert!(!s.nav.locked);
}

#[test]
fn test_single_section_deck_never_moves() {
    let mut s = state(1);
    let action = run(&mut s, Message::StepVertical { direction: 1 });
    assert_eq!(s.nav.current_vertical, 0);
    assert!(action.is_none());
    assert!(!s.nav.locked);
    assert!(!s.ui.show_vertical_arrows);
}

#[test]
fn test_step_updates_fragment_and_menu() {
    let mut s = state(3);
    assert_eq!(s.ui.fragment, "s0");
    run(&mut s, Message::StepVertical { direction: 1 });
    assert_eq!(s.ui.fragment, "s1");
    assert_eq!(s.ui.menu_active, 1);
}

// ─────────────────────────────────────────────────────────────────
// Lock idempotence
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_locked_rejects_all_initiators() {
    let mut s = state(5);
    run(&mut s, Message::StepVertical { direction: 1 });
    assert!(s.nav.locked);
    let at = s.nav.current_vertical;

    assert!(run(&mut s, Message::StepVertical { direction: 1 }).is_none());
    assert!(run(&mut s, Message::StepHorizontal { direction: 1 }).is_none());
    assert!(run(&mut s, Message::JumpTo { target: 4 }).is_none());
    assert_eq!(s.nav.current_vertical, at);
}

// ─────────────────────────────────────────────────────────────────
// Horizontal stepping
// ─────────────────────────────────────────────────────────────────

fn deck_with_slides() -> Deck {
    toml::from_str(
        r#"
        [[sections]]
        id = "gallery"
        title = "Gallery"

        [[sections.slides]]
        title = "One"

        [[sections.slides]]
        title = "Two"

        [[sections.slides]]
        title = "Three"

        [[sections]]
        id = "solo"
        title = "Solo"

        [[sections.slides]]
        title = "Only"
        "#,
    )
    .unwrap()
}

#[test]
fn test_horizontal_step_and_wrap() {
    let mut s = state_with(deck_with_slides(), 0);
    run(&mut s, Message::StepHorizontal { direction: 1 });
    assert_eq!(s.nav.slide_index(0), 1);
    assert_eq!(s.nav.loop_style, None);
    complete(&mut s);

    run(&mut s, Message::StepHorizontal { direction: 1 });
    complete(&mut s);
    run(&mut s, Message::StepHorizontal { direction: 1 });
    assert_eq!(s.nav.slide_index(0), 0);
    assert_eq!(s.nav.loop_style, Some(LoopStyle::HorizontalForward));
}

#[test]
fn test_horizontal_step_leaves_vertical_state_alone() {
    let mut s = state_with(deck_with_slides(), 0);
    let fragment = s.ui.fragment.clone();
    let color = s.nav.last_color_used;
    run(&mut s, Message::StepHorizontal { direction: 1 });
    assert_eq!(s.nav.current_vertical, 0);
    assert_eq!(s.ui.fragment, fragment);
    assert_eq!(s.nav.last_color_used, color);
}

#[test]
fn test_single_slide_section_is_noop() {
    let mut s = state_with(deck_with_slides(), 1);
    let action = run(&mut s, Message::StepHorizontal { direction: 1 });
    assert!(action.is_none());
    assert!(!s.nav.locked);
    assert_eq!(s.nav.slide_index(1), 0);
    assert!(!s.ui.show_horizontal_arrows);
}

#[test]
fn test_slideless_section_is_noop() {
    let mut s = state(3);
    let action = run(&mut s, Message::StepHorizontal { direction: 1 });
    assert!(action.is_none());
    assert!(!s.nav.locked);
}

// ─────────────────────────────────────────────────────────────────
// Jump (menu push transition)
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_jump_performs_exact_steps_and_updates_fragment_once() {
    let mut s = state_with(deck(6), 1);
    let start_fragment = s.ui.fragment.clone();

    let action = run(&mut s, Message::JumpTo { target: 4 });
    assert_eq!(s.nav.current_vertical, 2);
    assert!(s.nav.locked);
    // Fragment deferred until the final step
    assert_eq!(s.ui.fragment, start_fragment);
    assert!(matches!(action, Some(UpdateAction::ScheduleJumpStep { .. })));

    let action = run(&mut s, Message::JumpStepDue);
    assert_eq!(s.nav.current_vertical, 3);
    assert_eq!(s.ui.fragment, start_fragment);
    assert!(matches!(action, Some(UpdateAction::ScheduleJumpStep { .. })));

    let action = run(&mut s, Message::JumpStepDue);
    assert_eq!(s.nav.current_vertical, 4);
    assert_eq!(s.ui.fragment, "s4");
    assert!(matches!(action, Some(UpdateAction::ScheduleUnlock { .. })));
    assert!(s.nav.jump.is_none());
    assert!(s.nav.locked);

    complete(&mut s);
    assert!(!s.nav.locked);
}

#[test]
fn test_jump_backward_single_step() {
    let mut s = state_with(deck(4), 2);
    let action = run(&mut s, Message::JumpTo { target: 1 });
    assert_eq!(s.nav.current_vertical, 1);
    assert_eq!(s.ui.fragment, "s1");
    assert!(matches!(action, Some(UpdateAction::ScheduleUnlock { .. })));
    assert!(s.nav.jump.is_none());
}

#[test]
fn test_jump_to_current_or_out_of_range_is_ignored() {
    let mut s = state_with(deck(4), 2);
    assert!(run(&mut s, Message::JumpTo { target: 2 }).is_none());
    assert!(run(&mut s, Message::JumpTo { target: 99 }).is_none());
    assert!(!s.nav.locked);
    assert_eq!(s.nav.current_vertical, 2);
}

#[test]
fn test_stale_jump_step_timer_is_harmless() {
    let mut s = state(4);
    assert!(run(&mut s, Message::JumpStepDue).is_none());
    assert_eq!(s.nav.current_vertical, 0);
}

#[test]
fn test_jump_updates_menu_on_intermediate_steps() {
    let mut s = state_with(deck(5), 0);
    run(&mut s, Message::JumpTo { target: 3 });
    assert_eq!(s.ui.menu_active, 1);
    run(&mut s, Message::JumpStepDue);
    assert_eq!(s.ui.menu_active, 2);
}

// ─────────────────────────────────────────────────────────────────
// Colors
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_activation_assigns_background_and_contrast() {
    let s = state(3);
    let style = s.active_style();
    let bg = style.background.expect("initial activation colors");
    assert_eq!(style.contrast, bg.contrast());
    assert_eq!(s.nav.last_color_used, Some(bg));
}

#[test]
fn test_no_consecutive_background_repeats() {
    let mut s = state(5);
    let mut last = s.nav.last_color_used;
    for _ in 0..50 {
        run(&mut s, Message::StepVertical { direction: 1 });
        complete(&mut s);
        let picked = s.nav.last_color_used;
        assert_ne!(picked, last);
        last = picked;
    }
}

#[test]
fn test_media_section_keeps_background_unset() {
    let d: Deck = toml::from_str(
        r#"
        [[sections]]
        id = "intro"
        title = "Intro"
        [[sections]]
        id = "reel"
        title = "Reel"
        media = "https://www.youtube.com/embed/xyz"
        "#,
    )
    .unwrap();
    let mut s = state_with(d, 0);
    let before = s.nav.last_color_used;
    run(&mut s, Message::StepVertical { direction: 1 });
    let style = s.active_style();
    assert_eq!(style.background, None);
    assert_eq!(style.contrast, TextContrast::Light);
    assert_eq!(s.nav.last_color_used, before);
}

#[test]
fn test_explicit_override_is_honored() {
    let d: Deck = toml::from_str(
        r##"
        [[sections]]
        id = "intro"
        title = "Intro"
        [[sections]]
        id = "forest"
        title = "Forest"
        color = "#228B22"
        "##,
    )
    .unwrap();
    let mut s = state_with(d, 0);
    run(&mut s, Message::StepVertical { direction: 1 });
    let style = s.active_style();
    assert_eq!(style.background.map(|c| c.to_string()).as_deref(), Some("#228B22"));
    assert_eq!(s.nav.last_color_used, style.background);
}

// ─────────────────────────────────────────────────────────────────
// Wheel
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_wheel_steps_by_delta_sign() {
    let mut s = state(4);
    run(&mut s, Message::Wheel { delta: 3 });
    assert_eq!(s.nav.current_vertical, 1);
}

#[test]
fn test_wheel_burst_fires_once() {
    let mut s = state(4);
    run(&mut s, Message::Wheel { delta: 1 });
    complete(&mut s);
    // Window is open even though the transition completed
    run(&mut s, Message::Wheel { delta: 1 });
    run(&mut s, Message::Wheel { delta: 1 });
    assert_eq!(s.nav.current_vertical, 1);
}

#[test]
fn test_wheel_accepted_after_window_elapses() {
    let mut s = state(4);
    run(&mut s, Message::Wheel { delta: 1 });
    complete(&mut s);
    s.last_wheel = Instant::now().checked_sub(Duration::from_millis(1500));
    run(&mut s, Message::Wheel { delta: -1 });
    assert_eq!(s.nav.current_vertical, 0);
}

// ─────────────────────────────────────────────────────────────────
// Pointer gestures and clicks
// ─────────────────────────────────────────────────────────────────

fn press(s: &mut AppState, x: u16, y: u16) {
    s.pointer_down = Some(PointerPress {
        x,
        y,
        at: Instant::now(),
    });
}

#[test]
fn test_drag_left_is_horizontal_swipe() {
    let mut s = state_with(deck_with_slides(), 0);
    press(&mut s, 60, 12);
    // dx = 50, dy = 10: horizontal intent, forward
    run(&mut s, Message::PointerUp { x: 10, y: 2 });
    assert_eq!(s.nav.slide_index(0), 1);
    assert!(s.nav.locked);
}

#[test]
fn test_drag_up_is_vertical_swipe() {
    let mut s = state(4);
    press(&mut s, 40, 20);
    run(&mut s, Message::PointerUp { x: 39, y: 4 });
    assert_eq!(s.nav.current_vertical, 1);
}

#[test]
fn test_tiny_slow_drag_is_ignored() {
    let mut s = state(4);
    press(&mut s, 40, 12);
    s.pointer_down.as_mut().unwrap().at = Instant::now()
        .checked_sub(Duration::from_secs(2))
        .unwrap_or_else(Instant::now);
    run(&mut s, Message::PointerUp { x: 40, y: 10 });
    assert_eq!(s.nav.current_vertical, 0);
    assert!(!s.nav.locked);
}

#[test]
fn test_release_without_press_is_ignored() {
    let mut s = state(4);
    run(&mut s, Message::PointerUp { x: 10, y: 10 });
    assert_eq!(s.nav.current_vertical, 0);
}

#[test]
fn test_menu_click_jumps() {
    let mut s = state(4);
    let layout = ChromeLayout::compute(80, 24, &s.deck);
    let zone = layout.menu[2].zone;
    press(&mut s, zone.x, zone.y);
    run(&mut s, Message::PointerUp { x: zone.x, y: zone.y });
    assert_eq!(s.nav.current_vertical, 1); // first step of the jump
    assert!(s.nav.locked);
    assert_eq!(s.nav.jump.map(|j| j.target), Some(2));
}

#[test]
fn test_arrow_click_steps() {
    let mut s = state(4);
    let layout = ChromeLayout::compute(80, 24, &s.deck);
    let zone = layout.arrow_down;
    press(&mut s, zone.x, zone.y);
    run(&mut s, Message::PointerUp { x: zone.x, y: zone.y });
    assert_eq!(s.nav.current_vertical, 1);
}

#[test]
fn test_hidden_horizontal_arrow_does_not_react() {
    let mut s = state(4); // no slides anywhere
    let layout = ChromeLayout::compute(80, 24, &s.deck);
    let zone = layout.arrow_right;
    press(&mut s, zone.x, zone.y);
    let action = run(&mut s, Message::PointerUp { x: zone.x, y: zone.y });
    assert!(action.is_none());
    assert!(!s.nav.locked);
}

#[test]
fn test_content_click_is_ignored() {
    let mut s = state(4);
    press(&mut s, 40, 10);
    assert!(run(&mut s, Message::PointerUp { x: 40, y: 10 }).is_none());
}

// ─────────────────────────────────────────────────────────────────
// Keys, resize, quit
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_key_messages_flow_through() {
    let mut s = state(3);
    run(&mut s, Message::Key(InputKey::Down));
    assert_eq!(s.nav.current_vertical, 1);
}

#[test]
fn test_resize_reclassifies_breakpoint_only() {
    let mut s = state_with(deck_with_slides(), 0);
    run(&mut s, Message::StepHorizontal { direction: 1 });
    run(&mut s, Message::Resize {
        width: 50,
        height: 18,
    });
    assert_eq!(s.breakpoint, pageflow_core::Breakpoint::Small);
    assert_eq!(s.viewport, (50, 18));
    // Position model untouched, even mid-transition
    assert_eq!(s.nav.current_vertical, 0);
    assert_eq!(s.nav.slide_index(0), 1);
    assert!(s.nav.locked);
}

#[test]
fn test_quit() {
    let mut s = state(2);
    run(&mut s, Message::Quit);
    assert!(s.should_quit());
}

#[test]
fn test_initial_index_seeding() {
    let s = state_with(deck(4), 2);
    assert_eq!(s.nav.current_vertical, 2);
    assert_eq!(s.ui.fragment, "s2");
    // Out-of-range seed falls back to 0
    let s = state_with(deck(4), 9);
    assert_eq!(s.nav.current_vertical, 0);
}
