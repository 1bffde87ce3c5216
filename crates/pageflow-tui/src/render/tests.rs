//! Full-screen render tests
//!
//! Each test draws the whole viewport into a test backend and asserts on
//! the buffer content.

use super::view;
use pageflow_app::config::Settings;
use pageflow_app::state::AppState;
use pageflow_core::Deck;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn deck() -> Deck {
    toml::from_str(
        r#"
        [[sections]]
        id = "intro"
        title = "Intro"
        body = "welcome"

        [[sections]]
        id = "work"
        title = "Work"
        [[sections.slides]]
        title = "First"
        body = "one"
        [[sections.slides]]
        title = "Second"
        body = "two"

        [[sections]]
        id = "clip"
        title = "Clip"
        media = "https://example.com/v/42"
        "#,
    )
    .unwrap()
}

fn state_at(initial: usize) -> AppState {
    AppState::with_rng(
        deck(),
        Settings::default(),
        initial,
        StdRng::seed_from_u64(7),
    )
}

fn render_screen(state: &AppState) -> String {
    let backend = TestBackend::new(80, 24);
    let mut term = Terminal::new(backend).unwrap();
    term.draw(|frame| view(frame, state)).unwrap();
    let buffer = term.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_renders_section_title_and_body() {
    let content = render_screen(&state_at(0));
    assert!(content.contains("Intro"));
    assert!(content.contains("welcome"));
}

#[test]
fn test_menu_shows_all_section_titles() {
    let content = render_screen(&state_at(0));
    assert!(content.contains("Work"));
    assert!(content.contains("Clip"));
}

#[test]
fn test_vertical_arrows_visible_with_multiple_sections() {
    let content = render_screen(&state_at(0));
    assert!(content.contains('▲'));
    assert!(content.contains('▼'));
}

#[test]
fn test_horizontal_arrows_only_on_slide_sections() {
    let without = render_screen(&state_at(0));
    assert!(!without.contains('◀'));

    let with = render_screen(&state_at(1));
    assert!(with.contains('◀'));
    assert!(with.contains('▶'));
}

#[test]
fn test_slide_section_shows_position_indicator() {
    let content = render_screen(&state_at(1));
    assert!(content.contains("First"));
    assert!(content.contains("1 / 2"));
}

#[test]
fn test_media_section_shows_placeholder() {
    let content = render_screen(&state_at(2));
    assert!(content.contains("▶ media"));
    assert!(content.contains("https://example.com/v/42"));
}

#[test]
fn test_status_row_shows_fragment_and_breakpoint() {
    let content = render_screen(&state_at(0));
    assert!(content.contains("#intro"));
    assert!(content.contains("medium"));
}

#[test]
fn test_single_section_deck_hides_vertical_arrows() {
    let deck: Deck = toml::from_str(
        r#"
        [[sections]]
        id = "only"
        title = "Only"
        "#,
    )
    .unwrap();
    let state = AppState::with_rng(
        deck,
        Settings::default(),
        0,
        StdRng::seed_from_u64(7),
    );
    let content = render_screen(&state);
    assert!(!content.contains('▲'));
    assert!(!content.contains('▼'));
}
