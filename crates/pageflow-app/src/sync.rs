//! Presentation sync: derived UI state recomputation
//!
//! After every state-changing operation the engine calls into here to
//! recompute what the rendering surface should show. These functions only
//! write [`crate::state::UiState`]; they never touch the position model.

use crate::state::AppState;

/// Directional affordance visibility.
///
/// Vertical arrows hide only when the deck has a single section (cyclic
/// navigation keeps them visible otherwise); horizontal arrows show only
/// when the active section has more than one slide.
pub fn recompute_affordances(state: &mut AppState) {
    state.ui.show_vertical_arrows = state.deck.len() > 1;
    state.ui.show_horizontal_arrows = state.deck.slide_count(state.nav.current_vertical) > 1;
}

/// Mark the active section's menu entry as current.
pub fn recompute_menu(state: &mut AppState) {
    state.ui.menu_active = state.nav.current_vertical;
}

/// Mirror the active section id into the fragment (terminal title).
///
/// Jump transitions defer this to their final step.
pub fn recompute_fragment(state: &mut AppState) {
    state.ui.fragment = state.active_section().id.clone();
}

pub fn refresh_all(state: &mut AppState) {
    recompute_affordances(state);
    recompute_menu(state);
    recompute_fragment(state);
}
