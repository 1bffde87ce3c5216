//! Application state (Model in TEA pattern)

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use pageflow_core::{Breakpoint, Deck, Rgb, Section, TextContrast};

use crate::config::Settings;
use crate::{selector, sync};

/// Visual-only marker for the wrap-around transition. The rotation style is
/// forwarded to the rendering surface and cleared when the transition ends;
/// it carries no semantic difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStyle {
    VerticalForward,
    VerticalBackward,
    HorizontalForward,
    HorizontalBackward,
}

/// An in-flight multi-step jump (menu-driven push transition).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpPlan {
    pub target: usize,
    /// +1 or -1, resolved once when the jump starts
    pub direction: i8,
    /// Single steps still to perform after the one already taken
    pub remaining: usize,
}

/// The position model: mutated only by the transition engine.
#[derive(Debug, Clone)]
pub struct NavState {
    /// Active section index, always in [0, N)
    pub current_vertical: usize,
    /// Active slide per section (default 0 for all)
    pub current_horizontal: Vec<usize>,
    /// True while a transition is in flight; all transition-initiating
    /// operations are rejected while set
    pub locked: bool,
    pub loop_style: Option<LoopStyle>,
    /// Last background applied, for the repetition-avoidance policy
    pub last_color_used: Option<Rgb>,
    pub jump: Option<JumpPlan>,
}

impl NavState {
    fn new(section_count: usize, initial: usize) -> Self {
        Self {
            current_vertical: initial,
            current_horizontal: vec![0; section_count],
            locked: false,
            loop_style: None,
            last_color_used: None,
            jump: None,
        }
    }

    /// Active slide index for a section; 0 for an out-of-range section.
    pub fn slide_index(&self, section: usize) -> usize {
        self.current_horizontal.get(section).copied().unwrap_or(0)
    }
}

/// Background and text styling resolved for one section.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionStyle {
    /// None until first activation, and always None for media sections
    pub background: Option<Rgb>,
    pub contrast: TextContrast,
}

/// Derived UI state, recomputed by presentation sync after every
/// state-changing operation. The render layer only reads this.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Vertical affordances are hidden only when N <= 1
    pub show_vertical_arrows: bool,
    /// Horizontal affordances show only when the active section has > 1 slide
    pub show_horizontal_arrows: bool,
    /// Which menu entry carries the "current" marker
    pub menu_active: usize,
    /// Active section id, mirrored into the terminal title
    pub fragment: String,
    /// Per-section resolved styling
    pub styles: Vec<SectionStyle>,
}

/// A recorded pointer press, the touch-start analog.
#[derive(Debug, Clone, Copy)]
pub struct PointerPress {
    pub x: u16,
    pub y: u16,
    pub at: Instant,
}

/// Complete application state
pub struct AppState {
    pub deck: Deck,
    pub settings: Settings,
    pub nav: NavState,
    pub ui: UiState,
    pub breakpoint: Breakpoint,
    /// Terminal size in cells (columns, rows)
    pub viewport: (u16, u16),
    /// Opens the wheel debounce window; independent of the transition lock
    pub last_wheel: Option<Instant>,
    pub pointer_down: Option<PointerPress>,
    pub rng: StdRng,
    quitting: bool,
}

impl AppState {
    /// Create the state for a validated deck, seeding the active section
    /// from a fragment match (or 0). Applies the initial background and
    /// derived UI state, like the first activation.
    pub fn new(deck: Deck, settings: Settings, initial: usize) -> Self {
        Self::with_rng(deck, settings, initial, StdRng::from_entropy())
    }

    /// Same as [`AppState::new`] with a caller-provided RNG, for
    /// deterministic tests.
    pub fn with_rng(deck: Deck, settings: Settings, initial: usize, rng: StdRng) -> Self {
        let count = deck.len();
        let initial = if initial < count { initial } else { 0 };
        let mut state = Self {
            nav: NavState::new(count, initial),
            ui: UiState {
                styles: vec![SectionStyle::default(); count],
                ..Default::default()
            },
            deck,
            settings,
            breakpoint: Breakpoint::from_width(80),
            viewport: (80, 24),
            last_wheel: None,
            pointer_down: None,
            rng,
            quitting: false,
        };
        selector::apply_background(&mut state);
        sync::refresh_all(&mut state);
        state
    }

    pub fn section_count(&self) -> usize {
        self.deck.len()
    }

    pub fn active_section(&self) -> &Section {
        &self.deck.sections[self.nav.current_vertical]
    }

    /// Style of the active section (terminal default until first visit).
    pub fn active_style(&self) -> SectionStyle {
        self.ui
            .styles
            .get(self.nav.current_vertical)
            .copied()
            .unwrap_or_default()
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}
