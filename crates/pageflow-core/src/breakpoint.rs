//! Responsive breakpoint classes derived from terminal width

use std::fmt;

/// Closed set of responsive size classes.
///
/// Derived purely from the terminal width in columns; recomputed on every
/// resize event. Gesture thresholds tighten on smaller terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Breakpoint {
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
}

impl Breakpoint {
    /// Classify a terminal width (in columns).
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Small,
            60..=89 => Breakpoint::Medium,
            90..=139 => Breakpoint::Large,
            _ => Breakpoint::ExtraLarge,
        }
    }

    /// CSS-style class name, used for logging and the status line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Small => "small",
            Breakpoint::Medium => "medium",
            Breakpoint::Large => "large",
            Breakpoint::ExtraLarge => "extra-large",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
