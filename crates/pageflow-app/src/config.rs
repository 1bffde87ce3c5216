//! Settings parser for .pageflow/config.toml
//!
//! Every field has a default, so a missing or partial file is fine. A
//! malformed file logs a warning and falls back to defaults rather than
//! aborting startup.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use pageflow_core::Breakpoint;

const CONFIG_FILENAME: &str = "config.toml";
const PAGEFLOW_DIR: &str = ".pageflow";

/// User-tunable behavior, loaded from `.pageflow/config.toml` next to the
/// deck file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub transition: TransitionSettings,
    pub wheel: WheelSettings,
    pub gesture: GestureSettings,
    pub colors: ColorSettings,
}

/// Transition timing. The duration must match the rendering surface's
/// animation length; both read this one value.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransitionSettings {
    /// Full transition duration in milliseconds
    pub duration_ms: u64,
    /// Delay between the single steps of a multi-step jump
    pub jump_step_ms: u64,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            jump_step_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WheelSettings {
    /// Ignore further wheel events for this long after a triggering one,
    /// independent of the transition lock
    pub debounce_ms: u64,
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self { debounce_ms: 1000 }
    }
}

/// Pointer-gesture thresholds, in terminal cells and cells per second.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    pub distance_small: f64,
    pub distance_medium: f64,
    pub distance_large: f64,
    pub distance_extra_large: f64,
    /// Minimum flick velocity (cells/second)
    pub min_velocity: f64,
    /// More sensitive velocity floor used on small terminals
    pub min_velocity_small: f64,
    /// Whether the velocity floor varies by breakpoint at all
    pub velocity_by_breakpoint: bool,
    /// Displacement at or below this is a click, not a drag
    pub click_slop: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            distance_small: 3.0,
            distance_medium: 4.0,
            distance_large: 5.0,
            distance_extra_large: 6.0,
            min_velocity: 30.0,
            min_velocity_small: 20.0,
            velocity_by_breakpoint: true,
            click_slop: 1.0,
        }
    }
}

impl GestureSettings {
    /// Distance threshold for the current breakpoint (tighter when small).
    pub fn distance_for(&self, breakpoint: Breakpoint) -> f64 {
        match breakpoint {
            Breakpoint::Small => self.distance_small,
            Breakpoint::Medium => self.distance_medium,
            Breakpoint::Large => self.distance_large,
            Breakpoint::ExtraLarge => self.distance_extra_large,
        }
    }

    /// Velocity threshold for the current breakpoint.
    pub fn velocity_for(&self, breakpoint: Breakpoint) -> f64 {
        if self.velocity_by_breakpoint && breakpoint == Breakpoint::Small {
            self.min_velocity_small
        } else {
            self.min_velocity
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    /// Exclude the previous background from random picks
    pub avoid_repeat: bool,
    /// Honor a section's explicit `color` override instead of picking randomly
    pub honor_override: bool,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            avoid_repeat: true,
            honor_override: true,
        }
    }
}

/// Load settings from `<deck_dir>/.pageflow/config.toml`, falling back to
/// defaults when absent or malformed.
pub fn load_settings(deck_dir: &Path) -> Settings {
    let path = deck_dir.join(PAGEFLOW_DIR).join(CONFIG_FILENAME);
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Settings::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(raw) => match toml::from_str::<Settings>(&raw) {
            Ok(settings) => {
                debug!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Invalid config {}: {} (using defaults)", path.display(), e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Cannot read {}: {} (using defaults)", path.display(), e);
            Settings::default()
        }
    }
}
