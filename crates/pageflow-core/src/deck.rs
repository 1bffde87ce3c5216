//! Deck model: the ordered sequence of full-screen sections
//!
//! A deck is loaded from a TOML file:
//!
//! ```toml
//! title = "Portfolio"
//!
//! [[sections]]
//! id = "intro"
//! title = "Welcome"
//! body = "Hello there."
//!
//! [[sections]]
//! id = "work"
//! title = "Work"
//! color = "#228B22"        # optional fixed background
//!
//! [[sections.slides]]
//! title = "Project One"
//!
//! [[sections.slides]]
//! title = "Project Two"
//!
//! [[sections]]
//! id = "showreel"
//! title = "Showreel"
//! media = "https://www.youtube.com/embed/xyz"   # suppresses color cycling
//! ```
//!
//! Section ordinals are positional: the n-th `[[sections]]` entry has
//! index n, so positions are contiguous 0..N-1 by construction.

use std::path::Path;

use serde::Deserialize;

use crate::color::Rgb;
use crate::error::{Error, Result};

/// One horizontal sub-item within a section.
#[derive(Debug, Clone, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// One full-viewport section in the vertical sequence.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    /// Stable identifier, used for the title fragment and `--section`.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Explicit background override; honored verbatim when present.
    #[serde(default)]
    pub color: Option<Rgb>,
    /// Embedded-media URL; suppresses background color cycling.
    #[serde(default)]
    pub media: Option<String>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Section {
    pub fn has_media(&self) -> bool {
        self.media.is_some()
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// An ordered, non-empty sequence of sections.
#[derive(Debug, Clone, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Deck {
    /// Load and validate a deck from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::deck_not_found(path));
        }
        let raw = std::fs::read_to_string(path)?;
        let deck: Deck = toml::from_str(&raw)?;
        deck.validate(path)?;
        Ok(deck)
    }

    /// Validate the discovered sections: non-empty, unique non-empty ids.
    pub fn validate(&self, path: &Path) -> Result<()> {
        if self.sections.is_empty() {
            return Err(Error::deck_empty(path));
        }
        for (i, section) in self.sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(Error::deck(format!("section {i} has an empty id")));
            }
            if self.sections[..i].iter().any(|s| s.id == section.id) {
                return Err(Error::deck(format!("duplicate section id '{}'", section.id)));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Slide count of a section; 0 for an out-of-range index.
    pub fn slide_count(&self, index: usize) -> usize {
        self.sections.get(index).map_or(0, Section::slide_count)
    }

    /// Resolve a section id to its ordinal position.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }
}
