//! Color math: hex parsing, perceptual luminance, and text contrast
//!
//! The contrast classification is a perceptual approximation (weighted
//! luminance against a fixed 0.5 threshold), not a strict WCAG contrast
//! ratio.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// Fixed luminance threshold separating dark from light backgrounds.
pub const CONTRAST_THRESHOLD: f64 = 0.5;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Weighted perceptual luminance, normalized to [0, 1].
    ///
    /// `L = 0.299 R + 0.587 G + 0.114 B` with channels in [0, 1].
    pub fn luminance(&self) -> f64 {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;
        r * 0.299 + g * 0.587 + b * 0.114
    }

    /// Classify which text color keeps content readable on this background.
    pub fn contrast(&self) -> TextContrast {
        if self.luminance() < CONTRAST_THRESHOLD {
            TextContrast::Light
        } else {
            TextContrast::Dark
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse a `#RRGGBB` hex string (leading `#` optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 {
            return Err(Error::deck(format!("invalid color '{s}', expected #RRGGBB")));
        }
        let channel = |range| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| Error::deck(format!("invalid color '{s}', expected #RRGGBB")))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Which text color a background needs to stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextContrast {
    /// Dark background, needs light text
    #[default]
    Light,
    /// Light background, needs dark text
    Dark,
}

/// The fixed background palette: 22 vibrant, distinct colors.
pub const PALETTE: [Rgb; 22] = [
    Rgb::new(0x87, 0xCE, 0xEB), // Sky Blue
    Rgb::new(0x93, 0x70, 0xDB), // Medium Purple
    Rgb::new(0xFF, 0x69, 0xB4), // Hot Pink
    Rgb::new(0xFF, 0xD7, 0x00), // Gold
    Rgb::new(0x22, 0x8B, 0x22), // Forest Green
    Rgb::new(0xDC, 0x14, 0x3C), // Crimson
    Rgb::new(0xFF, 0x45, 0x00), // Orange Red
    Rgb::new(0x20, 0xB2, 0xAA), // Light Sea Green
    Rgb::new(0xFF, 0x14, 0x93), // Deep Pink
    Rgb::new(0x32, 0xCD, 0x32), // Lime Green
    Rgb::new(0x41, 0x69, 0xE1), // Royal Blue
    Rgb::new(0xFF, 0x63, 0x47), // Tomato
    Rgb::new(0x00, 0xCE, 0xD1), // Dark Turquoise
    Rgb::new(0xAD, 0xFF, 0x2F), // Green Yellow
    Rgb::new(0xBA, 0x55, 0xD3), // Medium Orchid
    Rgb::new(0xFF, 0xA5, 0x00), // Orange
    Rgb::new(0x46, 0x82, 0xB4), // Steel Blue
    Rgb::new(0xFF, 0x00, 0xFF), // Magenta
    Rgb::new(0x98, 0xFB, 0x98), // Pale Green
    Rgb::new(0x6A, 0x5A, 0xCD), // Slate Blue
    Rgb::new(0xFF, 0x8C, 0x00), // Dark Orange
    Rgb::new(0x00, 0xFA, 0x9A), // Medium Spring Green
];
