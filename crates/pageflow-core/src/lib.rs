//! # pageflow-core - Core Domain Types
//!
//! Foundation crate for pageflow. Provides the deck model, color math,
//! responsive breakpoints, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, toml, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Deck Model (`deck`)
//! - [`Deck`] - An ordered, non-empty sequence of full-screen sections
//! - [`Section`] - One full-viewport section in the vertical sequence
//! - [`Slide`] - One horizontal sub-item within a section
//!
//! ### Color Math (`color`)
//! - [`Rgb`] - 24-bit color, parsed from `#RRGGBB` hex
//! - [`TextContrast`] - Light/dark text classification from luminance
//! - [`PALETTE`] - The fixed background palette (22 vibrant colors)
//!
//! ### Breakpoints (`breakpoint`)
//! - [`Breakpoint`] - Closed set of responsive size classes from terminal width
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pageflow_core::prelude::*;
//! ```

pub mod breakpoint;
pub mod color;
pub mod deck;
pub mod error;
pub mod logging;

/// Prelude for common imports used throughout all pageflow crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use breakpoint::Breakpoint;
pub use color::{Rgb, TextContrast, CONTRAST_THRESHOLD, PALETTE};
pub use deck::{Deck, Section, Slide};
pub use error::{Error, Result};
