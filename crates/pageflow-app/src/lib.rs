//! # pageflow-app - Navigation State and Orchestration
//!
//! The controller core: position model, transition engine, input router,
//! color selector, and presentation sync, wired together through a
//! TEA-style update loop.
//!
//! Data flow: raw input event → [`message::Message`] → [`handler::update`]
//! mutates [`state::AppState`] → derived UI state in [`state::UiState`] is
//! rendered by the TUI crate. Timer completions come back as messages
//! (`TransitionFinished`, `JumpStepDue`) scheduled by the event loop from
//! [`handler::UpdateAction`]s.
//!
//! Everything in this crate is pure with respect to the terminal: no
//! rendering, no I/O beyond config loading, fully unit-testable.

pub mod config;
pub mod engine;
pub mod gesture;
pub mod handler;
pub mod input_key;
pub mod layout;
pub mod message;
pub mod selector;
pub mod state;
pub mod sync;

pub use config::{load_settings, Settings};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, NavState, UiState};
