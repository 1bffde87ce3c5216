//! Terminal-agnostic key representation
//!
//! The TUI crate converts crossterm key events into this enum so the key
//! handlers stay free of terminal dependencies.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    CharCtrl(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
}
