//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Raw Pointer Input
    // ─────────────────────────────────────────────────────────
    /// Mouse wheel event; positive delta scrolls down (forward)
    Wheel { delta: i32 },
    /// Pointer pressed at terminal cell (column, row)
    PointerDown { x: u16, y: u16 },
    /// Pointer released at terminal cell (column, row)
    PointerUp { x: u16, y: u16 },

    // ─────────────────────────────────────────────────────────
    // Navigation Commands
    // ─────────────────────────────────────────────────────────
    /// Single vertical step; +1 forward (down), -1 backward (up)
    StepVertical { direction: i8 },
    /// Single horizontal step within the active section; +1 right, -1 left
    StepHorizontal { direction: i8 },
    /// Multi-step push transition to a section index (menu activation)
    JumpTo { target: usize },

    // ─────────────────────────────────────────────────────────
    // Timer Completions
    // ─────────────────────────────────────────────────────────
    /// The fixed transition duration elapsed; unlock and clear loop style
    TransitionFinished,
    /// The inter-step delay of an in-flight jump elapsed
    JumpStepDue,

    // ─────────────────────────────────────────────────────────
    // Viewport
    // ─────────────────────────────────────────────────────────
    /// Terminal resized (columns, rows)
    Resize { width: u16, height: u16 },
}
