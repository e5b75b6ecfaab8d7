//! Presentation-agnostic input event types.
//!
//! Every front-end maps its native keyboard and pointer input to these enums.
//! The shell never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A presentation-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Printable character typed into the prompt.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// A named control key.
    KeyPress(Key),
    /// Pointer click, classified by what it landed on.
    Click(ClickTarget),
    /// User requested quit (window close, EOF, etc.).
    Quit,
}

impl InputEvent {
    /// Whether this event counts as a key press (for overlay dismissal).
    pub fn is_key(&self) -> bool {
        matches!(
            self,
            Self::TextInput(_) | Self::Backspace | Self::KeyPress(_)
        )
    }
}

/// Control keys the shell reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Submit the input line.
    Enter,
    /// Recall the previous command.
    Up,
    /// Recall the next command.
    Down,
    /// Complete the command name.
    Tab,
    /// Ctrl+L: wipe the transcript.
    ClearScreen,
    Escape,
    /// Any other key (modifiers, function keys, ...).
    Other,
}

/// Where a pointer click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClickTarget {
    /// Interactive content inside the reference overlay panel.
    OverlayContent,
    /// Anywhere else (backdrop, terminal window, page).
    Outside,
}
