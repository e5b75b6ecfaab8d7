//! TERMFOLIO core.
//!
//! Presentation-agnostic shell engine: the session transcript and command
//! recall, the timed reference overlay and its timer queue, and the
//! [`Shell`] that wires them to the interpreter. Front-ends feed
//! [`input::InputEvent`]s and elapsed time, and render what they read back.

// Re-exports from termfolio-types (foundation types).
pub use termfolio_types::config;
pub use termfolio_types::content;
pub use termfolio_types::error;
pub use termfolio_types::input;

pub mod overlay;
pub use termfolio_platform as platform;
pub mod session;
pub mod shell;
pub use termfolio_terminal as terminal;
pub mod timer;
pub use termfolio_vfs as vfs;

#[cfg(test)]
mod tests;

/// Feedback signal emitted by the shell.
pub use shell::Cue;
/// The running portfolio terminal.
pub use shell::Shell;
