//! Command interpreter for the portfolio shell.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name in a fixed declared order. The
//! interpreter splits input lines on whitespace, resolves the command name
//! case-insensitively, and dispatches `execute()`.

mod commands;
pub mod file_commands;
pub mod fun_commands;
mod interpreter;
pub mod network_commands;
pub mod reference;
pub mod shell_commands;
pub mod system_commands;
pub mod text_commands;

#[cfg(test)]
mod testing;

/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// Register the filesystem commands (ls, cat, cd, ...).
pub use file_commands::register_file_commands;
/// Register the easter-egg commands (sudo, neofetch, sl, ...).
pub use fun_commands::register_fun_commands;
/// A single executable command trait.
pub use interpreter::Command;
/// Result of dispatching one command line.
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch and completion.
pub use interpreter::CommandRegistry;
/// Renderable payload of a command result.
pub use interpreter::Content;
/// Read-only context passed to every command.
pub use interpreter::Environment;
/// The line that opens the command reference.
pub use interpreter::REFERENCE_TRIGGER;
/// Whitespace tokenizer used by the dispatcher.
pub use interpreter::tokenize;
/// Register the network commands (ifconfig, ping, curl, ...).
pub use network_commands::register_network_commands;
/// Register the shell built-ins (echo, clear, history, man, ...).
pub use shell_commands::register_shell_commands;
/// Register the system commands (whoami, date, ps, ...).
pub use system_commands::register_system_commands;
/// Register the search and text commands (grep, head, wc, ...).
pub use text_commands::register_text_commands;
