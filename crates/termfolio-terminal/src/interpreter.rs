//! Command trait, registry, and dispatch logic.
//!
//! A command line is split on runs of whitespace. The first token, lower-cased,
//! names the command; the remaining tokens are passed through untouched. There
//! is no quoting, piping, redirection, or variable expansion.

use std::collections::HashMap;

use termfolio_platform::TimeService;
use termfolio_types::content::ContentTable;
use termfolio_vfs::Filesystem;

/// The line that opens the command reference instead of running a command.
pub const REFERENCE_TRIGGER: &str = "?";

/// Renderable payload of a command result.
///
/// The presentation layer decides styling; [`Content::plain_text`] gives the
/// flat form used by text front-ends and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Plain text lines.
    Text(String),
    /// Tabular data (header row + data rows).
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// A titled block of text.
    Section { title: String, body: String },
}

impl Content {
    /// Flatten to text. Tables are rendered as space-aligned columns.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Table { headers, rows } => {
                let mut all = Vec::with_capacity(rows.len() + 1);
                all.push(headers.clone());
                all.extend(rows.iter().cloned());
                format_columns(&all)
            },
            Self::Section { title, body } => {
                if body.is_empty() {
                    title.clone()
                } else {
                    format!("{title}\n{body}")
                }
            },
        }
    }
}

/// Result of dispatching one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// The transcript must be wiped.
    Cleared,
    /// A payload to append, flagged as an error or not.
    Output { content: Content, is_error: bool },
    /// Nothing is appended.
    Empty,
}

impl CommandOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Output {
            content: Content::Text(text.into()),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::Output {
            content: Content::Text(text.into()),
            is_error: true,
        }
    }

    pub fn section(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Output {
            content: Content::Section {
                title: title.into(),
                body: body.into(),
            },
            is_error: false,
        }
    }

    pub fn table(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self::Output {
            content: Content::Table {
                headers: headers.iter().map(|h| h.to_string()).collect(),
                rows,
            },
            is_error: false,
        }
    }

    /// Whether this is an error payload.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Output { is_error: true, .. })
    }

    /// The payload, if any.
    pub fn content(&self) -> Option<&Content> {
        match self {
            Self::Output { content, .. } => Some(content),
            Self::Cleared | Self::Empty => None,
        }
    }

    /// Flat text of the payload; empty for `Cleared` and `Empty`.
    pub fn plain_text(&self) -> String {
        self.content().map(Content::plain_text).unwrap_or_default()
    }
}

/// Read-only context handed to every command.
///
/// Handlers never mutate session state; everything they may look at is
/// borrowed here.
#[derive(Clone, Copy)]
pub struct Environment<'a> {
    /// Biographical content.
    pub content: &'a dyn ContentTable,
    /// The simulated file system.
    pub fs: &'a dyn Filesystem,
    /// Wall clock for `date`, `uptime`, `top`.
    pub time: Option<&'a dyn TimeService>,
    /// Submitted command lines, oldest first, for `history`.
    pub history: Option<&'a [String]>,
    /// The dispatching registry, filled in by [`CommandRegistry::dispatch`].
    pub registry: Option<&'a CommandRegistry>,
}

impl<'a> Environment<'a> {
    pub fn new(content: &'a dyn ContentTable, fs: &'a dyn Filesystem) -> Self {
        Self {
            content,
            fs,
            time: None,
            history: None,
            registry: None,
        }
    }

    pub fn with_time(mut self, time: &'a dyn TimeService) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_history(mut self, history: &'a [String]) -> Self {
        self.history = Some(history);
        self
    }

    /// Login name of the simulated user.
    pub fn handle(&self) -> &'a str {
        &self.content.about().handle
    }
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types), lower-case.
    fn name(&self) -> &str;

    /// One-line description for `help`, `man` and the reference.
    fn description(&self) -> &str;

    /// Usage string (e.g. "ls \[-a\] \[-l\] \[path\]").
    fn usage(&self) -> &str;

    /// Command category for grouping in the reference.
    fn category(&self) -> &str {
        "general"
    }

    /// Run the command. User mistakes are reported as error output.
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> CommandOutput;
}

/// Registry of available commands with dispatch and completion.
///
/// Registration order is remembered; it is the order `complete` scans and the
/// order the reference lists commands in.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
    order: Vec<String>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name,
    /// keeping its original position.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_lowercase();
        if self.commands.insert(name.clone(), cmd).is_none() {
            self.order.push(name);
        }
    }

    /// Look up a command by exact (lower-case) name.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registered commands in declared order.
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.order.iter().filter_map(|name| self.get(name))
    }

    /// (name, description) pairs in declared order.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.commands()
            .map(|c| (c.name(), c.description()))
            .collect()
    }

    /// The first completion for `partial`, if any.
    pub fn complete(&self, partial: &str) -> Option<&str> {
        let lower = partial.to_lowercase();
        self.order
            .iter()
            .find(|name| name.starts_with(&lower))
            .map(String::as_str)
    }

    /// Parse and run one command line.
    ///
    /// Never fails: unknown commands produce an error payload, `?` produces
    /// [`CommandOutput::Empty`].
    pub fn dispatch(&self, line: &str, env: &Environment<'_>) -> CommandOutput {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed == REFERENCE_TRIGGER {
            return CommandOutput::Empty;
        }

        let tokens = tokenize(trimmed);
        let Some((first, args)) = tokens.split_first() else {
            return CommandOutput::Empty;
        };
        let name = first.to_lowercase();
        log::debug!("dispatch: {name} {args:?}");

        match self.commands.get(&name) {
            Some(cmd) => {
                let env = Environment {
                    registry: Some(self),
                    ..*env
                };
                cmd.execute(args, &env)
            },
            None => CommandOutput::error(format!(
                "Command not found: {first}\nType 'help' or '?' for available commands."
            )),
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a command line on runs of whitespace.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

// ---------------------------------------------------------------------------
// Argument helpers shared by the command modules.
// ---------------------------------------------------------------------------

/// First argument that does not look like a flag.
pub(crate) fn first_operand<'a>(args: &[&'a str]) -> Option<&'a str> {
    args.iter().copied().find(|a| !a.starts_with('-'))
}

/// Whether any of `flags` appears verbatim among `args`.
pub(crate) fn has_flag(args: &[&str], flags: &[&str]) -> bool {
    args.iter().any(|a| flags.contains(a))
}

/// Render rows as left-aligned columns separated by two spaces.
pub(crate) fn format_columns(rows: &[Vec<String>]) -> String {
    let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; cols];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    rows.iter()
        .map(|row| {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                line.push_str(cell);
                if i + 1 < row.len() {
                    let pad = widths[i] - cell.chars().count() + 2;
                    line.extend(std::iter::repeat_n(' ', pad));
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
