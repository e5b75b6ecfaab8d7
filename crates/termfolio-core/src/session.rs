//! Session state: input buffer, transcript, command history, recall cursor.
//!
//! The transcript is append-only; the only other mutation is truncating it
//! completely. History keeps every submitted line, duplicates included.

use termfolio_terminal::{CommandOutput, CommandRegistry, Content, REFERENCE_TRIGGER};

/// Shown after `?` is submitted.
pub const REFERENCE_NOTICE: &str = "Opening command reference... (press any key to close)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Echo of a submitted line.
    Command,
    Output,
    Error,
}

/// One rendered transcript item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// Unique for the lifetime of the session, increasing.
    pub id: u64,
    pub kind: EntryKind,
    pub content: Content,
    /// The submitted line, for `Command` entries.
    pub command: Option<String>,
}

/// What a submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing changed.
    Ignored,
    /// A payload was appended.
    Output { is_error: bool },
    /// The transcript was wiped.
    Cleared,
    /// Nothing was appended beyond the echo.
    Silent,
    /// `?` was submitted; the caller should open the reference overlay.
    ReferenceRequested,
}

#[derive(Debug, Default)]
pub struct Session {
    input: String,
    transcript: Vec<TranscriptEntry>,
    history: Vec<String>,
    cursor: Option<usize>,
    next_id: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Input buffer --

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// Delete the last character. Returns whether anything was removed.
    pub fn backspace(&mut self) -> bool {
        self.input.pop().is_some()
    }

    // -- Read access --

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Index into history while browsing with Up/Down.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    // -- Submission --

    /// Submit the current input buffer.
    pub fn submit_input<F>(&mut self, dispatch: F) -> SubmitOutcome
    where
        F: FnOnce(&str, &[String]) -> CommandOutput,
    {
        let line = std::mem::take(&mut self.input);
        let outcome = self.submit(&line, dispatch);
        if outcome == SubmitOutcome::Ignored {
            self.input = line;
        }
        outcome
    }

    /// Submit `raw` as if typed and entered.
    ///
    /// Blank input is a no-op. Otherwise the trimmed line is echoed, recorded
    /// in history, and handed to `dispatch` together with the history (which
    /// already includes it). The input buffer is cleared afterwards.
    pub fn submit<F>(&mut self, raw: &str, dispatch: F) -> SubmitOutcome
    where
        F: FnOnce(&str, &[String]) -> CommandOutput,
    {
        let line = raw.trim();
        if line.is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.append(
            EntryKind::Command,
            Content::Text(line.to_string()),
            Some(line.to_string()),
        );
        self.history.push(line.to_string());
        self.cursor = None;

        let output = dispatch(line, &self.history);
        let mut outcome = match output {
            CommandOutput::Cleared => {
                self.hard_clear();
                SubmitOutcome::Cleared
            },
            CommandOutput::Output { content, is_error } => {
                let kind = if is_error {
                    EntryKind::Error
                } else {
                    EntryKind::Output
                };
                self.append(kind, content, None);
                SubmitOutcome::Output { is_error }
            },
            CommandOutput::Empty => SubmitOutcome::Silent,
        };

        if line == REFERENCE_TRIGGER {
            self.append(
                EntryKind::Output,
                Content::Text(REFERENCE_NOTICE.to_string()),
                None,
            );
            outcome = SubmitOutcome::ReferenceRequested;
        }

        self.input.clear();
        outcome
    }

    fn append(&mut self, kind: EntryKind, content: Content, command: Option<String>) {
        let id = self.next_id;
        self.next_id += 1;
        self.transcript.push(TranscriptEntry {
            id,
            kind,
            content,
            command,
        });
    }

    /// Truncate the transcript. History is kept.
    pub fn hard_clear(&mut self) {
        self.transcript.clear();
    }

    // -- Recall --

    /// Step back through history (Up).
    pub fn recall_previous(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.cursor {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(idx);
        self.input = self.history[idx].clone();
    }

    /// Step forward through history (Down). Stepping past the newest entry
    /// leaves browsing mode with an empty buffer.
    pub fn recall_next(&mut self) {
        let Some(i) = self.cursor else {
            return;
        };
        let next = i + 1;
        if next >= self.history.len() {
            self.cursor = None;
            self.input.clear();
        } else {
            self.cursor = Some(next);
            self.input = self.history[next].clone();
        }
    }

    /// Replace the buffer with the first command name it prefixes.
    /// Returns whether a completion was applied.
    pub fn complete(&mut self, registry: &CommandRegistry) -> bool {
        match registry.complete(&self.input) {
            Some(name) => {
                self.input = name.to_string();
                true
            },
            None => false,
        }
    }
}
