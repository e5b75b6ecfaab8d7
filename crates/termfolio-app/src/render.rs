use termfolio_core::config::PromptConfig;
use termfolio_core::session::{EntryKind, TranscriptEntry};
use termfolio_core::terminal::reference::{KEY_HINTS, ReferenceSection};

/// ANSI clear screen + cursor home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn prompt(config: &PromptConfig) -> String {
    format!("{}@{}:~{} ", config.user, config.host, config.symbol)
}

/// Text for a transcript entry, or `None` for command echoes (the terminal
/// already shows what was typed).
pub fn entry_text(entry: &TranscriptEntry) -> Option<String> {
    match entry.kind {
        EntryKind::Command => None,
        EntryKind::Output => Some(entry.content.plain_text()),
        EntryKind::Error => Some(format!("error: {}", entry.content.plain_text())),
    }
}

/// The reference panel as a boxed text block.
pub fn reference(sections: &[ReferenceSection], remaining: u32) -> String {
    let mut out = vec![format!("==== Command Reference (closes in {remaining}s) ====")];
    for section in sections {
        out.push(String::new());
        out.push(format!("[{}]", section.title));
        for e in &section.entries {
            out.push(format!("  {:<10} {}", e.name, e.description));
        }
    }
    out.push(String::new());
    out.push("[Keys]".to_string());
    for (key, hint) in KEY_HINTS {
        out.push(format!("  {key:<10} {hint}"));
    }
    out.push("Press any key or click outside (:click) to close.".to_string());
    out.join("\n")
}

/// Tracks which transcript entries were already printed.
#[derive(Debug, Default)]
pub struct TranscriptCursor {
    next_id: u64,
    seen_len: usize,
}

impl TranscriptCursor {
    /// Entries not printed yet, and whether the transcript was wiped since
    /// the last call.
    pub fn fresh<'a>(
        &mut self,
        transcript: &'a [TranscriptEntry],
    ) -> (bool, Vec<&'a TranscriptEntry>) {
        let wiped = transcript.len() < self.seen_len
            || (self.seen_len > 0
                && transcript.first().is_some_and(|e| e.id >= self.next_id));
        let fresh: Vec<_> = transcript
            .iter()
            .filter(|e| e.id >= self.next_id)
            .collect();
        if let Some(last) = transcript.last() {
            self.next_id = self.next_id.max(last.id + 1);
        }
        self.seen_len = transcript.len();
        (wiped, fresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_core::terminal::Content;
    use termfolio_core::terminal::reference::ReferenceEntry;

    fn item(id: u64, kind: EntryKind, text: &str) -> TranscriptEntry {
        TranscriptEntry {
            id,
            kind,
            content: Content::Text(text.to_string()),
            command: None,
        }
    }

    #[test]
    fn default_prompt() {
        assert_eq!(prompt(&PromptConfig::default()), "guest@portfolio:~$ ");
    }

    #[test]
    fn command_echo_is_skipped() {
        assert_eq!(entry_text(&item(0, EntryKind::Command, "ls")), None);
        assert_eq!(
            entry_text(&item(1, EntryKind::Output, "a  b")).as_deref(),
            Some("a  b")
        );
        assert_eq!(
            entry_text(&item(2, EntryKind::Error, "nope")).as_deref(),
            Some("error: nope")
        );
    }

    #[test]
    fn reference_lists_sections_and_keys() {
        let sections = vec![ReferenceSection {
            title: "Portfolio".to_string(),
            entries: vec![ReferenceEntry {
                name: "about".to_string(),
                description: "Learn about me".to_string(),
            }],
        }];
        let text = reference(&sections, 12);
        assert!(text.contains("closes in 12s"));
        assert!(text.contains("[Portfolio]"));
        assert!(text.contains("  about      Learn about me"));
        assert!(text.contains("Autocomplete commands"));
    }

    #[test]
    fn cursor_yields_only_new_entries() {
        let mut cursor = TranscriptCursor::default();
        let t = vec![item(0, EntryKind::Command, "a"), item(1, EntryKind::Output, "b")];
        let (wiped, fresh) = cursor.fresh(&t);
        assert!(!wiped);
        assert_eq!(fresh.len(), 2);

        let t2 = vec![t[0].clone(), t[1].clone(), item(2, EntryKind::Output, "c")];
        let (wiped, fresh) = cursor.fresh(&t2);
        assert!(!wiped);
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].id, 2);
    }

    #[test]
    fn cursor_detects_wipe() {
        let mut cursor = TranscriptCursor::default();
        let t = vec![item(0, EntryKind::Command, "a"), item(1, EntryKind::Output, "b")];
        cursor.fresh(&t);

        let (wiped, fresh) = cursor.fresh(&[]);
        assert!(wiped);
        assert!(fresh.is_empty());

        let t2 = vec![item(2, EntryKind::Command, "x"), item(3, EntryKind::Output, "y")];
        let (wiped, fresh) = cursor.fresh(&t2);
        assert!(!wiped);
        assert_eq!(fresh.len(), 2);
    }

    #[test]
    fn cursor_detects_wipe_followed_by_new_output() {
        let mut cursor = TranscriptCursor::default();
        cursor.fresh(&[item(0, EntryKind::Command, "a")]);
        let binding = [item(5, EntryKind::Command, "b")];
        let (wiped, fresh) = cursor.fresh(&binding);
        assert!(wiped);
        assert_eq!(fresh.len(), 1);
    }
}
