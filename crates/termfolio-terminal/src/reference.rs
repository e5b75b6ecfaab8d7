//! Categorized command reference shown by the `?` overlay.

use crate::interpreter::CommandRegistry;

/// Command categories in display order, with their headings.
const SECTIONS: &[(&str, &str)] = &[
    ("portfolio", "Portfolio"),
    ("files", "Files"),
    ("search", "Search"),
    ("system", "System"),
    ("network", "Network"),
    ("shell", "Shell"),
    ("fun", "Easter Eggs"),
];

/// Keyboard hints listed under the commands.
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("Tab", "Autocomplete commands"),
    ("Up / Down", "Navigate command history"),
    ("Ctrl+L", "Clear the terminal"),
    ("?", "Open this reference"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub name: String,
    pub description: String,
}

/// One heading of the reference and its commands, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSection {
    pub title: String,
    pub entries: Vec<ReferenceEntry>,
}

/// Group the registered commands by category.
///
/// Commands whose category is not one of the known ones are collected under
/// a trailing "Other" heading. Empty sections are omitted.
pub fn command_reference(reg: &CommandRegistry) -> Vec<ReferenceSection> {
    let mut sections: Vec<ReferenceSection> = SECTIONS
        .iter()
        .map(|(_, title)| ReferenceSection {
            title: title.to_string(),
            entries: Vec::new(),
        })
        .collect();
    let mut other = Vec::new();

    for cmd in reg.commands() {
        let entry = ReferenceEntry {
            name: cmd.name().to_string(),
            description: cmd.description().to_string(),
        };
        match SECTIONS.iter().position(|(cat, _)| *cat == cmd.category()) {
            Some(i) => sections[i].entries.push(entry),
            None => other.push(entry),
        }
    }
    if !other.is_empty() {
        sections.push(ReferenceSection {
            title: "Other".to_string(),
            entries: other,
        });
    }
    sections.retain(|s| !s.entries.is_empty());
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{Command, CommandOutput, Environment};
    use crate::testing::Fixture;

    #[test]
    fn builtins_fill_every_section() {
        let fx = Fixture::new();
        let sections = command_reference(&fx.registry);
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Portfolio", "Files", "Search", "System", "Network", "Shell", "Easter Eggs"]
        );
        let total: usize = sections.iter().map(|s| s.entries.len()).sum();
        assert_eq!(total, fx.registry.len());
    }

    #[test]
    fn section_entries_keep_declared_order() {
        let fx = Fixture::new();
        let sections = command_reference(&fx.registry);
        let files: Vec<&str> = sections[1].entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            files,
            vec!["ls", "cat", "pwd", "cd", "mkdir", "touch", "rm", "cp", "mv", "chmod", "chown"]
        );
        assert_eq!(sections[6].entries[0].name, "sudo");
    }

    #[test]
    fn uncategorized_go_to_other() {
        struct Plain;
        impl Command for Plain {
            fn name(&self) -> &str {
                "plain"
            }
            fn description(&self) -> &str {
                "Uses the default category"
            }
            fn usage(&self) -> &str {
                "plain"
            }
            fn execute(&self, _: &[&str], _: &Environment<'_>) -> CommandOutput {
                CommandOutput::Empty
            }
        }
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(Plain));
        let sections = command_reference(&reg);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Other");
    }
}
