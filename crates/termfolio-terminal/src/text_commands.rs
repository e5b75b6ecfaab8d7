//! Search and text commands: grep, find, head, tail, wc, cut.
//!
//! These produce canned results; only the arguments they echo back vary.

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment, first_operand};

/// Register the search and text commands.
pub fn register_text_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(GrepCmd));
    reg.register(Box::new(FindCmd));
    reg.register(Box::new(HeadCmd));
    reg.register(Box::new(TailCmd));
    reg.register(Box::new(WcCmd));
    reg.register(Box::new(CutCmd));
}

/// Line count used by head/tail when `-n` is absent or unparseable.
const DEFAULT_LINES: usize = 10;

/// Parse `-n N`. Missing, non-numeric, or zero values give the default.
fn line_count(args: &[&str]) -> usize {
    args.iter()
        .position(|a| *a == "-n")
        .and_then(|i| args.get(i + 1))
        .and_then(|n| n.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_LINES)
}

/// First operand that is neither a flag nor the value of `-n`.
fn file_operand<'a>(args: &[&'a str]) -> Option<&'a str> {
    let mut skip_next = false;
    for &arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" {
            skip_next = true;
            continue;
        }
        if !arg.starts_with('-') {
            return Some(arg);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// grep
// ---------------------------------------------------------------------------

/// Patterns with a canned hit list.
const KNOWN_PATTERNS: &[&str] = &["security", "cyber"];

struct GrepCmd;
impl Command for GrepCmd {
    fn name(&self) -> &str {
        "grep"
    }
    fn description(&self) -> &str {
        "Search for a pattern"
    }
    fn usage(&self) -> &str {
        "grep <pattern> [file]"
    }
    fn category(&self) -> &str {
        "search"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        let Some(&pattern) = args.first() else {
            return CommandOutput::error("grep: missing pattern");
        };
        if KNOWN_PATTERNS.contains(&pattern.to_lowercase().as_str()) {
            return CommandOutput::text(format!(
                "Searching for '{pattern}'...\n\
                 skills.txt: Cybersecurity, Penetration Testing, Network Security\n\
                 about.txt: ...passion for Cybersecurity...\n\
                 projects.txt: Security Scanner, Secure Auth System"
            ));
        }
        let scope = args
            .get(1)
            .map(|file| format!(" in {file}"))
            .unwrap_or_default();
        CommandOutput::text(format!(
            "grep: searching for '{pattern}'{scope}...\nNo matches found"
        ))
    }
}

// ---------------------------------------------------------------------------
// find
// ---------------------------------------------------------------------------

struct FindCmd;
impl Command for FindCmd {
    fn name(&self) -> &str {
        "find"
    }
    fn description(&self) -> &str {
        "Find files by name"
    }
    fn usage(&self) -> &str {
        "find [-name <name>]"
    }
    fn category(&self) -> &str {
        "search"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        let name = match args.iter().position(|a| *a == "-name") {
            Some(i) => args.get(i + 1).copied(),
            None => args.first().copied(),
        }
        .unwrap_or("*");
        CommandOutput::text(format!(
            "find: searching for '{name}'...\n\
             ./portfolio/about.txt\n\
             ./portfolio/projects/\n\
             ./portfolio/skills.txt\n\
             ./portfolio/resume.pdf\n\
             ./portfolio/contact.txt"
        ))
    }
}

// ---------------------------------------------------------------------------
// head / tail
// ---------------------------------------------------------------------------

struct HeadCmd;
impl Command for HeadCmd {
    fn name(&self) -> &str {
        "head"
    }
    fn description(&self) -> &str {
        "Show the start of a file"
    }
    fn usage(&self) -> &str {
        "head [-n N] [file]"
    }
    fn category(&self) -> &str {
        "search"
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let lines = line_count(args);
        let file = file_operand(args).unwrap_or("stdin");
        let about = env.content.about();
        let top_skills: Vec<&str> = env
            .content
            .skills()
            .iter()
            .flat_map(|c| c.items.iter().map(String::as_str))
            .take(4)
            .collect();
        let body = format!(
            "{}\n{}\nLocation: {}\nEmail: [see contact command]\nStatus: {}\n---\nSkills: {}",
            about.name,
            about.tagline,
            about.location,
            about.status,
            top_skills.join(", ")
        );
        CommandOutput::section(format!("head: showing first {lines} lines of {file}:"), body)
    }
}

struct TailCmd;
impl Command for TailCmd {
    fn name(&self) -> &str {
        "tail"
    }
    fn description(&self) -> &str {
        "Show the end of a file"
    }
    fn usage(&self) -> &str {
        "tail [-n N] [file]"
    }
    fn category(&self) -> &str {
        "search"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        let lines = line_count(args);
        let file = file_operand(args).unwrap_or("stdin");
        CommandOutput::section(
            format!("tail: showing last {lines} lines of {file}:"),
            "[SIMULATED LOG DATA]\n\
             [----] System initialized\n\
             [----] Loading portfolio data...\n\
             [----] Terminal ready\n\
             [----] Waiting for input...\n\
             [----] User connected\n\
             [----] Session started",
        )
    }
}

// ---------------------------------------------------------------------------
// wc
// ---------------------------------------------------------------------------

struct WcCmd;
impl Command for WcCmd {
    fn name(&self) -> &str {
        "wc"
    }
    fn description(&self) -> &str {
        "Count lines, words and bytes"
    }
    fn usage(&self) -> &str {
        "wc [file]"
    }
    fn category(&self) -> &str {
        "search"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        let file = first_operand(args).unwrap_or("portfolio");
        CommandOutput::table(
            &["lines", "words", "bytes", "file"],
            vec![vec![
                "42".to_string(),
                "256".to_string(),
                "2048".to_string(),
                file.to_string(),
            ]],
        )
    }
}

// ---------------------------------------------------------------------------
// cut
// ---------------------------------------------------------------------------

struct CutCmd;
impl Command for CutCmd {
    fn name(&self) -> &str {
        "cut"
    }
    fn description(&self) -> &str {
        "Extract fields from lines"
    }
    fn usage(&self) -> &str {
        "cut [-d delim] [-f fields] [file]"
    }
    fn category(&self) -> &str {
        "search"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let handle = env.handle();
        CommandOutput::text(format!(
            "cut: extracting fields...\n{handle}:x:1000:1000:{}:/home/{handle}:/bin/bash",
            env.content.about().name
        ))
    }
}
