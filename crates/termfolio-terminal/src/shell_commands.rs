//! Shell built-ins: echo, clear, history, alias, export, env, man, exit.

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register the shell built-ins.
pub fn register_shell_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(HistoryCmd));
    reg.register(Box::new(AliasCmd));
    reg.register(Box::new(ExportCmd));
    reg.register(Box::new(EnvCmd));
    reg.register(Box::new(ManCmd));
    reg.register(Box::new(ExitCmd));
}

// ---------------------------------------------------------------------------
// echo / clear
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print text"
    }
    fn usage(&self) -> &str {
        "echo [text...]"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::text(args.join(" "))
    }
}

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::Cleared
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

/// Shown when no session history is available.
const SAMPLE_HISTORY: &[&str] = &[
    "help", "about", "ls -la", "skills", "projects", "contact", "neofetch", "history",
];

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Show command history"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let entries: Vec<&str> = match env.history {
            Some(history) => history.iter().map(String::as_str).collect(),
            None => SAMPLE_HISTORY.to_vec(),
        };
        let lines: Vec<String> = entries
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{:>5}  {cmd}", i + 1))
            .collect();
        CommandOutput::text(lines.join("\n"))
    }
}

// ---------------------------------------------------------------------------
// alias / export / env
// ---------------------------------------------------------------------------

struct AliasCmd;
impl Command for AliasCmd {
    fn name(&self) -> &str {
        "alias"
    }
    fn description(&self) -> &str {
        "Show or define aliases"
    }
    fn usage(&self) -> &str {
        "alias [name=value]"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        if args.is_empty() {
            CommandOutput::text("alias ll='ls -la'\nalias cls='clear'")
        } else {
            CommandOutput::text(format!("alias: {}", args.join(" ")))
        }
    }
}

struct ExportCmd;
impl Command for ExportCmd {
    fn name(&self) -> &str {
        "export"
    }
    fn description(&self) -> &str {
        "Set an environment variable"
    }
    fn usage(&self) -> &str {
        "export VAR=value"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        if args.is_empty() {
            CommandOutput::text("export: usage: export VAR=value")
        } else {
            CommandOutput::text(format!("export: {}", args.join(" ")))
        }
    }
}

struct EnvCmd;
impl Command for EnvCmd {
    fn name(&self) -> &str {
        "env"
    }
    fn description(&self) -> &str {
        "Show environment variables"
    }
    fn usage(&self) -> &str {
        "env"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let handle = env.handle();
        CommandOutput::section(
            "[SIMULATED ENVIRONMENT]",
            format!(
                "USER={handle}\nHOME=/home/{handle}\nSHELL=/bin/bash\nTERM=xterm-256color\nPORTFOLIO=true"
            ),
        )
    }
}

// ---------------------------------------------------------------------------
// man
// ---------------------------------------------------------------------------

/// Hand-written pages; other registered commands get a generated one.
fn written_page(name: &str) -> Option<&'static str> {
    match name {
        "ls" => Some(
            "ls - list directory contents\n\n\
             SYNOPSIS: ls [OPTION]... [FILE]...\n\n\
             OPTIONS:\n  -a    show hidden files\n  -l    long listing format",
        ),
        "grep" => Some(
            "grep - search for patterns in files\n\n\
             SYNOPSIS: grep [PATTERN] [FILE]...\n\n\
             Searches for PATTERN in each FILE.",
        ),
        "cat" => Some(
            "cat - concatenate and print files\n\n\
             SYNOPSIS: cat [FILE]...\n\n\
             Prints file contents to stdout.",
        ),
        "help" => Some("help - display available commands\n\nType \"help\" to see portfolio commands."),
        _ => None,
    }
}

struct ManCmd;
impl Command for ManCmd {
    fn name(&self) -> &str {
        "man"
    }
    fn description(&self) -> &str {
        "Show the manual page for a command"
    }
    fn usage(&self) -> &str {
        "man <command>"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let Some(&topic) = args.first() else {
            return CommandOutput::error("What manual page do you want?");
        };
        let key = topic.to_lowercase();
        let page = match written_page(&key) {
            Some(page) => page.to_string(),
            None => match env.registry.and_then(|reg| reg.get(&key)) {
                Some(cmd) => format!(
                    "{} - {}\n\nSYNOPSIS: {}",
                    cmd.name(),
                    cmd.description(),
                    cmd.usage()
                ),
                None => format!("No manual entry for {topic}"),
            },
        };
        CommandOutput::section(format!("MANUAL: {}(1)", topic.to_uppercase()), page)
    }
}

// ---------------------------------------------------------------------------
// exit
// ---------------------------------------------------------------------------

struct ExitCmd;
impl Command for ExitCmd {
    fn name(&self) -> &str {
        "exit"
    }
    fn description(&self) -> &str {
        "Exit the terminal"
    }
    fn usage(&self) -> &str {
        "exit"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::text(
            "logout\n\
             Thanks for visiting! Feel free to come back anytime.\n\
             (Start a new session to log back in)",
        )
    }
}
