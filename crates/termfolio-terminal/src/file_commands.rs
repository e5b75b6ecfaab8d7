//! Filesystem commands: ls, cat, pwd, cd, mkdir, touch, rm, cp, mv, chmod, chown.
//!
//! All of them read the simulated tree; the "mutating" ones only report what
//! they would have done.

use termfolio_vfs::VfsEntry;

use crate::interpreter::{
    Command, CommandOutput, CommandRegistry, Environment, first_operand, has_flag,
};

/// Register the filesystem commands.
pub fn register_file_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CatCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(MkdirCmd));
    reg.register(Box::new(TouchCmd));
    reg.register(Box::new(RmCmd));
    reg.register(Box::new(CpCmd));
    reg.register(Box::new(MvCmd));
    reg.register(Box::new(ChmodCmd));
    reg.register(Box::new(ChownCmd));
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List directory contents"
    }
    fn usage(&self) -> &str {
        "ls [-a] [-l] [path]"
    }
    fn category(&self) -> &str {
        "files"
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let show_all = has_flag(args, &["-a", "-la", "-al"]);
        let long = has_flag(args, &["-l", "-la", "-al"]);
        let home = env.fs.home();
        let path = first_operand(args).unwrap_or(home);
        // Unknown directories fall back to home; the header keeps the name asked for.
        let entries = env
            .fs
            .list_entries(path)
            .or_else(|| env.fs.list_entries(home))
            .unwrap_or_default();

        if long {
            let handle = env.handle();
            let mut lines = vec![format!("total {}", entries.len())];
            if show_all {
                lines.push(format!("drwxr-xr-x  2 {handle} users 4096 Jan 01 00:00 ."));
                lines.push(format!("drwxr-xr-x  3 {handle} users 4096 Jan 01 00:00 .."));
            }
            for (i, raw) in entries.iter().enumerate() {
                let entry = VfsEntry::new(raw);
                if entry.is_hidden() && !show_all {
                    continue;
                }
                let (mode, size) = if entry.is_dir() {
                    ("drwxr-xr-x", "4096")
                } else {
                    ("-rw-r--r--", " 256")
                };
                lines.push(format!(
                    "{mode}  1 {handle} users {size} Jan 01 00:{i:02}  {}",
                    entry.name()
                ));
            }
            return CommandOutput::text(lines.join("\n"));
        }

        let visible: Vec<&str> = entries
            .iter()
            .map(String::as_str)
            .filter(|raw| show_all || !VfsEntry::new(raw).is_hidden())
            .collect();
        CommandOutput::section(format!("Contents of {path}:"), visible.join("  "))
    }
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

/// Names that are commands rather than files.
const COMMAND_NOT_FILE: &[&str] = &["about", "projects", "skills"];

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "Print file contents"
    }
    fn usage(&self) -> &str {
        "cat <file>"
    }
    fn category(&self) -> &str {
        "files"
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let Some(&name) = args.first() else {
            return CommandOutput::error("cat: missing file operand");
        };
        if let Some(content) = env.fs.read_file(name) {
            return CommandOutput::text(content);
        }
        if COMMAND_NOT_FILE.contains(&name) {
            return CommandOutput::text(format!("Try running the '{name}' command directly!"));
        }
        CommandOutput::error(format!("cat: {name}: No such file or directory"))
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print working directory"
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn category(&self) -> &str {
        "files"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandOutput {
        CommandOutput::text(format!("/home/{}/portfolio", env.handle()))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Change directory"
    }
    fn usage(&self) -> &str {
        "cd [dir]"
    }
    fn category(&self) -> &str {
        "files"
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let home = env.fs.home();
        let dir = args.first().copied().unwrap_or(home);
        let known = dir == home
            || dir == ".."
            || env.fs.is_dir(dir)
            || env.fs.is_dir(&format!("{home}/{dir}"));
        if known {
            CommandOutput::text(format!("Changed directory to {dir}"))
        } else {
            CommandOutput::error(format!("cd: {dir}: No such directory"))
        }
    }
}

// ---------------------------------------------------------------------------
// mkdir / touch
// ---------------------------------------------------------------------------

struct MkdirCmd;
impl Command for MkdirCmd {
    fn name(&self) -> &str {
        "mkdir"
    }
    fn description(&self) -> &str {
        "Create directory"
    }
    fn usage(&self) -> &str {
        "mkdir <dir>"
    }
    fn category(&self) -> &str {
        "files"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        match args.first() {
            Some(dir) => CommandOutput::text(format!("mkdir: created directory '{dir}'")),
            None => CommandOutput::error("mkdir: missing operand"),
        }
    }
}

struct TouchCmd;
impl Command for TouchCmd {
    fn name(&self) -> &str {
        "touch"
    }
    fn description(&self) -> &str {
        "Create empty file"
    }
    fn usage(&self) -> &str {
        "touch <file>"
    }
    fn category(&self) -> &str {
        "files"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        match args.first() {
            Some(file) => CommandOutput::text(format!("touch: created file '{file}'")),
            None => CommandOutput::error("touch: missing file operand"),
        }
    }
}

// ---------------------------------------------------------------------------
// rm
// ---------------------------------------------------------------------------

/// Targets that make `rm -rf` refuse outright.
const PROTECTED_TARGETS: &[&str] = &["/", "~", "*"];

struct RmCmd;
impl Command for RmCmd {
    fn name(&self) -> &str {
        "rm"
    }
    fn description(&self) -> &str {
        "Remove file"
    }
    fn usage(&self) -> &str {
        "rm [-rf] <file>"
    }
    fn category(&self) -> &str {
        "files"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        if has_flag(args, &["-rf"]) && has_flag(args, PROTECTED_TARGETS) {
            return CommandOutput::error(
                "[ PERMISSION DENIED ]\nNice try! This is a simulated filesystem.",
            );
        }
        match first_operand(args) {
            Some(file) => CommandOutput::text(format!("rm: removed '{file}'")),
            None => CommandOutput::error("rm: missing operand"),
        }
    }
}

// ---------------------------------------------------------------------------
// cp / mv
// ---------------------------------------------------------------------------

struct CpCmd;
impl Command for CpCmd {
    fn name(&self) -> &str {
        "cp"
    }
    fn description(&self) -> &str {
        "Copy file"
    }
    fn usage(&self) -> &str {
        "cp <src> <dst>"
    }
    fn category(&self) -> &str {
        "files"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        match args {
            [src, dst, ..] => CommandOutput::text(format!("cp: copied '{src}' to '{dst}'")),
            _ => CommandOutput::error("cp: missing destination file operand"),
        }
    }
}

struct MvCmd;
impl Command for MvCmd {
    fn name(&self) -> &str {
        "mv"
    }
    fn description(&self) -> &str {
        "Move or rename file"
    }
    fn usage(&self) -> &str {
        "mv <src> <dst>"
    }
    fn category(&self) -> &str {
        "files"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        match args {
            [src, dst, ..] => CommandOutput::text(format!("mv: moved '{src}' to '{dst}'")),
            _ => CommandOutput::error("mv: missing destination file operand"),
        }
    }
}

// ---------------------------------------------------------------------------
// chmod / chown
// ---------------------------------------------------------------------------

struct ChmodCmd;
impl Command for ChmodCmd {
    fn name(&self) -> &str {
        "chmod"
    }
    fn description(&self) -> &str {
        "Change file permissions"
    }
    fn usage(&self) -> &str {
        "chmod <mode> <file>"
    }
    fn category(&self) -> &str {
        "files"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        match args {
            [mode, file, ..] => {
                CommandOutput::text(format!("chmod: mode of '{file}' changed to {mode}"))
            },
            _ => CommandOutput::error("chmod: missing operand"),
        }
    }
}

struct ChownCmd;
impl Command for ChownCmd {
    fn name(&self) -> &str {
        "chown"
    }
    fn description(&self) -> &str {
        "Change file owner"
    }
    fn usage(&self) -> &str {
        "chown <owner> <file>"
    }
    fn category(&self) -> &str {
        "files"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::error("chown: operation not permitted (simulated filesystem)")
    }
}
