//! Easter eggs: sudo, apt, neofetch, matrix, hack, vim, nano, sl, reboot.

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register the easter-egg commands.
pub fn register_fun_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(SudoCmd));
    reg.register(Box::new(AptCmd));
    reg.register(Box::new(NeofetchCmd));
    reg.register(Box::new(MatrixCmd));
    reg.register(Box::new(HackCmd));
    reg.register(Box::new(VimCmd));
    reg.register(Box::new(NanoCmd));
    reg.register(Box::new(SlCmd));
    reg.register(Box::new(RebootCmd));
}

// ---------------------------------------------------------------------------
// sudo / apt
// ---------------------------------------------------------------------------

struct SudoCmd;
impl Command for SudoCmd {
    fn name(&self) -> &str {
        "sudo"
    }
    fn description(&self) -> &str {
        "Run a command as root"
    }
    fn usage(&self) -> &str {
        "sudo <command>"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let handle = env.handle();
        CommandOutput::error(format!(
            "[sudo] password for {handle}: ********\n\
             [SIMULATED] Sorry, user {handle} is not in the sudoers file.\n\
             Nice try! This is a portfolio terminal."
        ))
    }
}

struct AptCmd;
impl Command for AptCmd {
    fn name(&self) -> &str {
        "apt"
    }
    fn description(&self) -> &str {
        "Install packages"
    }
    fn usage(&self) -> &str {
        "apt <install|update> [package]"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::error(
            "E: [SIMULATED] Could not open lock file - permission denied\n\
             This is a simulated terminal.",
        )
    }
}

// ---------------------------------------------------------------------------
// neofetch
// ---------------------------------------------------------------------------

const TUX: &[&str] = &[
    "       .--.",
    "      |o_o |",
    "      |:_/ |",
    "     //   \\ \\",
    "    (|     | )",
    "   /'\\_   _/`\\",
    "   \\___)=(___/",
    "",
    "        ████████",
    "        ████████",
];

/// Column where the info block starts, right of the art.
const ART_WIDTH: usize = 21;

struct NeofetchCmd;
impl Command for NeofetchCmd {
    fn name(&self) -> &str {
        "neofetch"
    }
    fn description(&self) -> &str {
        "Show system info with art"
    }
    fn usage(&self) -> &str {
        "neofetch"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let title = format!("{}@portfolio", env.handle());
        let info = [
            title.clone(),
            "-".repeat(title.chars().count()),
            "OS: PortfolioOS 1.0.0".to_string(),
            format!("Host: termfolio {}", env!("CARGO_PKG_VERSION")),
            "Kernel: 1.0.0-simulated".to_string(),
            "Shell: Interactive CLI".to_string(),
            "Theme: Hacker Green".to_string(),
            "Terminal: Text-based".to_string(),
            "[SIMULATED SYSTEM]".to_string(),
        ];
        let lines: Vec<String> = TUX
            .iter()
            .enumerate()
            .map(|(i, art)| {
                let pad = ART_WIDTH.saturating_sub(art.chars().count());
                let line = match info.get(i) {
                    Some(text) => format!("{art}{}{text}", " ".repeat(pad)),
                    None => art.to_string(),
                };
                line.trim_end().to_string()
            })
            .collect();
        CommandOutput::text(lines.join("\n"))
    }
}

// ---------------------------------------------------------------------------
// matrix / hack
// ---------------------------------------------------------------------------

struct MatrixCmd;
impl Command for MatrixCmd {
    fn name(&self) -> &str {
        "matrix"
    }
    fn description(&self) -> &str {
        "Enter the Matrix"
    }
    fn usage(&self) -> &str {
        "matrix"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        let bar = "▓".repeat(38);
        CommandOutput::text(format!(
            "{bar}\n Wake up, Neo...\n The Matrix has you...\n Follow the white rabbit.\n\n Knock, knock.\n{bar}"
        ))
    }
}

struct HackCmd;
impl Command for HackCmd {
    fn name(&self) -> &str {
        "hack"
    }
    fn description(&self) -> &str {
        "Hack the mainframe"
    }
    fn usage(&self) -> &str {
        "hack"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::text(
            "[■■■■■■■■■■] ACCESSING MAINFRAME...\n\
             [■■■■■■■■■■] BYPASSING FIREWALL...\n\
             [■■■■■■■■■■] DECRYPTING PASSWORDS...\n\
             [■■■■□□□□□□] ACCESS DENIED\n\n\
             Just kidding! This is just a portfolio. Nice try though!",
        )
    }
}

// ---------------------------------------------------------------------------
// vim / nano
// ---------------------------------------------------------------------------

struct VimCmd;
impl Command for VimCmd {
    fn name(&self) -> &str {
        "vim"
    }
    fn description(&self) -> &str {
        "Open the editor"
    }
    fn usage(&self) -> &str {
        "vim [file]"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::section(
            "VIM - Vi IMproved",
            "Hint: To exit vim, type :q! and press Enter\n(Just kidding, this is a simulated terminal)",
        )
    }
}

struct NanoCmd;
impl Command for NanoCmd {
    fn name(&self) -> &str {
        "nano"
    }
    fn description(&self) -> &str {
        "Open the other editor"
    }
    fn usage(&self) -> &str {
        "nano [file]"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::text("nano: command not found. Try 'vim' instead (just kidding)")
    }
}

// ---------------------------------------------------------------------------
// sl / reboot
// ---------------------------------------------------------------------------

const LOCOMOTIVE: &str = r"      ====        ________                ___________
  _D _|  |_______/        \__I_I_____===__|_________|
   |(_)---  |   H\________/ |   |        =|___ ___|
   /     |  |   H  |  |     |   |         ||_| |_||
  |      |  |   H  |__--------------------| [___] |
  | ________|___H__/__|_____/[][]~\_______|       |
  |/ |   |-----------I_____I [][] []  D   |=======|__";

struct SlCmd;
impl Command for SlCmd {
    fn name(&self) -> &str {
        "sl"
    }
    fn description(&self) -> &str {
        "Steam locomotive"
    }
    fn usage(&self) -> &str {
        "sl"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::text(format!("{LOCOMOTIVE}\n\nYou meant 'ls', didn't you?"))
    }
}

struct RebootCmd;
impl Command for RebootCmd {
    fn name(&self) -> &str {
        "reboot"
    }
    fn description(&self) -> &str {
        "Restart the system"
    }
    fn usage(&self) -> &str {
        "reboot"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::text(
            "[SIMULATED] System is going down for reboot NOW!\n\
             (Start a new session to see the boot sequence again)",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Fixture;

    #[test]
    fn sudo_denied_with_handle() {
        let fx = Fixture::new();
        let text = fx.error("sudo rm -rf /");
        assert!(text.starts_with("[sudo] password for arivera: ********"));
        assert!(text.contains("not in the sudoers file"));
    }

    #[test]
    fn apt_denied() {
        let fx = Fixture::new();
        assert!(fx.error("apt install vim").starts_with("E: [SIMULATED] Could not open lock file"));
    }

    #[test]
    fn neofetch_aligns_info() {
        let fx = Fixture::new();
        let text = fx.text("neofetch");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), TUX.len());
        assert_eq!(lines[0], format!("       .--.{}arivera@portfolio", " ".repeat(10)));
        assert!(lines[1].ends_with(&"-".repeat("arivera@portfolio".len())));
        assert!(lines[8].ends_with("[SIMULATED SYSTEM]"));
        assert_eq!(lines[9], "        ████████");
    }

    #[test]
    fn easter_eggs_are_not_errors() {
        let fx = Fixture::new();
        for cmd in ["matrix", "hack", "vim", "nano", "sl", "reboot"] {
            assert!(!fx.text(cmd).is_empty(), "{cmd}");
        }
        assert!(fx.text("sl").ends_with("You meant 'ls', didn't you?"));
        assert!(fx.text("matrix").contains("Follow the white rabbit."));
    }
}
