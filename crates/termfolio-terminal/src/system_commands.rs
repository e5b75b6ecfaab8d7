//! System commands: whoami, uname, date, uptime, ps, top, kill, df, du, free.
//!
//! Only the clock is real (when a time service is supplied); everything else
//! is labelled simulated.

use termfolio_platform::{TimeService, WallTime};

use crate::interpreter::{
    Command, CommandOutput, CommandRegistry, Environment, first_operand, format_columns,
};

/// Placeholder shown wherever real system data would go.
const SIMULATED: &str = "[SIMULATED]";

/// Register the system commands.
pub fn register_system_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(UnameCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(UptimeCmd));
    reg.register(Box::new(PsCmd));
    reg.register(Box::new(TopCmd));
    reg.register(Box::new(KillCmd));
    reg.register(Box::new(DfCmd));
    reg.register(Box::new(DuCmd));
    reg.register(Box::new(FreeCmd));
}

fn now(time: Option<&dyn TimeService>) -> Option<WallTime> {
    let time = time?;
    match time.now() {
        Ok(t) => Some(t),
        Err(e) => {
            log::warn!("clock unavailable: {e}");
            None
        },
    }
}

fn clock_or_simulated(time: Option<&dyn TimeService>) -> String {
    now(time).map_or_else(|| SIMULATED.to_string(), |t| t.clock())
}

/// `uptime`-style duration: minutes below an hour, `H:MM` above.
fn format_uptime(secs: u64) -> String {
    let mins = secs / 60;
    if mins < 60 {
        format!("{mins} min")
    } else {
        format!("{}:{:02}", mins / 60, mins % 60)
    }
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

// ---------------------------------------------------------------------------
// whoami / uname
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Print current user"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let about = env.content.about();
        let mut text = format!("{}@portfolio-terminal\n{}", about.handle, about.name);
        if !about.tagline.is_empty() {
            text.push_str(&format!(" | {}", about.tagline));
        }
        CommandOutput::text(text)
    }
}

struct UnameCmd;
impl Command for UnameCmd {
    fn name(&self) -> &str {
        "uname"
    }
    fn description(&self) -> &str {
        "Print system information"
    }
    fn usage(&self) -> &str {
        "uname [-a]"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        if args.contains(&"-a") {
            CommandOutput::text("PortfolioOS 1.0.0-simulated #1 SMP x86_64 GNU/Linux")
        } else {
            CommandOutput::text("PortfolioOS")
        }
    }
}

// ---------------------------------------------------------------------------
// date / uptime
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Print current date and time"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandOutput {
        match now(env.time) {
            Some(t) => CommandOutput::text(t.long_form()),
            None => CommandOutput::text(SIMULATED),
        }
    }
}

struct UptimeCmd;
impl Command for UptimeCmd {
    fn name(&self) -> &str {
        "uptime"
    }
    fn description(&self) -> &str {
        "Show session uptime"
    }
    fn usage(&self) -> &str {
        "uptime"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let clock = clock_or_simulated(env.time);
        let up = env
            .time
            .and_then(|t| t.uptime_secs().ok())
            .map_or_else(|| SIMULATED.to_string(), format_uptime);
        CommandOutput::text(format!(
            "{clock} up {up}, 1 user, load average: 0.00, 0.00, 0.00"
        ))
    }
}

// ---------------------------------------------------------------------------
// ps / top / kill
// ---------------------------------------------------------------------------

struct PsCmd;
impl Command for PsCmd {
    fn name(&self) -> &str {
        "ps"
    }
    fn description(&self) -> &str {
        "List processes"
    }
    fn usage(&self) -> &str {
        "ps"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        let rows = ["bash", "termfolio", "ps"]
            .iter()
            .map(|cmd| row(&["[SIM]", "pts/0", "00:00:00", cmd]))
            .collect();
        CommandOutput::table(&["PID", "TTY", "TIME", "CMD"], rows)
    }
}

struct TopCmd;
impl Command for TopCmd {
    fn name(&self) -> &str {
        "top"
    }
    fn description(&self) -> &str {
        "Show system monitor"
    }
    fn usage(&self) -> &str {
        "top"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let clock = clock_or_simulated(env.time);
        let table = format_columns(&[
            row(&["PID", "USER", "%CPU", "%MEM", "TIME+", "COMMAND"]),
            row(&["[S]", env.handle(), "0.0", "0.0", "0:00.00", "termfolio"]),
        ]);
        CommandOutput::text(format!(
            "top - {clock} [SIMULATED OUTPUT]\n\
             Tasks: [SIM] total, 1 running\n\
             %Cpu(s): [SIMULATED]\n\
             MiB Mem: [SIMULATED]\n\n\
             {table}"
        ))
    }
}

struct KillCmd;
impl Command for KillCmd {
    fn name(&self) -> &str {
        "kill"
    }
    fn description(&self) -> &str {
        "Send a signal to a process"
    }
    fn usage(&self) -> &str {
        "kill [-signal] <pid>"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        match first_operand(args) {
            Some(pid) => {
                CommandOutput::text(format!("kill: [SIMULATED] sent signal to process {pid}"))
            },
            None => CommandOutput::error("kill: missing pid"),
        }
    }
}

// ---------------------------------------------------------------------------
// df / du / free
// ---------------------------------------------------------------------------

struct DfCmd;
impl Command for DfCmd {
    fn name(&self) -> &str {
        "df"
    }
    fn description(&self) -> &str {
        "Show disk space"
    }
    fn usage(&self) -> &str {
        "df"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        let table = format_columns(&[
            row(&["Filesystem", "Size", "Used", "Avail", "Use%", "Mounted on"]),
            row(&["/dev/sim0", "∞", "0", "∞", "0%", "/"]),
        ]);
        CommandOutput::section("[SIMULATED DISK USAGE]", table)
    }
}

struct DuCmd;
impl Command for DuCmd {
    fn name(&self) -> &str {
        "du"
    }
    fn description(&self) -> &str {
        "Show directory sizes"
    }
    fn usage(&self) -> &str {
        "du [path]"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::section(
            SIMULATED,
            "4.0K    ./about\n12K     ./projects\n8.0K    ./skills\n24K     total",
        )
    }
}

struct FreeCmd;
impl Command for FreeCmd {
    fn name(&self) -> &str {
        "free"
    }
    fn description(&self) -> &str {
        "Show memory usage"
    }
    fn usage(&self) -> &str {
        "free"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        let table = format_columns(&[
            row(&["", "total", "used", "free", "shared", "buff", "available"]),
            row(&["Mem:", "∞", "0", "∞", "0", "0", "∞"]),
        ]);
        CommandOutput::section("[SIMULATED MEMORY]", table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Fixture;

    #[test]
    fn whoami_shows_handle_and_name() {
        let fx = Fixture::new();
        let text = fx.text("whoami");
        assert!(text.starts_with("arivera@portfolio-terminal"));
        assert!(text.contains("Alex Rivera | Software Engineer"));
    }

    #[test]
    fn uname_variants() {
        let fx = Fixture::new();
        assert_eq!(fx.text("uname"), "PortfolioOS");
        assert_eq!(
            fx.text("uname -a"),
            "PortfolioOS 1.0.0-simulated #1 SMP x86_64 GNU/Linux"
        );
    }

    #[test]
    fn date_uses_clock() {
        let fx = Fixture::new();
        assert_eq!(fx.text("date"), "Friday, February 13, 2026 at 09:30:05 UTC");
    }

    #[test]
    fn date_without_clock_is_simulated() {
        let fx = Fixture::new();
        assert_eq!(fx.run_unclocked("date").plain_text(), "[SIMULATED]");
    }

    #[test]
    fn uptime_with_and_without_clock() {
        let fx = Fixture::new();
        assert_eq!(
            fx.text("uptime"),
            "09:30:05 up 1:02, 1 user, load average: 0.00, 0.00, 0.00"
        );
        assert!(
            fx.run_unclocked("uptime")
                .plain_text()
                .starts_with("[SIMULATED] up [SIMULATED]")
        );
    }

    #[test]
    fn format_uptime_ranges() {
        assert_eq!(format_uptime(59), "0 min");
        assert_eq!(format_uptime(600), "10 min");
        assert_eq!(format_uptime(3600), "1:00");
        assert_eq!(format_uptime(3725), "1:02");
    }

    #[test]
    fn ps_is_table() {
        let fx = Fixture::new();
        let out = fx.run("ps");
        match out.content() {
            Some(crate::Content::Table { headers, rows }) => {
                assert_eq!(headers[0], "PID");
                assert_eq!(rows.len(), 3);
            },
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn top_header_has_clock() {
        let fx = Fixture::new();
        let text = fx.text("top");
        assert!(text.starts_with("top - 09:30:05 [SIMULATED OUTPUT]"));
        assert!(text.contains("arivera"));
        assert!(fx.run_unclocked("top").plain_text().starts_with("top - [SIMULATED]"));
    }

    #[test]
    fn kill_requires_pid() {
        let fx = Fixture::new();
        assert_eq!(fx.error("kill"), "kill: missing pid");
        assert_eq!(fx.error("kill -9"), "kill: missing pid");
        assert_eq!(fx.text("kill -9 42"), "kill: [SIMULATED] sent signal to process 42");
    }

    #[test]
    fn disk_and_memory_are_simulated() {
        let fx = Fixture::new();
        assert!(fx.text("df").starts_with("[SIMULATED DISK USAGE]"));
        assert!(fx.text("du").ends_with("24K     total"));
        assert!(fx.text("free").contains("Mem:"));
    }
}
