//! TERMFOLIO line-mode entry point.
//!
//! Reads stdin line by line and feeds it to the shell as typed characters
//! plus Enter. Timers advance by the real time that passed between lines.
//! Usage: `termfolio [config.toml]`.

mod input;
mod render;

use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use input::LineInput;
use render::TranscriptCursor;
use termfolio_core::config::TerminalConfig;
use termfolio_core::content::Portfolio;
use termfolio_core::overlay::OverlayState;
use termfolio_core::terminal::REFERENCE_TRIGGER;
use termfolio_core::Shell;

const WELCOME: &str = "Welcome to the Terminal Portfolio!\n\
Type 'help' to see available commands, or '?' for the quick reference.\n\
Line directives: :up :down :tab <prefix> :clear :click :quit";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => TerminalConfig::load(Path::new(&path))
            .with_context(|| format!("loading config {path}"))?,
        None => TerminalConfig::default(),
    };
    let content = match &config.content {
        Some(path) => Portfolio::load(path)
            .with_context(|| format!("loading content {}", path.display()))?,
        None => {
            log::info!("No content file configured, using built-in sample");
            Portfolio::builtin()?
        },
    };
    log::info!(
        "Starting TERMFOLIO v{} for {}",
        env!("CARGO_PKG_VERSION"),
        content.about.name
    );

    let mut shell = Shell::new(content, &config);
    let prompt = render::prompt(&config.prompt);
    let mut cursor = TranscriptCursor::default();
    let mut last = Instant::now();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{WELCOME}\n")?;

    loop {
        write!(stdout, "{prompt}{}", shell.session().input())?;
        stdout.flush()?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line)?;

        let now = Instant::now();
        let was_open = shell.overlay_state() != OverlayState::Closed;
        shell.advance(now - last);
        last = now;
        if was_open && shell.overlay_state() == OverlayState::Closed {
            writeln!(stdout, "[reference closed]")?;
        }

        if read == 0 {
            break;
        }
        let events = match input::map_line(&line) {
            LineInput::Quit => break,
            LineInput::Events(events) => events,
        };
        let submitted = shell.session().history().len();
        for event in &events {
            let was_open = shell.overlay_state() != OverlayState::Closed;
            let cues = shell.handle_event(event);
            log::trace!("{event:?} -> {cues:?}");
            if was_open && shell.overlay_state() == OverlayState::Closed {
                writeln!(stdout, "[reference closed]")?;
            }
        }
        let opened = shell.session().history().len() > submitted
            && shell.session().history().last().map(String::as_str) == Some(REFERENCE_TRIGGER);

        let (wiped, fresh) = cursor.fresh(shell.session().transcript());
        if wiped {
            write!(stdout, "{}", render::CLEAR_SCREEN)?;
        }
        for entry in fresh {
            if let Some(text) = render::entry_text(entry) {
                writeln!(stdout, "{text}")?;
            }
        }
        if opened && let OverlayState::Open { remaining } = shell.overlay_state() {
            let panel = render::reference(&shell.reference(), remaining);
            writeln!(stdout, "\n{panel}\n")?;
        }
    }

    writeln!(stdout, "\nlogout")?;
    log::info!(
        "Session ended after {} commands",
        shell.session().history().len()
    );
    Ok(())
}
