//! The portfolio shell: session, interpreter, overlay and timers wired to
//! presentation-agnostic input events.

use std::time::Duration;

use termfolio_platform::{DesktopPlatform, TimeService};
use termfolio_terminal::reference::{ReferenceSection, command_reference};
use termfolio_terminal::{CommandOutput, CommandRegistry, Environment, register_builtins};
use termfolio_types::config::TerminalConfig;
use termfolio_types::content::Portfolio;
use termfolio_types::input::{InputEvent, Key};
use termfolio_vfs::SimulatedFs;

use crate::overlay::{Overlay, OverlayState};
use crate::session::{Session, SubmitOutcome};
use crate::timer::TimerQueue;

/// Feedback signal for the presentation layer (typically a sound).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Type,
    Backspace,
    Enter,
    Success,
    Error,
}

/// Everything a running portfolio terminal needs.
pub struct Shell {
    registry: CommandRegistry,
    content: Portfolio,
    fs: SimulatedFs,
    time: Option<Box<dyn TimeService>>,
    session: Session,
    overlay: Overlay,
    timers: TimerQueue,
}

impl Shell {
    /// A shell over `content` with the built-in commands and the host clock.
    pub fn new(content: Portfolio, config: &TerminalConfig) -> Self {
        let fs = SimulatedFs::from_content(&content);
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        log::info!(
            "Shell ready: {} commands for {}",
            registry.len(),
            content.about.handle
        );
        Self {
            registry,
            content,
            fs,
            time: Some(Box::new(DesktopPlatform::new())),
            session: Session::new(),
            overlay: Overlay::new(config.overlay),
            timers: TimerQueue::new(),
        }
    }

    /// Replace the clock (`None` makes time-based commands report
    /// `[SIMULATED]`).
    pub fn with_time_service(mut self, time: Option<Box<dyn TimeService>>) -> Self {
        self.time = time;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn content(&self) -> &Portfolio {
        &self.content
    }

    pub fn fs(&self) -> &SimulatedFs {
        &self.fs
    }

    pub fn overlay_state(&self) -> OverlayState {
        self.overlay.state()
    }

    /// Sections shown inside the overlay.
    pub fn reference(&self) -> Vec<ReferenceSection> {
        command_reference(&self.registry)
    }

    /// Pending timers (overlay tick and grace).
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Run one line through the interpreter without touching the session.
    pub fn dispatch(&self, line: &str) -> CommandOutput {
        Self::dispatch_with(
            &self.registry,
            &self.content,
            &self.fs,
            self.time.as_deref(),
            line,
            self.session.history(),
        )
    }

    fn dispatch_with(
        registry: &CommandRegistry,
        content: &Portfolio,
        fs: &SimulatedFs,
        time: Option<&dyn TimeService>,
        line: &str,
        history: &[String],
    ) -> CommandOutput {
        let mut env = Environment::new(content, fs).with_history(history);
        env.time = time;
        registry.dispatch(line, &env)
    }

    /// Submit `raw` as if typed and entered. Returns the resulting cues.
    pub fn submit(&mut self, raw: &str) -> Vec<Cue> {
        self.session.set_input(raw);
        self.submit_input()
    }

    fn submit_input(&mut self) -> Vec<Cue> {
        let Self {
            registry,
            content,
            fs,
            time,
            session,
            ..
        } = &mut *self;
        let time = time.as_deref();
        let outcome = session.submit_input(|line, history| {
            Self::dispatch_with(registry, content, fs, time, line, history)
        });
        match outcome {
            SubmitOutcome::Ignored => Vec::new(),
            SubmitOutcome::Output { is_error: false } => vec![Cue::Enter, Cue::Success],
            SubmitOutcome::Output { is_error: true } => vec![Cue::Enter, Cue::Error],
            SubmitOutcome::Cleared | SubmitOutcome::Silent => vec![Cue::Enter],
            SubmitOutcome::ReferenceRequested => {
                self.overlay.open(&mut self.timers);
                vec![Cue::Enter]
            },
        }
    }

    /// Feed one input event.
    ///
    /// While the overlay is open a key press past the grace period closes it;
    /// the key still reaches the prompt.
    pub fn handle_event(&mut self, event: &InputEvent) -> Vec<Cue> {
        if event.is_key() {
            self.overlay.on_key(&mut self.timers);
        }
        match event {
            InputEvent::TextInput(ch) => {
                self.session.push_char(*ch);
                vec![Cue::Type]
            },
            InputEvent::Backspace => {
                if self.session.backspace() {
                    vec![Cue::Backspace]
                } else {
                    Vec::new()
                }
            },
            InputEvent::KeyPress(key) => self.handle_key(*key),
            InputEvent::Click(target) => {
                self.overlay.on_click(*target, &mut self.timers);
                Vec::new()
            },
            InputEvent::Quit => Vec::new(),
        }
    }

    fn handle_key(&mut self, key: Key) -> Vec<Cue> {
        match key {
            Key::Enter => self.submit_input(),
            Key::Up => {
                self.session.recall_previous();
                Vec::new()
            },
            Key::Down => {
                self.session.recall_next();
                Vec::new()
            },
            Key::Tab => {
                if self.session.complete(&self.registry) {
                    vec![Cue::Type]
                } else {
                    Vec::new()
                }
            },
            Key::ClearScreen => {
                self.session.hard_clear();
                vec![Cue::Success]
            },
            Key::Escape | Key::Other => Vec::new(),
        }
    }

    /// Let `dt` of time pass, firing due timers one at a time.
    pub fn advance(&mut self, dt: Duration) {
        let until = self.timers.now() + dt;
        while let Some(id) = self.timers.pop_due(until) {
            if !self.overlay.on_timer(id, &mut self.timers) {
                log::trace!("unclaimed timer {id:?}");
            }
        }
    }
}
