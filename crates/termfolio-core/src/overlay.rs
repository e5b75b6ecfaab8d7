//! Timed command reference overlay.
//!
//! Opening starts a one-second countdown tick and a short grace timer. Keys
//! are ignored until the grace timer fires, so the key that submitted `?`
//! cannot close the overlay it just opened. Leaving the open state always
//! cancels both timers.

use std::time::Duration;

use termfolio_types::config::OverlayConfig;
use termfolio_types::input::ClickTarget;

use crate::timer::{TimerId, TimerQueue};

/// Countdown tick period.
const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Closed,
    /// Open with this many whole seconds left.
    Open { remaining: u32 },
}

/// Why the overlay closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Expired,
    Key,
    ClickOutside,
}

#[derive(Debug)]
pub struct Overlay {
    config: OverlayConfig,
    state: OverlayState,
    tick: Option<TimerId>,
    grace: Option<TimerId>,
    keys_enabled: bool,
}

impl Overlay {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            state: OverlayState::Closed,
            tick: None,
            grace: None,
            keys_enabled: false,
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open { .. })
    }

    /// Seconds left, when open.
    pub fn remaining(&self) -> Option<u32> {
        match self.state {
            OverlayState::Open { remaining } => Some(remaining),
            OverlayState::Closed => None,
        }
    }

    /// Whether a key press would close the overlay now.
    pub fn accepts_keys(&self) -> bool {
        self.is_open() && self.keys_enabled
    }

    /// Open (or re-open) with a full countdown. Prior timers are cancelled.
    pub fn open(&mut self, timers: &mut TimerQueue) {
        self.cancel_timers(timers);
        self.state = OverlayState::Open {
            remaining: self.config.duration_secs,
        };
        self.keys_enabled = false;
        self.tick = Some(timers.schedule_repeating(TICK));
        self.grace = Some(timers.schedule_once(self.config.grace()));
        log::debug!(
            "reference overlay opened for {}s",
            self.config.duration_secs
        );
    }

    /// Close and cancel timers. No-op when already closed.
    pub fn close(&mut self, timers: &mut TimerQueue, reason: CloseReason) {
        if !self.is_open() {
            return;
        }
        self.cancel_timers(timers);
        self.state = OverlayState::Closed;
        self.keys_enabled = false;
        log::debug!("reference overlay closed ({reason:?})");
    }

    /// React to a fired timer. Returns whether the timer belonged to the
    /// overlay.
    pub fn on_timer(&mut self, id: TimerId, timers: &mut TimerQueue) -> bool {
        if self.grace == Some(id) {
            self.grace = None;
            self.keys_enabled = true;
            return true;
        }
        if self.tick != Some(id) {
            return false;
        }
        if let OverlayState::Open { remaining } = &mut self.state {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                self.close(timers, CloseReason::Expired);
            }
        }
        true
    }

    /// A key was pressed. Returns whether it closed the overlay.
    pub fn on_key(&mut self, timers: &mut TimerQueue) -> bool {
        if !self.accepts_keys() {
            return false;
        }
        self.close(timers, CloseReason::Key);
        true
    }

    /// A click landed. Returns whether it closed the overlay.
    pub fn on_click(&mut self, target: ClickTarget, timers: &mut TimerQueue) -> bool {
        if !self.is_open() || target != ClickTarget::Outside {
            return false;
        }
        self.close(timers, CloseReason::ClickOutside);
        true
    }

    fn cancel_timers(&mut self, timers: &mut TimerQueue) {
        if let Some(id) = self.tick.take() {
            timers.cancel(id);
        }
        if let Some(id) = self.grace.take() {
            timers.cancel(id);
        }
    }
}
