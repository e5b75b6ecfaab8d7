//! Cooperative timer queue driven by host-supplied elapsed time.
//!
//! Nothing here reads a clock. The host pulls due timers one at a time with
//! [`TimerQueue::pop_due`] up to the instant it has reached, reacting to each
//! before the next is taken. Tests advance simulated time the same way.

use std::time::Duration;

/// Handle returned when scheduling; used to cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Shortest period a repeating timer may have.
const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    due: Duration,
    period: Option<Duration>,
}

/// Pending one-shot and repeating timers on a virtual timeline.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the queue was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Fire once, `delay` from now.
    pub fn schedule_once(&mut self, delay: Duration) -> TimerId {
        self.push(delay, None)
    }

    /// Fire every `period`, first after one period.
    pub fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        let period = period.max(MIN_PERIOD);
        self.push(period, Some(period))
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due: self.now + delay,
            period,
        });
        log::trace!("timer {id:?} scheduled in {delay:?} (period {period:?})");
        id
    }

    /// Remove a timer. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        let removed = self.timers.len() != before;
        if removed {
            log::trace!("timer {id:?} cancelled");
        }
        removed
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Number of pending timers.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Fire the earliest timer due at or before `until`, moving virtual time
    /// to its due instant.
    ///
    /// Returns one firing per call so the caller can cancel timers between
    /// firings; a cancelled timer never fires again, even within the same
    /// `until`. Once nothing else is due, time moves to `until` and `None`
    /// is returned. A repeating timer fires once per period crossed; timers
    /// due at the same instant fire in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerId> {
        let next = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(i, _)| i);
        let Some(i) = next else {
            self.now = self.now.max(until);
            return None;
        };
        let Timer { id, due, period } = self.timers[i].clone();
        self.now = self.now.max(due);
        match period {
            Some(period) => self.timers[i].due += period,
            None => {
                self.timers.swap_remove(i);
            },
        }
        Some(id)
    }
}
