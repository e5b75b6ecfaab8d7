//! Shared fixture for command tests.

use termfolio_platform::{TimeService, WallTime};
use termfolio_types::content::Portfolio;
use termfolio_types::error::Result;
use termfolio_vfs::SimulatedFs;

use crate::interpreter::{CommandOutput, CommandRegistry, Environment};

/// 2026-02-13 09:30:05 UTC, a Friday.
pub const FIXED_SECS: u64 = 1_770_975_005;

pub struct FixedClock {
    pub uptime: u64,
}

impl TimeService for FixedClock {
    fn now(&self) -> Result<WallTime> {
        Ok(WallTime::from_unix_secs(FIXED_SECS))
    }

    fn uptime_secs(&self) -> Result<u64> {
        Ok(self.uptime)
    }
}

pub struct Fixture {
    pub portfolio: Portfolio,
    pub fs: SimulatedFs,
    pub registry: CommandRegistry,
    pub clock: FixedClock,
}

impl Fixture {
    pub fn new() -> Self {
        let portfolio = Portfolio::builtin().unwrap();
        let fs = SimulatedFs::from_content(&portfolio);
        let mut registry = CommandRegistry::new();
        crate::register_builtins(&mut registry);
        Self {
            portfolio,
            fs,
            registry,
            clock: FixedClock { uptime: 3725 },
        }
    }

    /// Environment with the fixed clock and no history view.
    pub fn env(&self) -> Environment<'_> {
        Environment::new(&self.portfolio, &self.fs).with_time(&self.clock)
    }

    pub fn run(&self, line: &str) -> CommandOutput {
        self.registry.dispatch(line, &self.env())
    }

    /// Run without a clock.
    pub fn run_unclocked(&self, line: &str) -> CommandOutput {
        let env = Environment::new(&self.portfolio, &self.fs);
        self.registry.dispatch(line, &env)
    }

    pub fn text(&self, line: &str) -> String {
        let out = self.run(line);
        assert!(!out.is_error(), "{line} failed: {}", out.plain_text());
        out.plain_text()
    }

    pub fn error(&self, line: &str) -> String {
        let out = self.run(line);
        assert!(out.is_error(), "{line} should fail: {}", out.plain_text());
        out.plain_text()
    }
}
