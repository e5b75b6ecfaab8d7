//! Platform service abstractions for TERMFOLIO.
//!
//! The interpreter only ever asks the host for the wall-clock time and the
//! session uptime; everything else it reports is simulated.

mod services;

pub use services::{DesktopPlatform, TimeService, WallTime, Weekday};
