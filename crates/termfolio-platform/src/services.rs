//! Time service trait and desktop implementation.

use termfolio_types::error::Result;

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Weekday for a count of days since 1970-01-01 (a Thursday).
    pub fn from_epoch_days(days: u64) -> Self {
        match (days + 4) % 7 {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

/// A simple UTC wall-clock timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub weekday: Weekday,
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl WallTime {
    /// Break a Unix timestamp (seconds) into calendar fields.
    pub fn from_unix_secs(secs: u64) -> Self {
        let days = secs / 86400;
        let time_of_day = secs % 86400;
        let (year, month, day) = days_to_ymd(days);
        Self {
            year,
            month,
            day,
            hour: (time_of_day / 3600) as u8,
            minute: ((time_of_day % 3600) / 60) as u8,
            second: (time_of_day % 60) as u8,
            weekday: Weekday::from_epoch_days(days),
        }
    }

    /// English month name.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize]
    }

    /// `HH:MM:SS`.
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    /// Long form, e.g. `Friday, February 13, 2026 at 09:30:00 UTC`.
    pub fn long_form(&self) -> String {
        format!(
            "{}, {} {}, {} at {} UTC",
            self.weekday.name(),
            self.month_name(),
            self.day,
            self.year,
            self.clock(),
        )
    }
}

impl std::fmt::Display for WallTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

/// Abstraction over the host clock.
pub trait TimeService {
    /// Current wall-clock time.
    fn now(&self) -> Result<WallTime>;

    /// Seconds since the session started.
    fn uptime_secs(&self) -> Result<u64>;
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Default implementation using `std` facilities.
pub struct DesktopPlatform {
    start_time: std::time::Instant,
}

impl DesktopPlatform {
    pub fn new() -> Self {
        Self {
            start_time: std::time::Instant::now(),
        }
    }
}

impl Default for DesktopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeService for DesktopPlatform {
    fn now(&self) -> Result<WallTime> {
        use std::time::SystemTime as StdTime;
        let secs = StdTime::now()
            .duration_since(StdTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        // UTC only; the simulated shell has no notion of time zones.
        Ok(WallTime::from_unix_secs(secs))
    }

    fn uptime_secs(&self) -> Result<u64> {
        Ok(self.start_time.elapsed().as_secs())
    }
}

// ---------------------------------------------------------------------------
// Date helper
// ---------------------------------------------------------------------------

/// Convert days since Unix epoch to (year, month, day).
pub(crate) fn days_to_ymd(mut days: u64) -> (u16, u8, u8) {
    let mut year = 1970u16;
    loop {
        let year_days = if is_leap(year) { 366 } else { 365 };
        if days < year_days {
            break;
        }
        days -= year_days;
        year += 1;
    }
    let leap = is_leap(year);
    let month_days: [u64; 12] = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut month = 0u8;
    for (i, &md) in month_days.iter().enumerate() {
        if days < md {
            month = (i + 1) as u8;
            break;
        }
        days -= md;
    }
    if month == 0 {
        month = 12;
    }
    (year, month, (days + 1) as u8)
}

pub(crate) fn is_leap(y: u16) -> bool {
    (y.is_multiple_of(4) && !y.is_multiple_of(100)) || y.is_multiple_of(400)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed clock for handler tests.
    struct MockTimeService {
        time: WallTime,
        uptime: u64,
    }

    impl TimeService for MockTimeService {
        fn now(&self) -> Result<WallTime> {
            Ok(self.time)
        }

        fn uptime_secs(&self) -> Result<u64> {
            Ok(self.uptime)
        }
    }

    #[test]
    fn mock_time_service_now() {
        let svc = MockTimeService {
            time: WallTime::from_unix_secs(1_771_000_000),
            uptime: 42,
        };
        assert_eq!(svc.now().unwrap().year, 2026);
        assert_eq!(svc.uptime_secs().unwrap(), 42);
    }

    #[test]
    fn epoch_is_thursday() {
        let t = WallTime::from_unix_secs(0);
        assert_eq!((t.year, t.month, t.day), (1970, 1, 1));
        assert_eq!(t.weekday, Weekday::Thursday);
        assert_eq!(t.to_string(), "1970-01-01 00:00:00");
    }

    #[test]
    fn known_timestamp_breakdown() {
        // 2026-02-13 09:30:05 UTC.
        let t = WallTime::from_unix_secs(1_770_975_005);
        assert_eq!((t.year, t.month, t.day), (2026, 2, 13));
        assert_eq!((t.hour, t.minute, t.second), (9, 30, 5));
        assert_eq!(t.weekday, Weekday::Friday);
        assert_eq!(t.month_name(), "February");
    }

    #[test]
    fn long_form_layout() {
        let t = WallTime::from_unix_secs(1_770_975_005);
        assert_eq!(t.long_form(), "Friday, February 13, 2026 at 09:30:05 UTC");
    }

    #[test]
    fn desktop_clock_is_after_2024() {
        let platform = DesktopPlatform::new();
        assert!(platform.now().unwrap().year >= 2024);
        assert!(platform.uptime_secs().unwrap() < 60);
    }

    #[test]
    fn days_to_ymd_non_leap_year_feb_28() {
        // 2023-02-28 is day 19416 since epoch.
        let (y, m, d) = days_to_ymd(19416);
        assert_eq!((y, m, d), (2023, 2, 28));
    }

    #[test]
    fn days_to_ymd_december_31() {
        let (y, m, d) = days_to_ymd(364);
        assert_eq!((y, m, d), (1970, 12, 31));
    }

    #[test]
    fn days_to_ymd_leap_day() {
        // 2024-02-29 is day 19782 since epoch.
        assert_eq!(days_to_ymd(19782), (2024, 2, 29));
    }

    #[test]
    fn is_leap_rules() {
        assert!(is_leap(2024));
        assert!(!is_leap(2023));
        assert!(!is_leap(1900));
        assert!(is_leap(2000));
    }
}
