//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing count of **elapsed
//! seconds since the start-of-day instant**; one simulation tick is one
//! second.  The mapping to wall-clock time is held in `DayClock`:
//!
//!   wall_time = start_of_day + elapsed_secs
//!
//! Using an integer second as the canonical unit means all deadline
//! arithmetic is exact (no floating-point drift) and comparisons are O(1).
//! Wall-clock strings (`8:35 AM`, `4:59:07 PM`) appear only at the
//! boundaries: parsing input data and formatting events.

use std::fmt;

use crate::error::TimeError;

pub const SECS_PER_MINUTE: u32 = 60;
pub const SECS_PER_HOUR: u32 = 3_600;
pub const SECS_PER_DAY: u32 = 86_400;

// ── ClockTime ─────────────────────────────────────────────────────────────────

/// An absolute time of day, stored as seconds past midnight.
///
/// Parses and formats the 12-hour `H:MM AM/PM` and `H:MM:SS AM/PM` shapes
/// used by the input data (`12 AM` is midnight, `12 PM` is noon).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockTime(pub u32);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Build from hour/minute/second components (24-hour `hour`).
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        ClockTime(hour * SECS_PER_HOUR + minute * SECS_PER_MINUTE + second)
    }

    /// Seconds past midnight, wrapped into a single day.
    #[inline]
    pub fn secs_past_midnight(self) -> u32 {
        self.0 % SECS_PER_DAY
    }

    /// Parse `H:MM AM/PM` or `H:MM:SS AM/PM` (case-insensitive meridiem).
    pub fn parse(text: &str) -> Result<Self, TimeError> {
        let malformed = || TimeError::Malformed(text.to_string());

        let trimmed = text.trim();
        let (digits, meridiem) = trimmed.rsplit_once(' ').ok_or_else(malformed)?;

        let pm = match meridiem.trim() {
            m if m.eq_ignore_ascii_case("am") => false,
            m if m.eq_ignore_ascii_case("pm") => true,
            _ => return Err(malformed()),
        };

        let mut fields = digits.trim().split(':');
        let hour: u32 = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(malformed)?;
        let minute: u32 = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(malformed)?;
        let second: u32 = match fields.next() {
            None => 0,
            Some(f) => f.parse().map_err(|_| malformed())?,
        };
        if fields.next().is_some() || !(1..=12).contains(&hour) || minute > 59 || second > 59 {
            return Err(malformed());
        }

        // 12 AM → hour 0, 12 PM → hour 12.
        let hour24 = (hour % 12) + if pm { 12 } else { 0 };
        Ok(Self::from_hms(hour24, minute, second))
    }
}

impl fmt::Display for ClockTime {
    /// `H:MM AM/PM`, extended to `H:MM:SS AM/PM` when the seconds component
    /// is nonzero so that parsing the output recovers the exact instant.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.secs_past_midnight();
        let hour24 = total / SECS_PER_HOUR;
        let minute = (total % SECS_PER_HOUR) / SECS_PER_MINUTE;
        let second = total % SECS_PER_MINUTE;

        let meridiem = if hour24 < 12 { "AM" } else { "PM" };
        let hour = match hour24 % 12 {
            0 => 12,
            h => h,
        };

        if second == 0 {
            write!(f, "{hour}:{minute:02} {meridiem}")
        } else {
            write!(f, "{hour}:{minute:02}:{second:02} {meridiem}")
        }
    }
}

// ── DayClock ──────────────────────────────────────────────────────────────────

/// Converts between elapsed simulation seconds and wall-clock strings.
///
/// `DayClock` is cheap to copy and intentionally holds no heap data.  The
/// simulation engine owns one and advances it tick-by-tick; loaders and
/// event sinks hold copies purely for the start-of-day anchor.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayClock {
    /// Wall time of elapsed second 0.
    pub start_of_day: ClockTime,
    /// Elapsed seconds since `start_of_day` — advanced once per tick.
    pub now: u32,
}

impl DayClock {
    /// Create a clock anchored at `start_of_day`, reading zero elapsed.
    pub fn new(start_of_day: ClockTime) -> Self {
        Self { start_of_day, now: 0 }
    }

    /// Advance the clock by one tick (one simulated second).
    #[inline]
    pub fn advance(&mut self) {
        self.now += 1;
    }

    /// Elapsed simulated seconds since the start of day.
    #[inline]
    pub fn elapsed_secs(&self) -> u32 {
        self.now
    }

    /// Wall time corresponding to `elapsed` seconds after the start of day.
    #[inline]
    pub fn wall_time(&self, elapsed: u32) -> ClockTime {
        ClockTime(self.start_of_day.secs_past_midnight() + elapsed)
    }

    /// Format `elapsed` seconds since start as a wall-clock string.
    pub fn format(&self, elapsed: u32) -> String {
        self.wall_time(elapsed).to_string()
    }

    /// Parse a wall-clock string into elapsed seconds since start.
    ///
    /// A time earlier in the day than the start anchor is an error: the
    /// simulation covers a single working day.
    pub fn parse(&self, text: &str) -> Result<u32, TimeError> {
        let wall = ClockTime::parse(text)?;
        let start = self.start_of_day.secs_past_midnight();
        wall.secs_past_midnight()
            .checked_sub(start)
            .ok_or_else(|| TimeError::BeforeStart(text.to_string()))
    }
}

impl fmt::Display for DayClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{}s)", self.wall_time(self.now), self.now)
    }
}
