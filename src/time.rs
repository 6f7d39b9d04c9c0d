//! Julian day conversions for the terminator calculation.
//!
//! Times are treated as UT without leap-second or ΔT correction. That is
//! plenty for drawing a day/night overlay, but not for navigation.

#![allow(clippy::unreadable_literal)]

use crate::error::check_timestamp;
use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Milliseconds per day (86,400,000)
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Day of the Unix epoch (1970-01-01 00:00:00 UTC)
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Day for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Continuous Julian Day count referenced to UT.
///
/// # Example
/// ```
/// # use solar_terminator::time::JulianDay;
/// let jd = JulianDay::from_unix_millis(0.0).unwrap();
/// assert_eq!(jd.julian_day(), 2_440_587.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Creates a Julian day from milliseconds since the Unix epoch.
    ///
    /// Negative values (before 1970) are accepted.
    ///
    /// # Errors
    /// Returns `InvalidTimestamp` if `unix_millis` is NaN or infinite.
    pub fn from_unix_millis(unix_millis: f64) -> Result<Self> {
        check_timestamp(unix_millis)?;
        Ok(Self(unix_millis / MILLIS_PER_DAY + UNIX_EPOCH_JD))
    }

    /// Creates a Julian day from a timezone-aware chrono `DateTime`.
    ///
    /// Sub-millisecond precision is dropped, matching the millisecond clock
    /// a map overlay is usually driven by.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self(datetime.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD)
    }

    /// Creates a Julian day from year, month, day, hour, minute, and second in UTC.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any component is outside its valid range
    /// (month 1-12, day within month, hour 0-23, minute 0-59, second 0-59.999).
    ///
    /// # Example
    /// ```
    /// # use solar_terminator::time::JulianDay;
    /// let jd = JulianDay::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
    /// assert_eq!(jd.julian_day(), 2_451_545.0);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }

        Ok(Self(gregorian_to_julian_day(
            year, month, day, hour, minute, second,
        )))
    }

    /// Gets the Julian Day value.
    #[must_use]
    pub const fn julian_day(&self) -> f64 {
        self.0
    }

    /// Days elapsed since J2000.0 (negative before 2000-01-01 12:00 UTC).
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.0 - J2000_JD
    }

    /// Julian centuries since J2000.0.
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_CENTURY
    }
}

/// Proleptic Gregorian calendar date to Julian Day (Meeus, "Astronomical Algorithms", ch. 7).
fn gregorian_to_julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> f64 {
    let (y, m) = if month < 3 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };

    let d = f64::from(day) + (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;

    let a = floor(y / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + d + b - 1524.5
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}
