//! Built-in directory of popular world-clock locations.
//!
//! Entries carry the IANA zone name and a representative coordinate, so they
//! can be searched by name or passed straight to
//! [`find_closest`](crate::find_closest) when the user clicks the map.
//!
//! With the `tz` feature, [`time_difference`] compares the UTC offsets of two
//! IANA zones at a given instant, daylight saving time included.

use alloc::vec::Vec;

use crate::GeoPoint;
use crate::nearest::Locate;
#[cfg(feature = "tz")]
use crate::{Error, Result};
#[cfg(feature = "tz")]
use chrono::{DateTime, Offset, TimeZone, Utc};
#[cfg(feature = "tz")]
use core::fmt;

/// A named location with its time zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeZoneEntry {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// City name
    pub city: &'static str,
    /// Country name
    pub country: &'static str,
    /// IANA time zone name, e.g. `Europe/London`
    pub timezone: &'static str,
    /// Standard-time offset label, e.g. `UTC+1`
    pub offset_label: &'static str,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl TimeZoneEntry {
    /// Gets the entry's coordinate.
    #[must_use]
    pub const fn location(&self) -> GeoPoint {
        GeoPoint::unchecked(self.latitude, self.longitude)
    }

    fn matches(&self, normalized_query: &str) -> bool {
        [self.city, self.country, self.name]
            .iter()
            .any(|field| field.to_lowercase().contains(normalized_query))
    }
}

impl Locate for TimeZoneEntry {
    fn coordinate(&self) -> Option<(f64, f64)> {
        Some((self.latitude, self.longitude))
    }
}

macro_rules! zone {
    ($id:literal, $name:literal, $country:literal, $tz:literal, $offset:literal, $lat:literal, $lng:literal) => {
        TimeZoneEntry {
            id: $id,
            name: $name,
            city: $name,
            country: $country,
            timezone: $tz,
            offset_label: $offset,
            latitude: $lat,
            longitude: $lng,
        }
    };
}

/// Popular cities offered by default.
pub static POPULAR_TIME_ZONES: [TimeZoneEntry; 12] = [
    zone!("new-york", "New York", "United States", "America/New_York", "UTC-5", 40.7128, -74.006),
    zone!("los-angeles", "Los Angeles", "United States", "America/Los_Angeles", "UTC-8", 34.0522, -118.2437),
    zone!("london", "London", "United Kingdom", "Europe/London", "UTC+0", 51.5074, -0.1278),
    zone!("paris", "Paris", "France", "Europe/Paris", "UTC+1", 48.8566, 2.3522),
    zone!("berlin", "Berlin", "Germany", "Europe/Berlin", "UTC+1", 52.52, 13.405),
    zone!("tokyo", "Tokyo", "Japan", "Asia/Tokyo", "UTC+9", 35.6762, 139.6503),
    zone!("sydney", "Sydney", "Australia", "Australia/Sydney", "UTC+10", -33.8688, 151.2093),
    zone!("auckland", "Auckland", "New Zealand", "Pacific/Auckland", "UTC+12", -36.8485, 174.7633),
    zone!("dubai", "Dubai", "United Arab Emirates", "Asia/Dubai", "UTC+4", 25.2048, 55.2708),
    zone!("singapore", "Singapore", "Singapore", "Asia/Singapore", "UTC+8", 1.3521, 103.8198),
    zone!("rio", "Rio de Janeiro", "Brazil", "America/Sao_Paulo", "UTC-3", -22.9068, -43.1729),
    zone!("johannesburg", "Johannesburg", "South Africa", "Africa/Johannesburg", "UTC+2", -26.2041, 28.0473),
];

/// Looks up a popular entry by its identifier.
#[must_use]
pub fn find_time_zone(id: &str) -> Option<&'static TimeZoneEntry> {
    POPULAR_TIME_ZONES.iter().find(|entry| entry.id == id)
}

/// Case-insensitive substring search over city, country and display name.
///
/// A blank query matches nothing.
///
/// # Example
/// ```
/// # use solar_terminator::zones::search_time_zones;
/// let hits = search_time_zones("united");
/// assert_eq!(hits.len(), 4); // two US cities, London, Dubai
/// assert!(search_time_zones("   ").is_empty());
/// ```
#[must_use]
pub fn search_time_zones(query: &str) -> Vec<&'static TimeZoneEntry> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return Vec::new();
    }

    POPULAR_TIME_ZONES
        .iter()
        .filter(|entry| entry.matches(&normalized))
        .collect()
}

/// Signed difference between two UTC offsets.
///
/// Positive when the target zone is ahead of the reference zone.
#[cfg(feature = "tz")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeDifference {
    minutes: i32,
}

#[cfg(feature = "tz")]
impl TimeDifference {
    /// Creates a difference from signed minutes.
    #[must_use]
    pub const fn from_minutes(minutes: i32) -> Self {
        Self { minutes }
    }

    /// Gets the signed difference in minutes.
    #[must_use]
    pub const fn total_minutes(&self) -> i32 {
        self.minutes
    }

    /// Gets the signed difference in hours, fractional for half-hour zones.
    #[must_use]
    pub fn hours(&self) -> f64 {
        f64::from(self.minutes) / 60.0
    }

    /// Checks if the target zone is ahead of the reference zone.
    #[must_use]
    pub const fn is_ahead(&self) -> bool {
        self.minutes > 0
    }
}

#[cfg(feature = "tz")]
impl fmt::Display for TimeDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes == 0 {
            return f.write_str("Same time");
        }

        let magnitude = self.minutes.unsigned_abs();
        let (hours, minutes) = (magnitude / 60, magnitude % 60);
        let plural = |n: u32| if n == 1 { "" } else { "s" };

        if hours > 0 {
            write!(f, "{hours} hour{}", plural(hours))?;
            if minutes > 0 {
                f.write_str(" ")?;
            }
        }
        if minutes > 0 {
            write!(f, "{minutes} minute{}", plural(minutes))?;
        }

        f.write_str(if self.minutes > 0 { " ahead" } else { " behind" })
    }
}

/// Offset of `to` relative to `from` at the instant `at`.
///
/// Unlike comparing wall-clock hours, this is not wrapped to ±12 hours:
/// `Pacific/Kiritimati` is 26 hours ahead of `Etc/GMT+12`.
///
/// # Errors
/// Returns `UnknownTimeZone` if either name is not an IANA zone.
///
/// # Example
/// ```
/// # use solar_terminator::zones::time_difference;
/// use chrono::{DateTime, Utc};
///
/// let winter = "2024-01-15T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let diff = time_difference("America/New_York", "Europe/London", &winter).unwrap();
/// assert_eq!(diff.to_string(), "5 hours ahead");
/// ```
#[cfg(feature = "tz")]
pub fn time_difference(from: &str, to: &str, at: &DateTime<Utc>) -> Result<TimeDifference> {
    let from_offset = utc_offset_seconds(from, at)?;
    let to_offset = utc_offset_seconds(to, at)?;
    Ok(TimeDifference::from_minutes((to_offset - from_offset) / 60))
}

#[cfg(feature = "tz")]
fn utc_offset_seconds(name: &str, at: &DateTime<Utc>) -> Result<i32> {
    let tz: chrono_tz::Tz = name.parse().map_err(|_| Error::unknown_time_zone(name))?;
    Ok(tz
        .offset_from_utc_datetime(&at.naive_utc())
        .fix()
        .local_minus_utc())
}
