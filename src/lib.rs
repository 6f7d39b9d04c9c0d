//! # Solar Terminator
//!
//! Day/night terminator polygons and nearest-location lookup for world-clock maps.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library provides the two numeric pieces a world-clock map needs:
//! - **Terminator**: the curve separating day from night at a given instant, as a
//!   closed polygon ready to be drawn over an equirectangular or Mercator map
//! - **Nearest location**: the candidate closest to a clicked coordinate by
//!   great-circle (haversine) distance
//!
//! A small directory of popular cities with their IANA time zones is included,
//! and with the `tz` feature the UTC offset difference between two zones can be
//! computed and formatted.
//!
//! ## Features
//!
//! - Pure functions: no caches, no global state, safe to call from any thread
//! - `no_std` + `alloc` compatible with the `libm` feature
//! - Bounded work: 1443 points per curve at the default resolution
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `tz`: Time differences between IANA zones via `chrono-tz`
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-terminator = "0.1"
//!
//! # With IANA time zone differences
//! solar-terminator = { version = "0.1", features = ["tz"] }
//!
//! # Minimal no_std (numeric API only)
//! solar-terminator = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Terminator (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{DateTime, Utc};
//! use solar_terminator::terminator;
//!
//! let now = "2024-06-21T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
//! let curve = terminator(&now);
//!
//! assert_eq!(curve.len(), 1443);
//! for point in curve.iter().take(3) {
//!     println!("{:.3}, {:.1}", point.latitude(), point.longitude());
//! }
//! # }
//! ```
//!
//! ### Terminator (numeric API, no chrono)
//! ```rust
//! use solar_terminator::{compute_terminator, time::JulianDay, terminator_for_julian_day, TerminatorOptions};
//!
//! // From milliseconds since the Unix epoch
//! let curve = compute_terminator(1_734_739_200_000.0).unwrap();
//! assert!(curve.is_north_pole_dark());
//!
//! // From calendar components, sampled once per degree
//! let jd = JulianDay::from_utc(2024, 12, 21, 0, 0, 0.0).unwrap();
//! let coarse = terminator_for_julian_day(jd, &TerminatorOptions::with_resolution(1).unwrap());
//! assert_eq!(coarse.len(), 723);
//! ```
//!
//! ### Nearest time zone for a map click
//! ```rust
//! use solar_terminator::{find_closest, zones::POPULAR_TIME_ZONES, GeoPoint};
//!
//! let click = GeoPoint::new(47.37, 8.54).unwrap(); // Zurich
//! let nearest = find_closest(click, &POPULAR_TIME_ZONES).unwrap();
//! assert_eq!(nearest.candidate().timezone, "Europe/Paris");
//! ```
//!
//! ## Coordinate System
//!
//! - **Latitude**: degrees, positive north (-90° to +90°)
//! - **Longitude**: degrees, positive east (-180° to +180°); terminator curves
//!   span -360° to +360° so the polygon never breaks at the antimeridian
//! - Output points are `(latitude, longitude)`; use [`GeoPoint::to_lng_lat`]
//!   for GeoJSON order

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of reference values in tests
)]

extern crate alloc;

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::nearest::{Locate, LocationCandidate, NearestMatch, find_closest, haversine_distance};
#[cfg(feature = "chrono")]
pub use crate::terminator::{terminator, terminator_with_options};
pub use crate::terminator::{
    TerminatorCurve, TerminatorOptions, compute_terminator, terminator_for_julian_day,
};
pub use crate::types::GeoPoint;

// Calculation modules
pub mod nearest;
pub mod sun;
pub mod terminator;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
pub mod zones;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_terminator_for_equivalent_datetimes() {
        let datetime_fixed = "2023-06-21T12:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();

        let curve1 = terminator(&datetime_fixed);
        let curve2 = terminator(&datetime_utc);

        assert_eq!(curve1, curve2);
        assert_eq!(curve1.len(), 1443);
    }

    #[test]
    fn test_map_click_flow() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 6, 30, 0).unwrap();
        let curve = terminator(&now);
        assert!(curve.boundary().iter().all(|p| p.latitude().is_finite()));

        let click = GeoPoint::new(-34.6, -58.4).unwrap(); // Buenos Aires
        let nearest = find_closest(click, &zones::POPULAR_TIME_ZONES).unwrap();
        assert_eq!(nearest.candidate().id, "rio");
    }
}
