//! Day/night terminator curve.
//!
//! For every sampled longitude the terminator latitude is where the Sun's
//! altitude is zero: `tan(lat) = -cos(H) / tan(δ)`, with `H` the local hour
//! angle and `δ` the solar declination. Longitudes run over [-360°, 360°] so
//! that a map renderer can draw one continuous polygon regardless of where the
//! antimeridian falls, and the polygon is closed over the pole that is
//! currently in darkness.
//!
//! The geometry follows the Leaflet.Terminator plugin by Jörg Dietrich.

use alloc::vec::Vec;

use crate::error::check_resolution;
use crate::math::{atan, cos, degrees_to_radians, radians_to_degrees, tan};
use crate::sun::{SunPosition, greenwich_mean_sidereal_time};
use crate::time::JulianDay;
use crate::{GeoPoint, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Westernmost sampled longitude.
const LONGITUDE_START: f64 = -360.0;

/// Width of the sampled longitude domain in degrees.
const LONGITUDE_SPAN: u32 = 720;

/// Samples per degree used by [`TerminatorOptions::default`].
pub const DEFAULT_RESOLUTION: u32 = 2;

/// Sampling options for the terminator curve.
///
/// # Example
/// ```
/// # use solar_terminator::TerminatorOptions;
/// let coarse = TerminatorOptions::with_resolution(1).unwrap();
/// assert_eq!(coarse.point_count(), 723);
///
/// assert_eq!(TerminatorOptions::default().point_count(), 1443);
/// assert!(TerminatorOptions::with_resolution(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerminatorOptions {
    /// Samples per degree of longitude
    resolution: u32,
}

impl TerminatorOptions {
    /// Creates options sampling `resolution` points per degree of longitude.
    ///
    /// # Errors
    /// Returns `InvalidResolution` if resolution is outside 1 to 60.
    pub fn with_resolution(resolution: u32) -> Result<Self> {
        check_resolution(resolution)?;
        Ok(Self { resolution })
    }

    /// Gets the number of samples per degree of longitude.
    #[must_use]
    pub const fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Gets the longitude step between consecutive samples in degrees.
    #[must_use]
    pub fn step(&self) -> f64 {
        1.0 / f64::from(self.resolution)
    }

    /// Number of boundary samples, excluding the two pole points.
    #[must_use]
    pub const fn sample_count(&self) -> usize {
        (LONGITUDE_SPAN * self.resolution) as usize + 1
    }

    /// Total number of points in a curve produced with these options.
    #[must_use]
    pub const fn point_count(&self) -> usize {
        self.sample_count() + 2
    }
}

impl Default for TerminatorOptions {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

/// Closed polygon outlining the night side of the Earth.
///
/// The first and last points sit on the dark pole at longitudes -360° and
/// +360°; everything in between is the terminator itself, ordered by
/// increasing longitude.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminatorCurve {
    points: Vec<GeoPoint>,
}

impl TerminatorCurve {
    /// All points including the two pole-closing points.
    #[must_use]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// The terminator samples without the pole-closing points.
    #[must_use]
    pub fn boundary(&self) -> &[GeoPoint] {
        &self.points[1..self.points.len() - 1]
    }

    /// Number of points including the pole-closing points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a curve holds at least the two pole points and one sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over all points in polygon order.
    pub fn iter(&self) -> core::slice::Iter<'_, GeoPoint> {
        self.points.iter()
    }

    /// Latitude of the pole used to close the polygon: +90 or -90.
    #[must_use]
    pub fn pole_latitude(&self) -> f64 {
        self.points[0].latitude()
    }

    /// Checks if the polygon is closed over the north pole.
    #[must_use]
    pub fn is_north_pole_dark(&self) -> bool {
        self.pole_latitude() > 0.0
    }

    /// Returns the points as `(latitude, longitude)` pairs.
    #[must_use]
    pub fn to_lat_lng_pairs(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(GeoPoint::to_lat_lng).collect()
    }

    /// Consumes the curve, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }
}

impl<'a> IntoIterator for &'a TerminatorCurve {
    type Item = &'a GeoPoint;
    type IntoIter = core::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for TerminatorCurve {
    type Item = GeoPoint;
    type IntoIter = alloc::vec::IntoIter<GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

/// Computes the terminator at a Unix timestamp with the default resolution.
///
/// # Arguments
/// * `unix_millis` - Milliseconds since 1970-01-01T00:00:00Z
///
/// # Errors
/// Returns `InvalidTimestamp` if `unix_millis` is NaN or infinite.
///
/// # Example
/// ```
/// use solar_terminator::compute_terminator;
///
/// // 2024-06-21T00:00:00Z, a few hours before the June solstice
/// let curve = compute_terminator(1_718_928_000_000.0).unwrap();
/// assert_eq!(curve.len(), 1443);
/// // Sun north of the equator: the south pole is dark
/// assert_eq!(curve.pole_latitude(), -90.0);
/// ```
pub fn compute_terminator(unix_millis: f64) -> Result<TerminatorCurve> {
    let jd = JulianDay::from_unix_millis(unix_millis)?;
    Ok(terminator_for_julian_day(jd, &TerminatorOptions::default()))
}

/// Computes the terminator for a timezone-aware date and time.
///
/// # Example
/// ```rust
/// use chrono::{DateTime, Utc};
/// use solar_terminator::terminator;
///
/// let datetime = "2024-12-21T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let curve = terminator(&datetime);
/// assert!(curve.is_north_pole_dark());
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn terminator<Tz: TimeZone>(datetime: &DateTime<Tz>) -> TerminatorCurve {
    terminator_with_options(datetime, &TerminatorOptions::default())
}

/// Computes the terminator for a timezone-aware date and time with custom sampling.
#[cfg(feature = "chrono")]
#[must_use]
pub fn terminator_with_options<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    options: &TerminatorOptions,
) -> TerminatorCurve {
    terminator_for_julian_day(JulianDay::from_datetime(datetime), options)
}

/// Computes the terminator at a Julian day.
///
/// This is the numeric core; it never fails for a finite Julian day.
#[must_use]
pub fn terminator_for_julian_day(jd: JulianDay, options: &TerminatorOptions) -> TerminatorCurve {
    let gmst = greenwich_mean_sidereal_time(jd);
    let sun = SunPosition::at(jd);
    let pole = dark_pole_latitude(&sun);
    let resolution = f64::from(options.resolution);

    let mut points = Vec::with_capacity(options.point_count());
    points.push(GeoPoint::unchecked(pole, LONGITUDE_START));

    points.extend((0..options.sample_count()).map(|i| {
        let longitude = LONGITUDE_START + i as f64 / resolution;
        let ha = hour_angle(longitude, &sun, gmst);
        GeoPoint::unchecked(terminator_latitude(ha, &sun), longitude)
    }));

    points.push(GeoPoint::unchecked(pole, -LONGITUDE_START));

    TerminatorCurve { points }
}

/// Hour angle of the Sun in degrees at a longitude, given GMST in hours.
///
/// Not normalized; only its cosine is used.
#[must_use]
pub fn hour_angle(longitude: f64, sun: &SunPosition, gmst: f64) -> f64 {
    let local_sidereal_time = gmst + longitude / 15.0;
    local_sidereal_time * 15.0 - sun.right_ascension()
}

/// Terminator latitude in degrees for an hour angle.
#[must_use]
pub fn terminator_latitude(hour_angle: f64, sun: &SunPosition) -> f64 {
    let ha = degrees_to_radians(hour_angle);
    let delta = degrees_to_radians(sun.declination());
    radians_to_degrees(atan(-cos(ha) / tan(delta)))
}

/// The pole in darkness: north when the Sun is south of the equator.
fn dark_pole_latitude(sun: &SunPosition) -> f64 {
    if sun.is_south_of_equator() { 90.0 } else { -90.0 }
}
