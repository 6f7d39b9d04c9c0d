//! Low-precision solar position for day/night rendering.
//!
//! Follows the approximate equations for the position of the Sun given by the
//! Astronomical Almanac (mean longitude, mean anomaly, equation of centre) and
//! the short-term IAU polynomial for the obliquity of the ecliptic. Accuracy is
//! around 0.01°, which is far below the width of a line on a world map.
//!
//! All angles are degrees at the API boundary; trigonometry is done in radians.

#![allow(clippy::unreadable_literal)]

use crate::math::{
    asin, atan, cos, degrees_to_radians, floor, normalize_degrees_0_to_360,
    normalize_hours_0_to_24, radians_to_degrees, sin, tan,
};
use crate::time::JulianDay;

/// Position of the Sun in ecliptic and equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Mean anomaly in degrees [0, 360)
    mean_anomaly: f64,
    /// Apparent ecliptic longitude in degrees
    ecliptic_longitude: f64,
    /// Sun-Earth distance in astronomical units
    distance: f64,
    /// Mean obliquity of the ecliptic in degrees
    obliquity: f64,
    /// Right ascension in degrees, same 90° quadrant as the ecliptic longitude
    right_ascension: f64,
    /// Declination in degrees, positive north
    declination: f64,
}

impl SunPosition {
    /// Computes the Sun's position at the given Julian day.
    ///
    /// # Example
    /// ```
    /// # use solar_terminator::{sun::SunPosition, time::JulianDay};
    /// // June solstice 2024: the Sun stands over the Tropic of Cancer
    /// let jd = JulianDay::from_utc(2024, 6, 21, 0, 0, 0.0).unwrap();
    /// let sun = SunPosition::at(jd);
    /// assert!((sun.declination() - 23.44).abs() < 0.01);
    /// ```
    #[must_use]
    pub fn at(jd: JulianDay) -> Self {
        let ecliptic = EclipticPosition::at(jd);
        let obliquity = ecliptic_obliquity(jd);
        let (right_ascension, declination) =
            equatorial_from_ecliptic(ecliptic.longitude, obliquity);

        Self {
            mean_anomaly: ecliptic.mean_anomaly,
            ecliptic_longitude: ecliptic.longitude,
            distance: ecliptic.distance,
            obliquity,
            right_ascension,
            declination,
        }
    }

    /// Gets the mean anomaly in degrees.
    #[must_use]
    pub const fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// Gets the ecliptic longitude in degrees.
    #[must_use]
    pub const fn ecliptic_longitude(&self) -> f64 {
        self.ecliptic_longitude
    }

    /// Gets the Sun-Earth distance in astronomical units.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Gets the mean obliquity of the ecliptic in degrees.
    #[must_use]
    pub const fn obliquity(&self) -> f64 {
        self.obliquity
    }

    /// Gets the right ascension in degrees.
    ///
    /// Not normalized: the value lies in the same 90° quadrant as the
    /// ecliptic longitude, which may be slightly above 360°.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Gets the declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Checks if the Sun is south of the celestial equator.
    #[must_use]
    pub fn is_south_of_equator(&self) -> bool {
        self.declination < 0.0
    }
}

struct EclipticPosition {
    mean_anomaly: f64,
    longitude: f64,
    distance: f64,
}

impl EclipticPosition {
    fn at(jd: JulianDay) -> Self {
        let n = jd.days_since_j2000();

        let mean_longitude = normalize_degrees_0_to_360(280.460 + 0.9856474 * n);
        let mean_anomaly = normalize_degrees_0_to_360(357.528 + 0.9856003 * n);

        let g = degrees_to_radians(mean_anomaly);
        let g2 = degrees_to_radians(2.0 * mean_anomaly);

        let longitude = mean_longitude + 1.915 * sin(g) + 0.02 * sin(g2);
        let distance = 1.00014 - 0.01671 * cos(g) - 0.0014 * cos(g2);

        Self {
            mean_anomaly,
            longitude,
            distance,
        }
    }
}

/// Greenwich Mean Sidereal Time in hours [0, 24).
///
/// Low-precision linear expression (USNO), adequate within a few centuries of J2000.
#[must_use]
pub fn greenwich_mean_sidereal_time(jd: JulianDay) -> f64 {
    normalize_hours_0_to_24(18.697374558 + 24.06570982441908 * jd.days_since_j2000())
}

/// Mean obliquity of the ecliptic in degrees.
#[must_use]
pub fn ecliptic_obliquity(jd: JulianDay) -> f64 {
    let t = jd.julian_century();
    23.43929111
        - t * (46.836769 / 3600.0
            - t * (0.0001831 / 3600.0
                + t * (0.0020034 / 3600.0
                    - t * (0.576e-6 / 3600.0 - t * 4.34e-8 / 3600.0))))
}

/// Converts ecliptic longitude to right ascension and declination (degrees).
///
/// `atan` only covers a 180° range, so the right ascension is moved into the
/// same 90° quadrant as the ecliptic longitude.
#[must_use]
pub fn equatorial_from_ecliptic(ecliptic_longitude: f64, obliquity: f64) -> (f64, f64) {
    let lambda = degrees_to_radians(ecliptic_longitude);
    let epsilon = degrees_to_radians(obliquity);

    let alpha = radians_to_degrees(atan(cos(epsilon) * tan(lambda)));
    let delta = radians_to_degrees(asin(sin(epsilon) * sin(lambda)));

    let lambda_quadrant = floor(ecliptic_longitude / 90.0) * 90.0;
    let alpha_quadrant = floor(alpha / 90.0) * 90.0;

    (alpha + (lambda_quadrant - alpha_quadrant), delta)
}
