//! Core data types shared by the terminator and nearest-location calculations.

use crate::Result;
use crate::error::check_coordinates;

/// A geographic coordinate in degrees.
///
/// Points built through [`GeoPoint::new`] are validated to latitude ∈ [-90, 90]
/// and longitude ∈ [-180, 180]. Terminator curves use an extended longitude
/// domain of [-360, 360] so that the polygon stays continuous across the
/// antimeridian; those points are produced by the library itself.
///
/// # Example
/// ```
/// # use solar_terminator::GeoPoint;
/// let tokyo = GeoPoint::new(35.6762, 139.6503).unwrap();
/// assert_eq!(tokyo.latitude(), 35.6762);
/// assert_eq!(tokyo.longitude(), 139.6503);
///
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    latitude: f64,
    /// Longitude in degrees, positive east
    longitude: f64,
}

impl GeoPoint {
    /// Creates a validated geographic point.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Creates a point on the extended longitude domain without validation.
    pub(crate) const fn unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the point as a `(latitude, longitude)` pair.
    #[must_use]
    pub const fn to_lat_lng(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Returns the point as a `[longitude, latitude]` pair, the GeoJSON axis order.
    #[must_use]
    pub const fn to_lng_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

impl TryFrom<(f64, f64)> for GeoPoint {
    type Error = crate::Error;

    /// Converts a `(latitude, longitude)` pair.
    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self> {
        Self::new(latitude, longitude)
    }
}
