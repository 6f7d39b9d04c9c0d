//! Nearest location lookup by great-circle distance.
//!
//! Used to turn a click on the world map into the closest known time zone
//! entry. Candidate lists are small (tens of entries), so a linear scan is all
//! that is needed.

use alloc::string::String;

use crate::GeoPoint;
use crate::error::check_coordinates;
use crate::math::{atan2, cos, degrees_to_radians, sin, sqrt};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Something with an optional geographic coordinate.
pub trait Locate {
    /// Returns `(latitude, longitude)` in degrees, or `None` if the item has no
    /// coordinate.
    fn coordinate(&self) -> Option<(f64, f64)>;
}

impl Locate for GeoPoint {
    fn coordinate(&self) -> Option<(f64, f64)> {
        Some(self.to_lat_lng())
    }
}

impl<T: Locate + ?Sized> Locate for &T {
    fn coordinate(&self) -> Option<(f64, f64)> {
        (**self).coordinate()
    }
}

/// A minimal candidate: an identifier and a coordinate that may be missing.
///
/// # Example
/// ```
/// # use solar_terminator::nearest::{LocationCandidate, find_closest};
/// # use solar_terminator::GeoPoint;
/// let candidates = [
///     LocationCandidate::new("nowhere", None),
///     LocationCandidate::new("origin", Some((0.0, 0.0))),
/// ];
/// let query = GeoPoint::new(1.0, 1.0).unwrap();
/// let found = find_closest(query, &candidates).unwrap();
/// assert_eq!(found.candidate().id(), "origin");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LocationCandidate {
    id: String,
    coordinate: Option<(f64, f64)>,
}

impl LocationCandidate {
    /// Creates a candidate from an identifier and an optional `(latitude, longitude)`.
    pub fn new(id: impl Into<String>, coordinate: Option<(f64, f64)>) -> Self {
        Self {
            id: id.into(),
            coordinate,
        }
    }

    /// Gets the identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Locate for LocationCandidate {
    fn coordinate(&self) -> Option<(f64, f64)> {
        self.coordinate
    }
}

/// The closest candidate found by [`find_closest`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestMatch<'a, C> {
    candidate: &'a C,
    index: usize,
    distance_km: f64,
}

impl<'a, C> NearestMatch<'a, C> {
    /// Gets the matching candidate.
    #[must_use]
    pub const fn candidate(&self) -> &'a C {
        self.candidate
    }

    /// Gets the position of the candidate in the input slice.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Gets the great-circle distance to the query in kilometres.
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }
}

/// Great-circle distance between two points in kilometres (haversine formula).
///
/// # Example
/// ```
/// # use solar_terminator::{GeoPoint, nearest::haversine_distance};
/// let london = GeoPoint::new(51.5074, -0.1278).unwrap();
/// let paris = GeoPoint::new(48.8566, 2.3522).unwrap();
/// let km = haversine_distance(london, paris);
/// assert!((km - 343.5).abs() < 1.0);
/// ```
#[must_use]
pub fn haversine_distance(from: GeoPoint, to: GeoPoint) -> f64 {
    haversine(from.to_lat_lng(), to.to_lat_lng())
}

fn haversine((lat1, lng1): (f64, f64), (lat2, lng2): (f64, f64)) -> f64 {
    let d_lat = degrees_to_radians(lat2 - lat1);
    let d_lng = degrees_to_radians(lng2 - lng1);

    let sin_half_lat = sin(d_lat / 2.0);
    let sin_half_lng = sin(d_lng / 2.0);

    let a = sin_half_lat * sin_half_lat
        + cos(degrees_to_radians(lat1)) * cos(degrees_to_radians(lat2)) * sin_half_lng * sin_half_lng;
    // rounding can push near-antipodal pairs just past 1
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * atan2(sqrt(a), sqrt(1.0 - a))
}

/// Finds the candidate closest to `query`.
///
/// Candidates without a usable coordinate (missing, non-finite, latitude
/// outside ±90° or longitude outside ±180°) are skipped, not reported as
/// errors. On equal distances the earliest candidate wins. Returns `None` when
/// no candidate has a usable coordinate, including for an empty slice.
///
/// # Example
/// ```
/// # use solar_terminator::{GeoPoint, find_closest};
/// let cities = [
///     GeoPoint::new(0.0, 0.0).unwrap(),
///     GeoPoint::new(10.0, 10.0).unwrap(),
/// ];
/// let found = find_closest(GeoPoint::new(1.0, 1.0).unwrap(), &cities).unwrap();
/// assert_eq!(found.index(), 0);
/// ```
pub fn find_closest<C: Locate>(query: GeoPoint, candidates: &[C]) -> Option<NearestMatch<'_, C>> {
    let query = query.to_lat_lng();
    let mut best: Option<NearestMatch<'_, C>> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let Some((latitude, longitude)) = candidate.coordinate() else {
            continue;
        };
        if check_coordinates(latitude, longitude).is_err() {
            continue;
        }

        let distance_km = haversine(query, (latitude, longitude));
        if !distance_km.is_finite() {
            continue;
        }
        if best.as_ref().is_none_or(|b| distance_km < b.distance_km) {
            best = Some(NearestMatch {
                candidate,
                index,
                distance_km,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude).unwrap()
    }

    #[test]
    fn test_haversine_known_distances() {
        // San Francisco to Los Angeles, ~559 km
        let sf = point(37.7749, -122.4194);
        let la = point(34.0522, -118.2437);
        let d = haversine_distance(sf, la);
        assert!((d - 559.0).abs() < 2.0, "distance = {d}");

        // quarter of the equator
        let d = haversine_distance(point(0.0, 0.0), point(0.0, 90.0));
        assert!((d - EARTH_RADIUS_KM * core::f64::consts::FRAC_PI_2).abs() < 1e-6);

        assert_eq!(haversine_distance(sf, sf), 0.0);
    }

    #[test]
    fn test_haversine_near_antipodal_is_finite() {
        let from = point(-39.61, -90.0);
        let to = point(39.61, 90.0);
        let d = haversine_distance(from, to);
        assert!(d.is_finite(), "distance = {d}");
        assert!((d - EARTH_RADIUS_KM * core::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_antipodal_candidate_does_not_block_closer_one() {
        let candidates = [
            LocationCandidate::new("antipode", Some((39.61, 90.0))),
            LocationCandidate::new("next-door", Some((-39.6, -90.0))),
        ];
        let found = find_closest(point(-39.61, -90.0), &candidates).unwrap();
        assert_eq!(found.candidate().id(), "next-door");
        assert_eq!(found.index(), 1);
        assert!(found.distance_km() < 2.0);
    }

    #[test]
    fn test_haversine_symmetric_across_antimeridian() {
        let west = point(10.0, 179.5);
        let east = point(10.0, -179.5);
        let d = haversine_distance(west, east);
        assert!(d < 120.0, "distance = {d}");
        assert!((d - haversine_distance(east, west)).abs() < 1e-9);
    }

    #[test]
    fn test_find_closest_basic() {
        let candidates = [
            LocationCandidate::new("A", Some((0.0, 0.0))),
            LocationCandidate::new("B", Some((10.0, 10.0))),
        ];
        let found = find_closest(point(1.0, 1.0), &candidates).unwrap();
        assert_eq!(found.candidate().id(), "A");
        assert_eq!(found.index(), 0);
        assert!(found.distance_km() > 0.0);
    }

    #[test]
    fn test_find_closest_tie_goes_to_first() {
        let candidates = [
            LocationCandidate::new("X", Some((0.0, 10.0))),
            LocationCandidate::new("Y", Some((0.0, -10.0))),
        ];
        let found = find_closest(point(0.0, 0.0), &candidates).unwrap();
        assert_eq!(found.candidate().id(), "X");

        let reversed = [candidates[1].clone(), candidates[0].clone()];
        let found = find_closest(point(0.0, 0.0), &reversed).unwrap();
        assert_eq!(found.candidate().id(), "Y");
    }

    #[test]
    fn test_find_closest_empty_and_invalid() {
        let empty: [LocationCandidate; 0] = [];
        assert!(find_closest(point(0.0, 0.0), &empty).is_none());

        let invalid = [
            LocationCandidate::new("missing", None),
            LocationCandidate::new("nan", Some((f64::NAN, 0.0))),
            LocationCandidate::new("off-globe", Some((95.0, 0.0))),
            LocationCandidate::new("wrapped", Some((0.0, 200.0))),
        ];
        assert!(find_closest(point(0.0, 0.0), &invalid).is_none());
    }

    #[test]
    fn test_find_closest_skips_invalid_in_any_position() {
        let invalid_first = [
            LocationCandidate::new("bad", None),
            LocationCandidate::new("good", Some((40.0, -74.0))),
        ];
        let found = find_closest(point(0.0, 0.0), &invalid_first).unwrap();
        assert_eq!(found.candidate().id(), "good");
        assert_eq!(found.index(), 1);

        let invalid_last = [
            LocationCandidate::new("good", Some((40.0, -74.0))),
            LocationCandidate::new("bad", Some((f64::INFINITY, 0.0))),
        ];
        let found = find_closest(point(0.0, 0.0), &invalid_last).unwrap();
        assert_eq!(found.candidate().id(), "good");
        assert_eq!(found.index(), 0);
    }

    #[test]
    fn test_find_closest_over_geo_points() {
        let points = [point(51.5, -0.1), point(35.7, 139.7), point(-33.9, 151.2)];
        let found = find_closest(point(-37.8, 145.0), &points).unwrap();
        assert_eq!(found.index(), 2);
        assert_eq!(found.candidate(), &points[2]);
    }

    #[test]
    fn test_find_closest_through_references() {
        let a = LocationCandidate::new("a", Some((0.0, 0.0)));
        let b = LocationCandidate::new("b", Some((5.0, 5.0)));
        let refs = [&a, &b];
        let found = find_closest(point(4.0, 4.0), &refs).unwrap();
        assert_eq!(found.candidate().id(), "b");
    }
}
