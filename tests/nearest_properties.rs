//! Nearest-candidate lookup as the map click handler uses it.

use solar_terminator::nearest::EARTH_RADIUS_KM;
use solar_terminator::zones::{POPULAR_TIME_ZONES, TimeZoneEntry, search_time_zones};
use solar_terminator::{GeoPoint, Locate, LocationCandidate, find_closest, haversine_distance};

/// A timezone record as a host application might store it, with an optional coordinate.
struct StoredZone {
    id: &'static str,
    coordinates: Option<[f64; 2]>, // [longitude, latitude]
}

impl Locate for StoredZone {
    fn coordinate(&self) -> Option<(f64, f64)> {
        self.coordinates.map(|[lng, lat]| (lat, lng))
    }
}

fn point(latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint::new(latitude, longitude).unwrap()
}

#[test]
fn closest_of_two() {
    let candidates = [
        LocationCandidate::new("A", Some((0.0, 0.0))),
        LocationCandidate::new("B", Some((10.0, 10.0))),
    ];
    let found = find_closest(point(1.0, 1.0), &candidates).unwrap();
    assert_eq!(found.candidate().id(), "A");
}

#[test]
fn ties_resolve_to_first_in_list_order() {
    let candidates = [
        StoredZone {
            id: "X",
            coordinates: Some([20.0, 0.0]),
        },
        StoredZone {
            id: "Y",
            coordinates: Some([-20.0, 0.0]),
        },
        StoredZone {
            id: "Z",
            coordinates: Some([0.0, 20.0]),
        },
    ];
    let found = find_closest(point(0.0, 0.0), &candidates).unwrap();
    assert_eq!(found.candidate().id, "X");
    assert_eq!(found.index(), 0);
}

#[test]
fn empty_or_unusable_lists_have_no_match() {
    let empty: Vec<StoredZone> = Vec::new();
    assert!(find_closest(point(0.0, 0.0), &empty).is_none());

    let unusable = [
        StoredZone {
            id: "a",
            coordinates: None,
        },
        StoredZone {
            id: "b",
            coordinates: None,
        },
    ];
    assert!(find_closest(point(0.0, 0.0), &unusable).is_none());
}

#[test]
fn unusable_candidates_are_skipped_wherever_they_appear() {
    let valid = StoredZone {
        id: "valid",
        coordinates: Some([100.0, 10.0]),
    };
    let invalid = StoredZone {
        id: "invalid",
        coordinates: None,
    };

    for candidates in [[&invalid, &valid], [&valid, &invalid]] {
        let found = find_closest(point(-50.0, -100.0), &candidates).unwrap();
        assert_eq!(found.candidate().id, "valid");
    }
}

#[test]
fn reported_distance_is_haversine() {
    let london = POPULAR_TIME_ZONES
        .iter()
        .find(|z| z.id == "london")
        .unwrap();
    let click = point(53.48, -2.24); // Manchester
    let found = find_closest(click, &POPULAR_TIME_ZONES).unwrap();

    assert_eq!(found.candidate().id, "london");
    assert_eq!(found.distance_km(), haversine_distance(click, london.location()));
    assert!((found.distance_km() - 262.0).abs() < 5.0);
}

#[test]
fn antipodal_distance_is_half_circumference() {
    let d = haversine_distance(point(0.0, 0.0), point(0.0, 180.0));
    assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);

    let d = haversine_distance(point(90.0, 0.0), point(-90.0, 0.0));
    assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
}

#[test]
fn near_antipodal_candidate_keeps_a_finite_distance() {
    let query = point(-39.61, -90.0);
    let d = haversine_distance(query, point(39.61, 90.0));
    assert!(d.is_finite(), "distance = {d}");
    assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);

    let candidates = [
        StoredZone {
            id: "antipode",
            coordinates: Some([90.0, 39.61]),
        },
        StoredZone {
            id: "next-door",
            coordinates: Some([-90.0, -39.6]),
        },
    ];
    let found = find_closest(query, &candidates).unwrap();
    assert_eq!(found.candidate().id, "next-door");
    assert!(found.distance_km().is_finite());
}

#[test]
fn every_directory_city_finds_itself() {
    for entry in &POPULAR_TIME_ZONES {
        let found = find_closest(entry.location(), &POPULAR_TIME_ZONES).unwrap();
        assert_eq!(found.candidate().id, entry.id);
        assert_eq!(found.distance_km(), 0.0);
    }
}

#[test]
fn search_results_feed_the_locator() {
    let europe: Vec<&TimeZoneEntry> = ["london", "paris", "berlin"]
        .iter()
        .flat_map(|q| search_time_zones(q))
        .collect();
    assert_eq!(europe.len(), 3);

    let found = find_closest(point(50.1, 14.4), &europe).unwrap(); // Prague
    assert_eq!(found.candidate().id, "berlin");
}
