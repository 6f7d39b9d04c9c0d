//! Example demonstrating usage without std/chrono dependencies.
//!
//! This shows how to use the library in no_std environments where
//! users supply their own clock as Unix milliseconds or UTC components.

use solar_terminator::sun::{SunPosition, greenwich_mean_sidereal_time};
use solar_terminator::time::JulianDay;
use solar_terminator::{
    GeoPoint, LocationCandidate, TerminatorOptions, compute_terminator, find_closest,
    terminator_for_julian_day,
};

fn main() {
    println!("Day/night terminator without std/chrono dependencies\n");

    // 2024-06-21T12:00:00Z as a millisecond timestamp
    let curve = compute_terminator(1_718_971_200_000.0).expect("Valid timestamp");
    println!("Curve from Unix milliseconds: {} points", curve.len());

    // the same instant from UTC components
    let jd = JulianDay::from_utc(2024, 6, 21, 12, 0, 0.0).expect("Valid date");
    println!("Julian Day: {:.6}", jd.julian_day());

    let sun = SunPosition::at(jd);
    println!("GMST: {:.4} h", greenwich_mean_sidereal_time(jd));
    println!("Declination: {:.3}°\n", sun.declination());

    let options = TerminatorOptions::with_resolution(4).expect("Valid resolution");
    let fine = terminator_for_julian_day(jd, &options);
    println!("Curve at 4 samples per degree: {} points", fine.len());

    // nearest-location lookup with caller-owned candidates
    let candidates = [
        LocationCandidate::new("vienna", Some((48.21, 16.37))),
        LocationCandidate::new("unplaced", None),
        LocationCandidate::new("sydney", Some((-33.87, 151.21))),
    ];
    let click = GeoPoint::new(47.07, 15.44).expect("Valid coordinate"); // Graz
    if let Some(found) = find_closest(click, &candidates) {
        println!(
            "\nClosest to Graz: {} ({:.1} km)",
            found.candidate().id(),
            found.distance_km()
        );
    }
}
