//! Picks the closest built-in time zone for a few map clicks.

use solar_terminator::zones::{POPULAR_TIME_ZONES, search_time_zones};
use solar_terminator::{GeoPoint, find_closest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let clicks = [
        ("Zurich", 47.37, 8.54),
        ("Buenos Aires", -34.60, -58.38),
        ("Honolulu", 21.31, -157.86),
        ("Seoul", 37.57, 126.98),
    ];

    println!("Closest directory entry for each click:");
    for (label, lat, lng) in clicks {
        let click = GeoPoint::new(lat, lng)?;
        if let Some(found) = find_closest(click, &POPULAR_TIME_ZONES) {
            let zone = found.candidate();
            println!(
                "  {label:<13} -> {} ({}, {}) {:.0} km",
                zone.name,
                zone.timezone,
                zone.offset_label,
                found.distance_km()
            );
        }
    }

    println!("\nSearch for \"an\":");
    for zone in search_time_zones("an") {
        println!("  {} ({})", zone.name, zone.country);
    }

    Ok(())
}
