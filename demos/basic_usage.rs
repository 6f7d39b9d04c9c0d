//! Basic day/night terminator calculation example.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use solar_terminator::sun::SunPosition;
use solar_terminator::time::JulianDay;
use solar_terminator::{TerminatorOptions, terminator, terminator_with_options};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // the same instant, once with a fixed offset and once in UTC
    let datetime_fixed = "2024-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;
    let datetime_utc = Utc.with_ymd_and_hms(2024, 6, 21, 19, 0, 0).unwrap();

    let curve_fixed = terminator(&datetime_fixed);
    let curve_utc = terminator(&datetime_utc);

    println!("Day/night terminator for {datetime_utc}:");
    println!("  Points: {}", curve_utc.len());
    println!(
        "  Dark pole: {}",
        if curve_utc.is_north_pole_dark() { "north" } else { "south" }
    );
    println!(
        "\nBoth calculations produce identical curves: {}",
        curve_fixed == curve_utc
    );

    let sun = SunPosition::at(JulianDay::from_datetime(&datetime_utc));
    println!("\nSun at this instant:");
    println!("  Ecliptic longitude: {:.3}°", sun.ecliptic_longitude());
    println!("  Right ascension: {:.3}°", sun.right_ascension());
    println!("  Declination: {:.3}°", sun.declination());
    println!("  Distance: {:.5} AU", sun.distance());

    println!("\nTerminator latitude every 30° of longitude:");
    for point in curve_utc
        .boundary()
        .iter()
        .filter(|p| (-180.0..=180.0).contains(&p.longitude()) && p.longitude() % 30.0 == 0.0)
    {
        println!("  {:>7.1}° -> {:>7.3}°", point.longitude(), point.latitude());
    }

    // a coarser curve for cheap redraws
    let coarse = terminator_with_options(&datetime_utc, &TerminatorOptions::with_resolution(1)?);
    println!("\nCoarse curve (1 sample per degree): {} points", coarse.len());

    Ok(())
}
