//! Compares UTC offsets of directory zones against a home zone.

use chrono::{DateTime, Utc};
use solar_terminator::zones::{POPULAR_TIME_ZONES, time_difference};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let home = "Europe/Zurich";

    for instant in ["2024-01-15T12:00:00Z", "2024-07-15T12:00:00Z"] {
        let at = instant.parse::<DateTime<Utc>>()?;
        println!("Relative to {home} at {at}:");

        for zone in &POPULAR_TIME_ZONES {
            let diff = time_difference(home, zone.timezone, &at)?;
            println!("  {:<12} {diff}", zone.city);
        }
        println!();
    }

    Ok(())
}
