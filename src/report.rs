//! Plain-text tables for road maps and tours.

use crate::instance::Location;
use crate::solution::Solution;

/// Table of cities with their coordinates rounded to 2 decimals
pub fn format_cities(cities: &[Location]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<16}{:<16}{:<16}{:<16}\n", "State", "City", "Lat", "Long"));
    out.push_str(&"-".repeat(52));
    out.push('\n');

    for city in cities {
        out.push_str(&format!(
            "{:<16}{:<16}{:.2}\t\t{:.2}\n",
            city.region, city.name, city.latitude, city.longitude
        ));
    }

    out
}

/// Leg-by-leg table of a closed tour followed by its total length
pub fn format_map(solution: &Solution) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:>16}{:>25}\n", "From:", "To:"));
    out.push_str(&format!(
        "{:<15}{:<15}{:<15}{:<15}{}\n",
        "State:", "City:", "State:", "City:", "Distance:"
    ));

    let mut total = 0.0;
    for leg in solution.legs() {
        total += leg.distance;
        out.push_str(&format!(
            "{:<15}{:<15}{:<15}{:<15}{:.2}\n",
            leg.from.region, leg.from.name, leg.to.region, leg.to.name, leg.distance
        ));
    }

    out.push_str(&format!("Total distance: {:.2} miles\n", total));
    out
}
