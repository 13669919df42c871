//! Module for parsing and representing road maps of located cities.
//!
//! This module handles the tab-separated city files (`state<TAB>city<TAB>lat<TAB>long`)
//! and provides the great-circle distance and closed-cycle length used by every
//! heuristic in the crate.

use crate::error::{InstanceError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Mean Earth radius used by the haversine formula, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3956.0;

/// A city on the road map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// State (or other region) the city belongs to
    pub region: String,
    /// City name
    pub name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Location {
    pub fn new(region: &str, name: &str, latitude: f64, longitude: f64) -> Self {
        Location {
            region: region.to_string(),
            name: name.to_string(),
            latitude,
            longitude,
        }
    }

    /// (latitude, longitude) pair in degrees
    #[inline]
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Great-circle distance to another location, in miles
    #[inline]
    pub fn distance_to(&self, other: &Location) -> f64 {
        distance(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// Haversine distance in miles between two points given in degrees.
///
/// Inputs outside the valid coordinate ranges are not checked.
pub fn distance(lat1_degrees: f64, long1_degrees: f64, lat2_degrees: f64, long2_degrees: f64) -> f64 {
    let lat1 = lat1_degrees.to_radians();
    let long1 = long1_degrees.to_radians();
    let lat2 = lat2_degrees.to_radians();
    let long2 = long2_degrees.to_radians();

    let sin_half_lat = ((lat2 - lat1) / 2.0).sin();
    let sin_half_long = ((long2 - long1) / 2.0).sin();

    let a = sin_half_lat.powi(2) + lat1.cos() * lat2.cos() * sin_half_long.powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Length of the closed cycle through `tour`, the last city connecting back to the first.
///
/// Empty and single-city tours have length 0.
pub fn compute_total_distance(tour: &[Location]) -> f64 {
    let n = tour.len();
    let mut total = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        total += tour[i].distance_to(&tour[j]);
    }
    total
}

/// The fixed set of cities a tour must visit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadMap {
    /// Name of the road map (file stem when loaded from disk)
    pub name: String,
    /// Cities in input order
    pub locations: Vec<Location>,
}

impl RoadMap {
    pub fn new(name: &str, locations: Vec<Location>) -> Self {
        RoadMap {
            name: name.to_string(),
            locations,
        }
    }

    /// Parse a road map from a tab-separated city file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let file = File::open(path)?;
        let road_map = Self::from_reader(&name, file)?;
        log::info!("Loaded {} cities from {:?}", road_map.len(), path);
        Ok(road_map)
    }

    /// Parse `region<TAB>name<TAB>latitude<TAB>longitude` records, one per line
    pub fn from_reader<R: Read>(name: &str, reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut locations = Vec::new();

        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            if record.len() == 1 && record[0].trim().is_empty() {
                continue;
            }
            if record.len() != 4 {
                return Err(InstanceError::parse(
                    line,
                    format!("expected 4 tab-separated fields, found {}", record.len()),
                ));
            }

            let latitude: f64 = record[2]
                .trim()
                .parse()
                .map_err(|_| InstanceError::parse(line, format!("invalid latitude {:?}", &record[2])))?;
            let longitude: f64 = record[3]
                .trim()
                .parse()
                .map_err(|_| InstanceError::parse(line, format!("invalid longitude {:?}", &record[3])))?;

            locations.push(Location::new(&record[0], &record[1], latitude, longitude));
        }

        Ok(RoadMap::new(name, locations))
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Cycle length of the cities in input order
    pub fn total_distance(&self) -> f64 {
        compute_total_distance(&self.locations)
    }

    /// Get statistics about the road map
    pub fn statistics(&self) -> RoadMapStatistics {
        let n = self.locations.len();
        let legs: Vec<f64> = (0..n)
            .map(|i| self.locations[i].distance_to(&self.locations[(i + 1) % n]))
            .collect();

        let (min_latitude, max_latitude) = bounds(self.locations.iter().map(|l| l.latitude));
        let (min_longitude, max_longitude) = bounds(self.locations.iter().map(|l| l.longitude));
        let cycle_length = legs.iter().sum::<f64>();

        RoadMapStatistics {
            name: self.name.clone(),
            num_cities: n,
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
            cycle_length,
            avg_leg: if n == 0 { 0.0 } else { cycle_length / n as f64 },
            max_leg: legs.iter().cloned().fold(0.0, f64::max),
        }
    }
}

/// (min, max) of the values, (0, 0) when there are none
fn bounds<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min > max {
        (0.0, 0.0)
    } else {
        (min, max)
    }
}

/// Statistics about a road map in its input order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadMapStatistics {
    pub name: String,
    pub num_cities: usize,
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub cycle_length: f64,
    pub avg_leg: f64,
    pub max_leg: f64,
}

impl std::fmt::Display for RoadMapStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Road map: {}", self.name)?;
        writeln!(f, "  Cities: {}", self.num_cities)?;
        writeln!(f, "  Latitude range: {:.2} .. {:.2}", self.min_latitude, self.max_latitude)?;
        writeln!(f, "  Longitude range: {:.2} .. {:.2}", self.min_longitude, self.max_longitude)?;
        writeln!(f, "  Input order cycle: {:.2} miles", self.cycle_length)?;
        writeln!(f, "  Avg leg: {:.2} miles", self.avg_leg)?;
        writeln!(f, "  Max leg: {:.2} miles", self.max_leg)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::f64::consts::PI;

    pub(crate) fn small_road_map() -> Vec<Location> {
        vec![
            Location::new("Alabama", "Montgomery", 32.361538, -86.279118),
            Location::new("Alaska", "Juneau", 58.301935, -134.41974),
            Location::new("Arizona", "Phoenix", 33.448457, -112.073844),
            Location::new("Arkansas", "Little Rock", 34.736009, -92.331122),
            Location::new("California", "Sacramento", 38.555605, -121.468926),
        ]
    }

    #[test]
    fn test_distance_same_point_is_zero() {
        assert_eq!(distance(32.361538, -86.279118, 32.361538, -86.279118), 0.0);
    }

    #[test]
    fn test_distance_half_circumference() {
        let d = distance(0.0, 0.0, 0.0, 180.0);
        assert!((d - EARTH_RADIUS_MILES * PI).abs() < 1e-9);

        let one_degree = distance(10.0, 20.0, 11.0, 20.0);
        assert!((one_degree - EARTH_RADIUS_MILES * PI / 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_symmetric() {
        let cities = small_road_map();
        for a in &cities {
            for b in &cities {
                assert!((a.distance_to(b) - b.distance_to(a)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_compute_total_distance() {
        let cities = small_road_map();
        let (mont, jun, phx, lr, sac) = (
            cities[0].coordinates(),
            cities[1].coordinates(),
            cities[2].coordinates(),
            cities[3].coordinates(),
            cities[4].coordinates(),
        );

        let expected = distance(mont.0, mont.1, jun.0, jun.1)
            + distance(jun.0, jun.1, phx.0, phx.1)
            + distance(phx.0, phx.1, lr.0, lr.1)
            + distance(lr.0, lr.1, sac.0, sac.1)
            + distance(sac.0, sac.1, mont.0, mont.1);

        assert_eq!(compute_total_distance(&cities), expected);
        assert_ne!(compute_total_distance(&cities), 42.0);
    }

    #[test]
    fn test_compute_total_distance_degenerate() {
        assert_eq!(compute_total_distance(&[]), 0.0);
        assert_eq!(compute_total_distance(&small_road_map()[..1]), 0.0);
    }

    #[test]
    fn test_cost_invariant_under_rotation() {
        let cities = small_road_map();
        let base = compute_total_distance(&cities);
        for shift in 1..cities.len() {
            let mut rotated = cities.clone();
            rotated.rotate_left(shift);
            assert!((compute_total_distance(&rotated) - base).abs() < 1e-9);
        }
    }

    #[test]
    fn test_from_reader() {
        let data = "Alabama\tMontgomery\t32.361538\t-86.279118\n\
                    Alaska\tJuneau\t58.301935\t-134.41974\n\
                    \n\
                    Arkansas\tLittle Rock\t34.736009\t-92.331122\n";
        let road_map = RoadMap::from_reader("small", data.as_bytes()).unwrap();

        assert_eq!(road_map.len(), 3);
        assert_eq!(road_map.locations[0], small_road_map()[0]);
        assert_eq!(road_map.locations[2].name, "Little Rock");
    }

    #[test]
    fn test_from_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("city-small.txt");
        let road_map = RoadMap::from_file(&path).unwrap();

        assert_eq!(road_map.name, "city-small");
        assert_eq!(road_map.locations, small_road_map());

        let missing = Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-cities.txt");
        assert!(matches!(RoadMap::from_file(missing), Err(InstanceError::Io(_))));
    }

    #[test]
    fn test_from_reader_rejects_bad_records() {
        let missing_field = "Alabama\tMontgomery\t32.361538\n";
        match RoadMap::from_reader("bad", missing_field.as_bytes()) {
            Err(InstanceError::Parse { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected parse error, got {:?}", other),
        }

        let bad_latitude = "Alabama\tMontgomery\t32.361538\t-86.279118\nAlaska\tJuneau\tnorth\t-134.41974\n";
        match RoadMap::from_reader("bad", bad_latitude.as_bytes()) {
            Err(InstanceError::Parse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("latitude"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_is_empty_road_map() {
        let road_map = RoadMap::from_reader("empty", "".as_bytes()).unwrap();
        assert!(road_map.is_empty());
        assert_eq!(road_map.total_distance(), 0.0);
        assert_eq!(road_map.statistics().num_cities, 0);
    }

    #[test]
    fn test_statistics() {
        let road_map = RoadMap::new("small", small_road_map());
        let stats = road_map.statistics();

        assert_eq!(stats.num_cities, 5);
        assert_eq!(stats.min_latitude, 32.361538);
        assert_eq!(stats.max_latitude, 58.301935);
        assert_eq!(stats.min_longitude, -134.41974);
        assert_eq!(stats.max_longitude, -86.279118);
        assert!((stats.cycle_length - road_map.total_distance()).abs() < 1e-9);
        assert!(stats.max_leg >= stats.avg_leg);
    }
}
