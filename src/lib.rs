//! City Tour Solver Library
//!
//! Finds short closed tours through a fixed list of cities using a stochastic
//! random-swap local search over great-circle (haversine) distances.
//!
//! # Features
//!
//! - Tab-separated city file parsing
//! - Haversine distances in miles and closed-cycle tour lengths
//! - Adjacent and arbitrary swap perturbations
//! - Seeded, reproducible random-swap search
//! - Multi-seed benchmarking and plain-text reports
//!
//! # Example
//!
//! ```no_run
//! use city_tour_solver::instance::RoadMap;
//! use city_tour_solver::heuristics::local_search::RandomSwapSearch;
//! use city_tour_solver::report::format_map;
//!
//! let road_map = RoadMap::from_file("city-data.txt").unwrap();
//!
//! let search = RandomSwapSearch::with_params(10_000, 42);
//! let solution = search.run(&road_map);
//!
//! print!("{}", format_map(&solution));
//! ```

pub mod error;
pub mod instance;
pub mod solution;
pub mod heuristics;
pub mod benchmark;
pub mod report;
pub mod prompt;

pub use error::InstanceError;
pub use instance::{Location, RoadMap};
pub use solution::Solution;
