//! Solution representation for city tours.
//!
//! A solution pairs a tour (an ordering of the road map's cities, implicitly closed)
//! with its total length, and carries bookkeeping about the run that produced it.

use crate::heuristics::perturbation::{swap_adjacent_cities, swap_cities};
use crate::instance::{compute_total_distance, Location};
use serde::{Deserialize, Serialize};

/// Represents a closed tour and its cost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// Cities in visiting order; the last one connects back to the first
    pub tour: Vec<Location>,
    /// Total tour length in miles
    pub cost: f64,
    /// Algorithm that generated this solution
    pub algorithm: String,
    /// Computation time in seconds
    pub computation_time: f64,
    /// Number of iterations (if applicable)
    pub iterations: Option<usize>,
}

/// One leg of a closed tour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub from: Location,
    pub to: Location,
    pub distance: f64,
}

impl Solution {
    /// Create a solution from a tour
    pub fn from_tour(tour: Vec<Location>, algorithm: &str) -> Self {
        let cost = compute_total_distance(&tour);
        Solution {
            tour,
            cost,
            algorithm: algorithm.to_string(),
            computation_time: 0.0,
            iterations: None,
        }
    }

    /// Recompute the cost from the tour
    pub fn validate(&mut self) {
        self.cost = compute_total_distance(&self.tour);
    }

    /// Legs of the closed tour, from each city to its successor
    pub fn legs(&self) -> Vec<Leg> {
        let n = self.tour.len();
        (0..n)
            .map(|i| {
                let from = &self.tour[i];
                let to = &self.tour[(i + 1) % n];
                Leg {
                    from: from.clone(),
                    to: to.clone(),
                    distance: from.distance_to(to),
                }
            })
            .collect()
    }

    /// Check that the tour visits exactly the given cities, each as often as it appears there
    pub fn is_permutation_of(&self, locations: &[Location]) -> bool {
        if self.tour.len() != locations.len() {
            return false;
        }

        let mut used = vec![false; locations.len()];
        self.tour.iter().all(|city| {
            match (0..locations.len()).find(|&i| !used[i] && &locations[i] == city) {
                Some(i) => {
                    used[i] = true;
                    true
                }
                None => false,
            }
        })
    }

    /// Get the city at a given position (circular), `None` for an empty tour
    pub fn city_at(&self, pos: usize) -> Option<&Location> {
        if self.tour.is_empty() {
            return None;
        }
        self.tour.get(pos % self.tour.len())
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution ({})", self.algorithm)?;
        writeln!(f, "  Cost: {:.2} miles", self.cost)?;
        writeln!(f, "  Time: {:.4}s", self.computation_time)?;
        if let Some(iter) = self.iterations {
            writeln!(f, "  Iterations: {}", iter)?;
        }
        let names: Vec<&str> = self.tour.iter().map(|l| l.name.as_str()).collect();
        writeln!(f, "  Tour: {}", names.join(" -> "))
    }
}

/// A perturbation of a tour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Swap the city at the index with its successor
    AdjacentSwap(usize),
    /// Swap the cities at two indices
    Swap(usize, usize),
}

impl Move {
    /// Apply the move in place and return the new tour cost
    pub fn apply(&self, tour: &mut [Location]) -> f64 {
        match *self {
            Move::AdjacentSwap(i) => swap_adjacent_cities(tour, i),
            Move::Swap(i, j) => swap_cities(tour, i, j),
        }
    }
}
