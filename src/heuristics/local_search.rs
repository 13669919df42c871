//! Random-swap local search for city tours.
//!
//! The search walks a single trajectory: each iteration perturbs the working
//! tour in place (adjacent swap on even iterations, arbitrary swap on odd ones)
//! and never reverts a worse move. Only the best tour seen is remembered.

use crate::instance::{Location, RoadMap};
use crate::solution::{Move, Solution};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

/// Name recorded on solutions produced by the random-swap search
pub const ALGORITHM_NAME: &str = "RandomSwap";

/// Trait for local search improvement methods
pub trait LocalSearch {
    fn improve(&self, solution: &mut Solution) -> bool;
    fn name(&self) -> &str;
}

/// Random-swap search configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of perturbations after the initial one
    pub iterations: usize,
    /// Random seed
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            iterations: 10_000,
            seed: 42,
        }
    }
}

/// Search for a short closed tour by random swaps, returning the best tour seen.
///
/// `road_map` is the working tour and is left in whatever order the walk ended in.
/// The returned solution owns an independent copy of the best tour.
pub fn find_best_cycle<R: Rng + ?Sized>(road_map: &mut [Location], config: &SearchConfig, rng: &mut R) -> Solution {
    let start = Instant::now();
    let n = road_map.len();

    if n == 0 {
        let mut solution = Solution::from_tour(Vec::new(), ALGORITHM_NAME);
        solution.iterations = Some(config.iterations);
        return solution;
    }

    let mut best_cost = Move::AdjacentSwap(rng.gen_range(0..n)).apply(road_map);
    let mut best_tour = road_map.to_vec();
    log::debug!("Initial tour cost: {:.2}", best_cost);

    for iteration in 0..config.iterations {
        let mv = if iteration % 2 == 0 {
            Move::AdjacentSwap(rng.gen_range(0..n))
        } else {
            let index1 = rng.gen_range(0..n);
            let index2 = rng.gen_range(0..n);
            Move::Swap(index1, index2)
        };

        let cost = mv.apply(road_map);

        if cost < best_cost {
            best_tour.clone_from_slice(road_map);
            best_cost = cost;
            log::debug!("Iteration {}: new best {:.2} via {:?}", iteration, best_cost, mv);
        }
    }

    let computation_time = start.elapsed().as_secs_f64();
    log::info!(
        "{} finished {} iterations on {} cities: best {:.2} miles in {:.4}s",
        ALGORITHM_NAME,
        config.iterations,
        n,
        best_cost,
        computation_time
    );

    Solution {
        tour: best_tour,
        cost: best_cost,
        algorithm: ALGORITHM_NAME.to_string(),
        computation_time,
        iterations: Some(config.iterations),
    }
}

/// Random-swap search seeded from its configuration
///
/// Runs of the same configuration on the same tour produce the same result.
pub struct RandomSwapSearch {
    pub config: SearchConfig,
}

impl RandomSwapSearch {
    pub fn new() -> Self {
        RandomSwapSearch {
            config: SearchConfig::default(),
        }
    }

    pub fn with_params(iterations: usize, seed: u64) -> Self {
        RandomSwapSearch {
            config: SearchConfig { iterations, seed },
        }
    }

    /// Search starting from the road map's input order, leaving the road map untouched
    pub fn run(&self, road_map: &RoadMap) -> Solution {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let mut working = road_map.locations.clone();
        find_best_cycle(&mut working, &self.config, &mut rng)
    }
}

impl Default for RandomSwapSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalSearch for RandomSwapSearch {
    fn improve(&self, solution: &mut Solution) -> bool {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let mut working = solution.tour.clone();
        let best = find_best_cycle(&mut working, &self.config, &mut rng);

        let improved = best.cost < solution.cost;
        if improved {
            *solution = best;
        } else {
            solution.iterations = best.iterations;
            solution.computation_time = best.computation_time;
        }

        improved
    }

    fn name(&self) -> &str {
        ALGORITHM_NAME
    }
}
