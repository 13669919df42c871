//! Benchmarking module for the random-swap search.
//!
//! Runs the search repeatedly with consecutive seeds, each run on its own copy
//! of the road map, and collects per-run results and aggregate statistics.

use crate::heuristics::local_search::{find_best_cycle, SearchConfig};
use crate::instance::RoadMap;
use crate::solution::Solution;

use indicatif::{ProgressBar, ProgressStyle};
use ordered_float::OrderedFloat;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::fs::File;
use std::path::Path;

/// Result of a single seeded run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Road map name
    pub road_map: String,
    /// Run index
    pub run: usize,
    /// Seed used for this run
    pub seed: u64,
    /// Number of iterations
    pub iterations: usize,
    /// Best tour length found
    pub cost: f64,
    /// Computation time in seconds
    pub time: f64,
}

/// Aggregated statistics over all runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkStatistics {
    pub num_runs: usize,
    /// Cycle length of the input order
    pub initial_cost: f64,
    pub best_cost: f64,
    pub avg_cost: f64,
    pub worst_cost: f64,
    /// Sample standard deviation of cost (0 for a single run)
    pub std_cost: f64,
    pub avg_time: f64,
    pub total_time: f64,
}

/// Benchmark configuration
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of independent runs
    pub num_runs: usize,
    /// Iterations per run
    pub iterations: usize,
    /// Seed of the first run; run `i` uses `base_seed + i`
    pub base_seed: u64,
    /// Show a progress bar on stderr
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            num_runs: 10,
            iterations: 10_000,
            base_seed: 42,
            show_progress: true,
        }
    }
}

/// Benchmarking engine
pub struct Benchmark {
    config: BenchmarkConfig,
    results: Vec<RunResult>,
    best: Option<Solution>,
    initial_cost: f64,
}

impl Benchmark {
    pub fn new(config: BenchmarkConfig) -> Self {
        Benchmark {
            config,
            results: Vec::new(),
            best: None,
            initial_cost: 0.0,
        }
    }

    /// Run every configured seed on the road map
    pub fn run(&mut self, road_map: &RoadMap) {
        log::info!(
            "Benchmarking {} ({} cities): {} runs of {} iterations",
            road_map.name,
            road_map.len(),
            self.config.num_runs,
            self.config.iterations
        );

        self.initial_cost = road_map.total_distance();

        let progress = if self.config.show_progress {
            let bar = ProgressBar::new(self.config.num_runs as u64);
            bar.set_style(
                ProgressStyle::with_template("{bar:40} {pos}/{len} runs {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar
        } else {
            ProgressBar::hidden()
        };

        for run in 0..self.config.num_runs {
            let seed = self.config.base_seed.wrapping_add(run as u64);
            let search_config = SearchConfig {
                iterations: self.config.iterations,
                seed,
            };
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut working = road_map.locations.clone();

            let solution = find_best_cycle(&mut working, &search_config, &mut rng);
            self.record_result(road_map, run, seed, solution);

            progress.inc(1);
        }

        progress.finish_and_clear();
    }

    /// Record a result, keeping the best solution so far
    fn record_result(&mut self, road_map: &RoadMap, run: usize, seed: u64, solution: Solution) {
        log::debug!("Run {} (seed {}): {:.2}", run, seed, solution.cost);

        self.results.push(RunResult {
            road_map: road_map.name.clone(),
            run,
            seed,
            iterations: solution.iterations.unwrap_or(0),
            cost: solution.cost,
            time: solution.computation_time,
        });

        let is_better = self.best.as_ref().map_or(true, |best| solution.cost < best.cost);
        if is_better {
            self.best = Some(solution);
        }
    }

    /// Compute statistics over all runs
    pub fn statistics(&self) -> Option<BenchmarkStatistics> {
        if self.results.is_empty() {
            return None;
        }

        let costs: Vec<f64> = self.results.iter().map(|r| r.cost).collect();
        let times: Vec<f64> = self.results.iter().map(|r| r.time).collect();

        let std_cost = if costs.len() > 1 { costs.iter().std_dev() } else { 0.0 };

        Some(BenchmarkStatistics {
            num_runs: self.results.len(),
            initial_cost: self.initial_cost,
            best_cost: Statistics::min(costs.iter()),
            avg_cost: costs.iter().mean(),
            worst_cost: Statistics::max(costs.iter()),
            std_cost,
            avg_time: times.iter().mean(),
            total_time: times.iter().sum(),
        })
    }

    /// The run with the shortest tour
    pub fn best_run(&self) -> Option<&RunResult> {
        self.results.iter().min_by_key(|r| OrderedFloat(r.cost))
    }

    /// The shortest tour found over all runs
    pub fn best_solution(&self) -> Option<&Solution> {
        self.best.as_ref()
    }

    /// Export results to CSV
    pub fn export_to_csv<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = csv::Writer::from_writer(file);

        for result in &self.results {
            writer.serialize(result)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Generate summary report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();

        report.push_str("========================================\n");
        report.push_str("      City Tour Benchmark Report\n");
        report.push_str("========================================\n");
        report.push_str(&format!("Generated: {}\n\n", chrono::Local::now().format("%Y-%m-%d %H:%M:%S")));

        let stats = match self.statistics() {
            Some(stats) => stats,
            None => {
                report.push_str("No runs recorded.\n");
                return report;
            }
        };

        report.push_str(&format!("{:<20} {:>12}\n", "Runs", stats.num_runs));
        report.push_str(&format!("{:<20} {:>12}\n", "Iterations/run", self.config.iterations));
        report.push_str(&format!("{:<20} {:>12.2}\n", "Input order", stats.initial_cost));
        report.push_str(&format!("{:<20} {:>12.2}\n", "Best", stats.best_cost));
        report.push_str(&format!("{:<20} {:>12.2}\n", "Average", stats.avg_cost));
        report.push_str(&format!("{:<20} {:>12.2}\n", "Worst", stats.worst_cost));
        report.push_str(&format!("{:<20} {:>12.2}\n", "Std dev", stats.std_cost));
        report.push_str(&format!("{:<20} {:>12.4}\n", "Avg time (s)", stats.avg_time));

        if let Some(best) = self.best_run() {
            report.push_str(&format!("\nBest run: #{} (seed {}) {:.2} miles\n", best.run, best.seed, best.cost));
        }

        report
    }

    /// Get all results
    pub fn results(&self) -> &[RunResult] {
        &self.results
    }
}
