//! City Tour Solver - Command Line Interface
//!
//! Loads a tab-separated list of cities and searches for a short round trip.

use clap::{Parser, Subcommand};
use city_tour_solver::benchmark::{Benchmark, BenchmarkConfig};
use city_tour_solver::heuristics::local_search::RandomSwapSearch;
use city_tour_solver::instance::RoadMap;
use city_tour_solver::prompt::ask_yes_or_no;
use city_tour_solver::report::{format_cities, format_map};

use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "city-tour-solver")]
#[command(version = "1.0")]
#[command(about = "Finds a short round trip through a list of cities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a short tour
    Solve {
        /// Tab-separated city file (state, city, latitude, longitude)
        #[arg(short, long, default_value = "city-data.txt")]
        input: PathBuf,

        /// Number of swap iterations
        #[arg(short = 'n', long, default_value = "10000")]
        iterations: usize,

        /// Random seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Output solution to a JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Ask to search again after each tour, bumping the seed each round
        #[arg(long)]
        interactive: bool,
    },

    /// Show the cities and statistics of a city file
    Analyze {
        /// Tab-separated city file
        #[arg(short, long, default_value = "city-data.txt")]
        input: PathBuf,
    },

    /// Run the search with several seeds and summarize
    Benchmark {
        /// Tab-separated city file
        #[arg(short, long, default_value = "city-data.txt")]
        input: PathBuf,

        /// Number of runs
        #[arg(short, long, default_value = "10")]
        runs: usize,

        /// Number of swap iterations per run
        #[arg(short = 'n', long, default_value = "10000")]
        iterations: usize,

        /// Seed of the first run
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Output CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { input, iterations, seed, output, interactive } => {
            solve(&input, iterations, seed, output, interactive);
        }

        Commands::Analyze { input } => {
            analyze(&input);
        }

        Commands::Benchmark { input, runs, iterations, seed, output } => {
            run_benchmark(&input, runs, iterations, seed, output);
        }
    }
}

fn load_road_map(path: &Path) -> RoadMap {
    match RoadMap::from_file(path) {
        Ok(road_map) => road_map,
        Err(e) => {
            eprintln!("Error loading cities from {:?}: {}", path, e);
            std::process::exit(1);
        }
    }
}

fn solve(path: &Path, iterations: usize, seed: u64, output: Option<PathBuf>, interactive: bool) {
    let mut seed = seed;

    loop {
        let road_map = load_road_map(path);

        println!("City data input:");
        print!("{}", format_cities(&road_map.locations));
        println!("\nSearching for the shortest round trip ({} iterations, seed {})...\n", iterations, seed);

        let search = RandomSwapSearch::with_params(iterations, seed);
        let solution = search.run(&road_map);

        print!("{}", format_map(&solution));
        println!();
        print!("{}", solution);

        if let Some(out_path) = &output {
            match serde_json::to_string_pretty(&solution) {
                Ok(json) => match std::fs::write(out_path, json) {
                    Ok(()) => println!("Solution saved to {:?}", out_path),
                    Err(e) => eprintln!("Failed to write {:?}: {}", out_path, e),
                },
                Err(e) => eprintln!("Failed to serialize solution: {}", e),
            }
        }

        if !interactive {
            break;
        }

        let stdin = std::io::stdin();
        let again = match ask_yes_or_no("Want to try again? ", &mut stdin.lock(), &mut std::io::stdout()) {
            Ok(answer) => answer,
            Err(e) => {
                log::warn!("Could not read an answer, stopping: {}", e);
                false
            }
        };
        if !again {
            break;
        }
        seed = seed.wrapping_add(1);
    }
}

fn analyze(path: &Path) {
    let road_map = load_road_map(path);

    println!("========== Road Map Analysis ==========\n");
    print!("{}", format_cities(&road_map.locations));
    println!();
    print!("{}", road_map.statistics());
}

fn run_benchmark(path: &Path, runs: usize, iterations: usize, seed: u64, output: Option<PathBuf>) {
    let road_map = load_road_map(path);

    if road_map.is_empty() {
        eprintln!("No cities found in {:?}", path);
        return;
    }

    let config = BenchmarkConfig {
        num_runs: runs,
        iterations,
        base_seed: seed,
        ..Default::default()
    };

    let mut benchmark = Benchmark::new(config);
    benchmark.run(&road_map);

    println!("{}", benchmark.generate_report());

    if let Some(best) = benchmark.best_solution() {
        print!("{}", format_map(best));
    }

    if let Some(out_path) = output {
        match benchmark.export_to_csv(&out_path) {
            Ok(()) => println!("\nResults exported to {:?}", out_path),
            Err(e) => eprintln!("Failed to export results: {}", e),
        }
    }
}
