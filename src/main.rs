//! # tsp-anneal CLI
//!
//! Reads delivery points from an `x,y` text file, anneals a closed tour
//! through them, and prints the route with its total distance.

use clap::Parser;
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;
use tsp_anneal::points::{read_points, resolve_path, DEFAULT_DIRECTORY};
use tsp_anneal::{solve_seeded, Point, SaConfig, Tour};

/// Command-line interface for tsp-anneal
#[derive(Parser)]
#[command(name = "tsp-anneal")]
#[command(version)]
#[command(about = "Approximate the shortest closed tour through a set of 2D points")]
struct Cli {
    /// File containing delivery points, one `x,y` pair per line
    #[arg(long, default_value = tsp_anneal::points::DEFAULT_FILE_NAME)]
    file: String,

    /// Directory containing the file
    #[arg(long)]
    path: Option<PathBuf>,

    /// Starting temperature of the annealing schedule
    #[arg(long, default_value_t = SaConfig::default().initial_temperature)]
    initial_temperature: f64,

    /// Geometric cooling factor, in (0, 1)
    #[arg(long, default_value_t = SaConfig::default().cooling_rate)]
    cooling_rate: f64,

    /// Temperature at which the search stops
    #[arg(long, default_value_t = SaConfig::default().min_temperature)]
    min_temperature: f64,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> SaConfig {
        let config = SaConfig::default()
            .with_initial_temperature(self.initial_temperature)
            .with_cooling_rate(self.cooling_rate)
            .with_min_temperature(self.min_temperature);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn format_route(route: &[Point]) -> String {
    let parts: Vec<String> = route.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

fn run(cli: &Cli) -> tsp_anneal::Result<Tour> {
    if cli.path.is_none() {
        println!("Path not provided, reading {} from the default directory", cli.file);
        println!("Default Directory: {DEFAULT_DIRECTORY}");
    }
    let file = resolve_path(cli.path.as_deref(), Some(&cli.file));
    let points = read_points(&file)?;
    solve_seeded(&points, &cli.config())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();

    match run(&cli) {
        Ok(tour) => {
            println!("Shortest Route: {}", format_route(&tour.route));
            println!("Total Distance: {}", tour.cost);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_route() {
        let route = [Point::new(0.0, 0.0), Point::new(3.5, -4.0)];
        assert_eq!(format_route(&route), "[(0, 0), (3.5, -4)]");
        assert_eq!(format_route(&[]), "[]");
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["tsp-anneal"]);
        assert_eq!(cli.file, "delivery_points.txt");
        assert!(cli.path.is_none());
        assert_eq!(cli.config(), SaConfig::default());
    }

    #[test]
    fn test_cli_schedule_flags() {
        let cli = Cli::parse_from([
            "tsp-anneal",
            "--path",
            "data",
            "--cooling-rate",
            "0.9",
            "--min-temperature",
            "0.5",
            "--seed",
            "7",
        ]);
        let config = cli.config();
        assert_eq!(cli.path, Some(PathBuf::from("data")));
        assert_eq!(config.cooling_rate, 0.9);
        assert_eq!(config.min_temperature, 0.5);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_run_rejects_bad_schedule() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DIRECTORY);
        let cli = Cli::parse_from([
            "tsp-anneal",
            "--path",
            dir.to_str().unwrap(),
            "--initial-temperature",
            "1",
            "--min-temperature",
            "10",
        ]);
        assert!(matches!(
            run(&cli),
            Err(tsp_anneal::TspError::InvalidScheduleParameters(_))
        ));
    }
}
