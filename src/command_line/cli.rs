#![allow(clippy::cast_precision_loss)]

use clap::{Args, CommandFactory, Parser, Subcommand};
use itertools::Itertools;
use knights_tour::tour::board::{BoardGraph, board_size};
use knights_tour::tour::coordinate::Coordinate;
use knights_tour::tour::degree::HeuristicType;
use knights_tour::tour::error::TourError;
use knights_tour::tour::walker::{Tour, TourOutcome, sweep, walk_with};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the knight's tour application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(
    name = "knights_tour",
    version,
    about = "Knight's tours by Warnsdorf's rule"
)]
pub(crate) struct Cli {
    /// Specifies the subcommand to execute (e.g. `tour`, `sweep`).
    #[clap(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether the chosen subcommand asked for debug output.
    pub(crate) const fn debug(&self) -> bool {
        match &self.command {
            Commands::Tour { common, .. } | Commands::Sweep { common, .. } => common.debug,
            Commands::Completions { .. } => false,
        }
    }
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Walk a single tour from a start square.
    Tour {
        /// Side length of the board.
        #[arg(short = 'n', long, default_value_t = 8, allow_negative_numbers = true)]
        size: i64,

        /// Column of the start square.
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        x: i64,

        /// Row of the start square.
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        y: i64,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Walk an independent tour from every square of the board and summarise.
    Sweep {
        /// Side length of the board.
        #[arg(short = 'n', long, default_value_t = 8, allow_negative_numbers = true)]
        size: i64,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct CommonOptions {
    /// Enable debug output. `RUST_LOG` takes precedence when set.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Skip the statistics table.
    #[arg(long, default_value_t = false)]
    pub(crate) no_stats: bool,

    /// Print the visited squares in order.
    #[arg(short, long, default_value_t = false)]
    pub(crate) print_path: bool,

    /// Print the board with the step number of every square.
    #[arg(short, long, default_value_t = false)]
    pub(crate) board: bool,

    /// Emit the result as JSON instead of text.
    #[arg(short, long, default_value_t = false)]
    pub(crate) json: bool,

    /// Ranking used to choose between candidate squares.
    #[arg(long, default_value_t = HeuristicType::Static)]
    pub(crate) heuristic: HeuristicType,
}

/// Errors surfaced to the user by the command-line front end.
#[derive(Error, Debug)]
pub(crate) enum CliError {
    #[error(transparent)]
    Tour(#[from] TourError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct TourReport<'a> {
    heuristic: HeuristicType,
    outcome: TourOutcome,
    length: usize,
    tour: &'a Tour,
}

#[derive(Serialize)]
struct SweepEntry {
    start: Coordinate,
    outcome: TourOutcome,
    length: usize,
}

#[derive(Serialize)]
struct SweepReport {
    size: usize,
    heuristic: HeuristicType,
    complete: usize,
    starts: Vec<SweepEntry>,
}

/// Dispatches a parsed command line.
///
/// # Errors
/// Invalid board sizes or start squares, and JSON serialisation failures.
pub(crate) fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Tour { size, x, y, common } => run_tour(size, x, y, &common),
        Commands::Sweep { size, common } => run_sweep(size, &common),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "knights_tour", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Builds the board, walks one tour and reports it.
///
/// # Arguments
/// * `size` - Requested side length, validated before the board is built.
/// * `x`, `y` - Requested start square, validated against the board.
/// * `common` - Output and heuristic options.
pub(crate) fn run_tour(
    size: i64,
    x: i64,
    y: i64,
    common: &CommonOptions,
) -> Result<(), CliError> {
    let size = board_size(size)?;
    let start = Coordinate::checked(x, y, size)?;

    let time = std::time::Instant::now();
    let graph = BoardGraph::build(size)?;
    let heuristic = common.heuristic.to_impl(&graph);
    let build_time = time.elapsed();

    let time = std::time::Instant::now();
    let tour = walk_with(&graph, &heuristic, start)?;
    let walk_time = time.elapsed();

    if common.json {
        let report = TourReport {
            heuristic: common.heuristic,
            outcome: tour.outcome(),
            length: tour.len(),
            tour: &tour,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if common.print_path {
        println!("Path: {}", tour.path().iter().join(" -> "));
    }

    if common.board {
        print_board(&tour);
    }

    if !common.no_stats {
        print_tour_stats(&tour, common.heuristic, build_time, walk_time);
    }

    match tour.outcome() {
        TourOutcome::Complete => println!("\nCOMPLETE TOUR"),
        TourOutcome::DeadEnd => println!(
            "\nDEAD END after {} of {} squares",
            tour.len(),
            size * size
        ),
    }

    Ok(())
}

/// Walks a tour from every square and reports how many cover the board.
pub(crate) fn run_sweep(size: i64, common: &CommonOptions) -> Result<(), CliError> {
    let size = board_size(size)?;

    let time = std::time::Instant::now();
    let tours = sweep(size, common.heuristic)?;
    let elapsed = time.elapsed();

    let complete = tours.iter().filter(|t| t.is_complete()).count();

    if common.json {
        let report = SweepReport {
            size,
            heuristic: common.heuristic,
            complete,
            starts: tours
                .iter()
                .map(|t| SweepEntry {
                    start: t.path()[0],
                    outcome: t.outcome(),
                    length: t.len(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if common.print_path {
        for t in &tours {
            println!("{:<10} {:>6}  {:?}", t.path()[0].to_string(), t.len(), t.outcome());
        }
    }

    if !common.no_stats {
        print_sweep_stats(size, &tours, common.heuristic, elapsed);
    }

    println!("\n{complete} of {} starts give a complete tour", tours.len());
    Ok(())
}

/// Prints the step grid, top row first.
fn print_board(tour: &Tour) {
    let width = (tour.board_size() * tour.board_size()).to_string().len();
    for row in tour.step_grid().iter().rev() {
        let line = row
            .iter()
            .map(|&s| {
                if s == 0 {
                    format!("{:>width$}", ".")
                } else {
                    format!("{s:>width$}")
                }
            })
            .join(" ");
        println!("{line}");
    }
}

/// Allocated and resident memory in MiB, if jemalloc reports them.
fn memory_usage() -> Option<(f64, f64)> {
    epoch::advance().ok()?;
    let allocated = stats::allocated::read().ok()?;
    let resident = stats::resident::read().ok()?;
    Some((
        allocated as f64 / (1024.0 * 1024.0),
        resident as f64 / (1024.0 * 1024.0),
    ))
}

/// Helper function to print a single statistic line in a formatted table row.
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The value of the statistic, implementing `std::fmt::Display`.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

fn print_memory() {
    if let Some((allocated, resident)) = memory_usage() {
        stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
        stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    }
}

fn print_tour_stats(tour: &Tour, heuristic: HeuristicType, build: Duration, walk: Duration) {
    let size = tour.board_size();
    let walk_secs = walk.as_secs_f64();
    let s = tour.stats();

    println!("\n=========================[ Board Statistics ]========================");
    stat_line("Board size", format!("{size}x{size}"));
    stat_line("Squares", size * size);
    stat_line("Build time (s)", format!("{:.3}", build.as_secs_f64()));

    println!("=========================[ Tour Statistics ]=========================");
    stat_line("Heuristic", heuristic);
    stat_line("Start", tour.path()[0]);
    stat_line("Squares visited", tour.len());
    stat_line_with_rate("Steps", s.steps, walk_secs);
    stat_line_with_rate("Candidates", s.candidates_examined, walk_secs);
    stat_line("Tie-breaks", s.tie_breaks);
    print_memory();
    stat_line("CPU time (s)", format!("{walk_secs:.3}"));
    println!("=====================================================================");
}

fn print_sweep_stats(size: usize, tours: &[Tour], heuristic: HeuristicType, elapsed: Duration) {
    let elapsed_secs = elapsed.as_secs_f64();
    let lengths = tours.iter().map(Tour::len).collect_vec();
    let mean = lengths.iter().sum::<usize>() as f64 / lengths.len().max(1) as f64;

    println!("\n=========================[ Sweep Statistics ]========================");
    stat_line("Board size", format!("{size}x{size}"));
    stat_line("Heuristic", heuristic);
    stat_line_with_rate("Tours", tours.len(), elapsed_secs);
    stat_line("Complete tours", tours.iter().filter(|t| t.is_complete()).count());
    stat_line("Shortest tour", lengths.iter().min().copied().unwrap_or(0));
    stat_line("Longest tour", lengths.iter().max().copied().unwrap_or(0));
    stat_line("Mean tour length", format!("{mean:.2}"));
    print_memory();
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}
