//! # knights_tour
//!
//! `knights_tour` walks knight's tours on square boards using Warnsdorf's rule:
//! from each square the knight moves to the unvisited square with the fewest
//! onward moves. The walk never backtracks, so it either covers the whole board
//! or stops at a dead end, and both outcomes are reported.
//!
//! ## Usage
//!
//! ```sh
//! knights_tour [SUBCOMMAND] [OPTIONS]
//! ```
//!
//! ### Subcommands
//!
//! 1.  **`tour`**: Walk one tour.
//!     ```sh
//!     knights_tour tour --size 8 -x 0 -y 0 --board
//!     ```
//!
//! 2.  **`sweep`**: Walk a tour from every square and count the complete ones.
//!     ```sh
//!     knights_tour sweep --size 6 --heuristic dynamic
//!     ```
//!
//! 3.  **`completions`**: Print a shell completion script.
//!
//! ### Common Options
//!
//! -   `-d, --debug`: Log board construction and walk results.
//! -   `--no-stats`: Skip the statistics table.
//! -   `-p, --print-path`: Print the visited squares in order.
//! -   `-b, --board`: Print the board with step numbers.
//! -   `-j, --json`: Emit JSON instead of text.
//! -   `--heuristic <static|dynamic>`: `static` ranks squares by their degree on
//!     the empty board (default); `dynamic` recounts unvisited neighbours at
//!     every step.

use crate::command_line::cli::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod command_line;

/// Global allocator using `tikv-jemallocator`, which also backs the memory
/// figures in the statistics table.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug());

    if let Err(e) = command_line::cli::run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
