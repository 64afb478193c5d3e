//! The ninefold interactive puzzle-solver shell.
//!
//! Reads a puzzle from stdin one cell at a time, solves it (or reports that
//! no solution exists), and offers another round.

use std::io;

use clap::Parser;
use ninefold_solver::{BacktrackSolver, DEFAULT_ATTEMPT_LIMIT};

mod input;
mod render;
mod shell;

/// Interactive 9×9 number-place puzzle solver.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Abandon the search after this many tentative placements and report
    /// the puzzle as unsolvable.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_ATTEMPT_LIMIT)]
    attempt_limit: usize,
}

fn main() -> io::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let solver = BacktrackSolver::with_attempt_limit(args.attempt_limit);
    shell::run(&solver, io::stdin().lock(), io::stdout().lock())
}
