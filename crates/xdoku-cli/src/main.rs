//! Command-line solver for standard and diagonal sudoku puzzles.
//!
//! # Usage
//!
//! Solve a standard puzzle:
//!
//! ```sh
//! xdoku '4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......'
//! ```
//!
//! Solve a diagonal-variant (Sudoku X) puzzle and replay every
//! intermediate assignment:
//!
//! ```sh
//! xdoku --diagonal --replay \
//!     '2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3'
//! ```
//!
//! Set `RUST_LOG=debug` to watch the search branch.

use std::process;

use clap::Parser;
use xdoku_core::{AssignmentSink, DiscardLog, ReplayLog, Topology, Variant};
use xdoku_solver::{Outcome, Solver};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// 81-character puzzle over `1`-`9` and `.`, in row-major order.
    puzzle: String,

    /// Include the two corner-to-corner diagonal units (Sudoku X).
    #[arg(long)]
    diagonal: bool,

    /// Print every intermediate assignment snapshot before the result.
    #[arg(long)]
    replay: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let variant = if args.diagonal {
        Variant::Diagonal
    } else {
        Variant::Standard
    };
    let topology = Topology::new(variant);
    let solver = Solver::new(&topology);

    let mut replay = ReplayLog::new();
    let mut discard = DiscardLog;
    let log: &mut dyn AssignmentSink = if args.replay { &mut replay } else { &mut discard };

    let outcome = match solver.solve_line(&args.puzzle, log) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    if args.replay {
        for (step, snapshot) in replay.snapshots().iter().enumerate() {
            println!("assignment {}:", step + 1);
            println!("{snapshot}");
        }
    }

    match outcome {
        Outcome::Solved(grid) => {
            log::info!("solved");
            println!("{grid}");
        }
        Outcome::Unsolvable => {
            eprintln!("no solution exists for this puzzle");
            process::exit(1);
        }
    }
}
