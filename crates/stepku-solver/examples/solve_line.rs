//! Example solving a puzzle line from the command line.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_line -- \
//!     "........74.6..7.....71285.6..3.71.5.8.......3.1.84.2..6.89327.....4..9.51........"
//! ```
//!
//! Print the board after every controller decision:
//!
//! ```sh
//! cargo run --example solve_line -- --watch "<81 characters>"
//! ```
//!
//! Backtrack and branch decisions are logged at debug level; run with
//! `RUST_LOG=debug` to see them.

use std::process;

use clap::Parser;
use stepku_solver::{SolverState, StepSolver};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The puzzle: 81 characters, row-major, digits 1-9 as clues and any
    /// other character as a blank.
    puzzle: String,

    /// Print the board after every step instead of only at the end.
    #[arg(long)]
    watch: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut solver = StepSolver::new();
    if let Err(err) = solver.load(&args.puzzle) {
        eprintln!("{err}");
        process::exit(2);
    }

    while solver.step() {
        if args.watch {
            println!("-- step {}, depth {}", solver.move_count(), solver.stack_depth());
            println!("{}", solver.board().expect("a board is loaded"));
        }
    }

    println!("{}", solver.board().expect("a board is loaded"));
    println!();
    println!("Outcome: {}", solver.state());
    println!("Moves:   {}", solver.move_count());

    if solver.state() == SolverState::Unsolvable {
        process::exit(1);
    }
}
