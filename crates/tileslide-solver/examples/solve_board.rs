//! Example that solves a board given on the command line.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_board -- "8 6 7/2 5 4/3 . 1"
//! ```
//!
//! Use the row-by-row planner, which handles 5×5 boards quickly but gives
//! longer solutions:
//!
//! ```sh
//! cargo run --example solve_board -- --plan "6 1 3 4 5/2 12 8 9 10/11 . 7 13 15/16 17 18 14 19/21 22 23 20 24"
//! ```
//!
//! Limit the search effort:
//!
//! ```sh
//! cargo run --example solve_board -- --node-limit 1000000 "5 1 2 4/9 6 3 8/13 10 7 11/. 14 15 12"
//! ```

use std::process;

use clap::Parser;
use tileslide_core::Board;
use tileslide_solver::{Planner, Solver};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board rows separated by `/`, cells by spaces, `.` for the empty cell.
    board: Board,

    /// Use the planner instead of searching for a shortest solution.
    #[arg(long)]
    plan: bool,

    /// Maximum nodes to expand before giving up.
    #[arg(long, value_name = "COUNT")]
    node_limit: Option<u64>,
}

fn main() {
    let args = Args::parse();
    let result = match (args.plan, args.node_limit) {
        (false, Some(limit)) => Solver::with_node_limit(limit).solve(&args.board),
        (false, None) => Solver::new().solve(&args.board),
        (true, Some(limit)) => Planner::with_node_limit(limit).solve(&args.board),
        (true, None) => Planner::new().solve(&args.board),
    };

    let solution = match result {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("Cannot solve {}: {e}", args.board);
            process::exit(1);
        }
    };

    println!("Board:");
    println!("  {}", args.board);
    println!();
    println!("Moves ({}):", solution.len());
    let mut board = args.board.clone();
    for &index in solution.moves() {
        let tile = board.cell(index).map(|tile| tile.to_string()).unwrap_or_default();
        board = board.slide(index).unwrap();
        println!("  press {index:>2} (tile {tile:>2})  ->  {board}");
    }
    println!();
    println!("Stats:");
    println!("  nodes expanded: {}", solution.stats().nodes_expanded());
    let label = if args.plan { "stages" } else { "iterations" };
    println!("  {label}: {}", solution.stats().iterations());
}
