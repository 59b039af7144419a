//! Example demonstrating board generation.
//!
//! This example shows how to:
//! - Create a `BoardGenerator` for a difficulty
//! - Generate a random or seeded board
//! - Display the board, seed, and parity details
//! - Sample many boards in parallel to see how often the solvability
//!   correction kicks in
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Pick a difficulty and reproduce a board from its seed:
//!
//! ```sh
//! cargo run --example generate_board -- --difficulty hard --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Sample boards and report correction statistics:
//!
//! ```sh
//! cargo run --example generate_board -- --difficulty medium --samples 100000
//! ```

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use tileslide_core::Difficulty;
use tileslide_generator::{BoardGenerator, GeneratedBoard, PuzzleSeed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board size to generate.
    #[arg(long, value_name = "LEVEL", default_value = "easy")]
    difficulty: DifficultyArg,

    /// Seed to reproduce (64 hex characters).
    #[arg(long, value_name = "HEX", conflicts_with = "samples")]
    seed: Option<PuzzleSeed>,

    /// Number of random boards to sample for statistics.
    #[arg(long, value_name = "COUNT")]
    samples: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let difficulty = Difficulty::from(args.difficulty);
    let generator = BoardGenerator::for_difficulty(difficulty);

    if let Some(samples) = args.samples {
        print_statistics(difficulty, &generator, samples);
        return;
    }

    let generated = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    print_board(difficulty, &generated);
}

fn print_board(difficulty: Difficulty, generated: &GeneratedBoard) {
    let board = &generated.board;
    println!("Difficulty:");
    println!("  {difficulty}");
    println!();
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Board:");
    for row in board.cells().chunks(board.side()) {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| cell.map_or_else(|| ".".to_owned(), |tile| tile.to_string()))
            .map(|text| format!("{text:>2}"))
            .collect();
        println!("  {}", cells.join(" "));
    }
    println!();
    println!("Parity:");
    println!("  inversions: {}", board.inversions());
    println!("  empty row from bottom: {}", board.empty_row_from_bottom());
    println!("  corrected: {}", generated.corrected);
    println!("  manhattan distance: {}", board.manhattan_distance());
}

fn print_statistics(difficulty: Difficulty, generator: &BoardGenerator, samples: usize) {
    if samples == 0 {
        eprintln!("--samples must be at least 1.");
        std::process::exit(1);
    }

    let (corrected, distance) = (0..samples)
        .into_par_iter()
        .map(|_| {
            let generated = generator.generate();
            (
                usize::from(generated.corrected),
                generated.board.manhattan_distance(),
            )
        })
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

    #[expect(clippy::cast_precision_loss)]
    let (corrected_rate, mean_distance) = (
        corrected as f64 / samples as f64 * 100.0,
        distance as f64 / samples as f64,
    );
    println!("Difficulty:");
    println!("  {difficulty}");
    println!();
    println!("Samples:");
    println!("  boards: {samples}");
    println!("  corrected: {corrected} ({corrected_rate:.1}%)");
    println!("  mean manhattan distance: {mean_distance:.2}");
}
