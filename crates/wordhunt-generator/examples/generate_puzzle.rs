//! Example demonstrating word-search puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` from a `WordBank` and a `PuzzleConfig`
//! - Generate a puzzle from a random seed, a hex seed, or a seed phrase
//! - Measure how often lenient placement drops words
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a puzzle from its seed, or derive one from any phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! cargo run --example generate_puzzle -- --phrase "whiskers"
//! ```
//!
//! Sample many puzzles in parallel and report placement statistics:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --samples 10000 --size 8
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use wordhunt_generator::{
    GeneratedPuzzle, PlacementPolicy, PuzzleConfig, PuzzleGenerator, PuzzleSeed, WordBank,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid side length.
    #[arg(long, value_name = "N", default_value_t = 10)]
    size: usize,

    /// Minimum number of words.
    #[arg(long, value_name = "COUNT", default_value_t = 5)]
    min_words: usize,

    /// Maximum number of words.
    #[arg(long, value_name = "COUNT", default_value_t = 10)]
    max_words: usize,

    /// Placement attempts per word.
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    retry_budget: usize,

    /// Rebuild the grid until every word fits instead of dropping words.
    #[arg(long)]
    strict: bool,

    /// Seed as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Derive the seed from a phrase.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Generate this many puzzles and print placement statistics instead.
    #[arg(long, value_name = "COUNT")]
    samples: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let bank = WordBank::default();
    let policy = if args.strict {
        PlacementPolicy::strict()
    } else {
        PlacementPolicy::Lenient
    };
    let config = PuzzleConfig::default()
        .grid_size(args.size)
        .word_count(args.min_words..=args.max_words)
        .retry_budget(args.retry_budget)
        .placement_policy(policy);
    if let Err(e) = config.validate() {
        eprintln!("{e}");
        process::exit(2);
    }
    let generator = PuzzleGenerator::new(&bank, &config);

    if let Some(samples) = args.samples {
        if samples == 0 {
            eprintln!("--samples must be at least 1.");
            process::exit(1);
        }
        print_stats(&generator, samples);
        return;
    }

    let seed = args
        .seed
        .or_else(|| args.phrase.as_deref().map(PuzzleSeed::from_phrase))
        .unwrap_or_else(PuzzleSeed::random);
    match generator.generate_with_seed(seed) {
        Ok(puzzle) => print_puzzle(&puzzle),
        Err(e) => {
            eprintln!("Generation failed: {e}");
            process::exit(1);
        }
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    if let Some(seed) = puzzle.seed {
        println!("Seed:");
        println!("  {seed}");
        println!();
    }

    println!("Grid:");
    for line in puzzle.grid.to_string().lines() {
        let spaced = line
            .chars()
            .map(|ch| ch.to_ascii_uppercase().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {spaced}");
    }
    println!();

    println!("Words:");
    for (index, word) in puzzle.words.iter().enumerate() {
        match puzzle.placement(index) {
            Some(placed) => println!(
                "  {word}: {} from {}",
                placed.orientation(),
                placed.anchor()
            ),
            None => println!("  {word}: not placed"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Stats {
    puzzles: usize,
    failures: usize,
    words: usize,
    dropped: usize,
    incomplete_puzzles: usize,
}

impl Stats {
    fn merge(self, other: Self) -> Self {
        Self {
            puzzles: self.puzzles + other.puzzles,
            failures: self.failures + other.failures,
            words: self.words + other.words,
            dropped: self.dropped + other.dropped,
            incomplete_puzzles: self.incomplete_puzzles + other.incomplete_puzzles,
        }
    }
}

fn print_stats(generator: &PuzzleGenerator<'_>, samples: usize) {
    let stats = (0..samples)
        .into_par_iter()
        .map(|_| match generator.generate() {
            Ok(puzzle) => {
                let dropped = puzzle.unplaced_words().count();
                Stats {
                    puzzles: 1,
                    failures: 0,
                    words: puzzle.words.len(),
                    dropped,
                    incomplete_puzzles: usize::from(dropped > 0),
                }
            }
            Err(_) => Stats {
                puzzles: 1,
                failures: 1,
                ..Stats::default()
            },
        })
        .reduce(Stats::default, Stats::merge);

    let config = generator.config();
    println!("Config:");
    println!("  Grid size: {}", config.grid_size);
    println!(
        "  Word count: {}..={}",
        config.word_count.start(),
        config.word_count.end()
    );
    println!("  Retry budget: {}", config.retry_budget);
    println!("  Policy: {:?}", config.placement_policy);
    println!();
    println!("Stats:");
    println!("  puzzles: {}", stats.puzzles);
    println!("  failed: {}", stats.failures);
    println!("  words requested: {}", stats.words);
    println!("  words dropped: {}", stats.dropped);
    println!("  puzzles with dropped words: {}", stats.incomplete_puzzles);
}
