//! Example playing random triactoe matches.
//!
//! This example shows how to:
//! - Drive a `Game` through its `valid_moves` / `make_move` surface
//! - Detect hierarchical wins as they cascade upward
//! - Observe the stall behavior of a filled board (no draw status)
//!
//! # Usage
//!
//! ```sh
//! cargo run --example random_match
//! ```
//!
//! Play several matches with a fixed seed:
//!
//! ```sh
//! cargo run --example random_match -- --matches 100 --seed 42
//! ```
//!
//! Set `RUST_LOG=debug` to see the engine's win cascade as it happens.

use clap::Parser;
use rand::{SeedableRng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg64Mcg;
use triactoe_core::Mark;
use triactoe_engine::{Game, Status};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of matches to play.
    #[arg(long, value_name = "COUNT", default_value_t = 10)]
    matches: u32,

    /// Seed for the move-picking RNG.
    #[arg(long, value_name = "SEED", default_value_t = 0)]
    seed: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let mut rng = Pcg64Mcg::seed_from_u64(args.seed);

    let mut x_wins = 0u32;
    let mut o_wins = 0u32;
    let mut stalls = 0u32;
    let mut total_moves = 0u64;

    for _ in 0..args.matches {
        let (status, moves) = play_match(&mut rng);
        total_moves += moves;
        match status {
            Status::Won(Mark::X) => x_wins += 1,
            Status::Won(Mark::O) => o_wins += 1,
            Status::Playing => stalls += 1,
        }
    }

    println!("Matches: {}", args.matches);
    println!("  X wins: {x_wins}");
    println!("  O wins: {o_wins}");
    println!("  stalled (board exhausted, still 'playing'): {stalls}");
    #[expect(clippy::cast_precision_loss)]
    let average = total_moves as f64 / f64::from(args.matches.max(1));
    println!("  average match length: {average:.1} moves");
}

/// Plays one match to its end, returning the final status and move count.
fn play_match(rng: &mut Pcg64Mcg) -> (Status, u64) {
    let mut game = Game::new();
    let mut moves = 0u64;

    loop {
        let candidates = game.valid_moves();
        let Some(&pos) = candidates.choose(rng) else {
            return (game.status(), moves);
        };
        assert!(game.make_move(pos.row(), pos.col()));
        moves += 1;
        if let Status::Won(_) = game.status() {
            return (game.status(), moves);
        }
    }
}
