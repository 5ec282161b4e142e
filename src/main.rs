//! Solve the n-queens problem from the command line.
//!
//! Usage: queens-solver [n] [seed]
//!
//! Example:
//!   queens-solver 8 42
//!
//! Prints the solved board to stdout, one line per row, with `Q` for the
//! occupied cell in each column and `|` everywhere else. Solve time, work
//! counters, and the seed go to stderr.

use queens_solver::{SolverParams, solve_with_stats};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();

    let n: usize = match args.get(1) {
        None => 8,
        Some(arg) => match arg.parse() {
            Ok(n) if (1..=255).contains(&n) => n,
            _ => {
                eprintln!("Usage: {} [n] [seed]  (1 <= n <= 255)", args[0]);
                std::process::exit(1);
            }
        },
    };
    if n == 2 || n == 3 {
        eprintln!("no arrangement exists for n = {}", n);
        std::process::exit(1);
    }

    // Without an explicit seed, draw one and report it so the run can be
    // reproduced.
    let seed: u64 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random);

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let start = Instant::now();
    let (board, stats) = solve_with_stats(n, &mut rng, &SolverParams::default());
    let elapsed = start.elapsed();

    eprintln!(
        "solved n={} in {:.3}s ({} moves, {} restarts, seed {})",
        n,
        elapsed.as_secs_f64(),
        stats.moves,
        stats.restarts,
        seed
    );
    print!("{}", board);
}
