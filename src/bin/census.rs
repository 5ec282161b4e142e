//! Check how many of the known n-queens solutions the solver reaches.
//!
//! Known counts:
//! - n=4: 2
//! - n=5: 10
//! - n=6: 4
//! - n=7: 40
//! - n=8: 92
//!
//! Usage: cargo run --release --bin census -- [n] [max_solves]

use queens_solver::{Solver, SolverParams};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::HashSet;
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();

    let n: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(8);
    let max_solves: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10_000);

    if n == 2 || n == 3 {
        eprintln!("no arrangement exists for n = {}", n);
        std::process::exit(1);
    }

    let known_counts: &[(usize, usize)] = &[(4, 2), (5, 10), (6, 4), (7, 40), (8, 92)];
    let expected = known_counts
        .iter()
        .find(|(size, _)| *size == n)
        .map(|(_, count)| *count);

    println!("=== N-Queens Solution Census ===");
    println!("n = {}", n);
    if let Some(total) = expected {
        println!("Known total: {}", total);
    }
    println!("max_solves = {}", max_solves);
    println!();

    let rng = ChaCha20Rng::seed_from_u64(0);
    let solver = Solver::new(n, rng, SolverParams::default());

    let mut unique_boards: HashSet<Vec<u8>> = HashSet::new();
    let start = Instant::now();
    let mut last_new_at = 0;

    for (idx, board) in solver.take(max_solves).enumerate() {
        let solve_num = idx + 1;
        let rows: Vec<u8> = board.rows().to_vec();

        let is_new = unique_boards.insert(rows);
        if is_new {
            last_new_at = solve_num;
        }

        // Progress report
        if solve_num % 1000 == 0 || (expected.is_some() && unique_boards.len() == expected.unwrap())
        {
            let elapsed = start.elapsed().as_secs_f64();
            print!("[{:6}] unique: {:6}", solve_num, unique_boards.len());
            if let Some(total) = expected {
                print!(
                    " / {} ({:.1}%)",
                    total,
                    100.0 * unique_boards.len() as f64 / total as f64
                );
            }
            println!(" | {:.1}s", elapsed);

            // Stop if we found all
            if let Some(total) = expected {
                if unique_boards.len() == total {
                    println!();
                    println!("All {} solutions found after {} solves!", total, solve_num);
                    break;
                }
            }
        }
    }

    let elapsed = start.elapsed().as_secs_f64();
    println!();
    println!("=== Results ===");
    println!("Unique solutions found: {}", unique_boards.len());
    if let Some(total) = expected {
        println!(
            "Coverage: {:.2}%",
            100.0 * unique_boards.len() as f64 / total as f64
        );
    }
    println!("Last new solution found at solve: {}", last_new_at);
    println!("Elapsed time: {:.2}s", elapsed);
}
