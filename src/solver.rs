use crate::Board;
use crate::min_conflicts::Search;
use rand::Rng;

/// Parameters for the min-conflicts search.
#[derive(Debug, Clone)]
pub struct SolverParams {
    /// Moves allowed in one basin before the board is re-scrambled.
    ///
    /// Min-conflicts stalls on plateaus where no single move reduces the
    /// total conflict count; discarding the configuration after a bounded
    /// number of moves turns an indefinite stall into repeated bounded
    /// attempts.
    ///
    /// If `None`, uses `2 * n`.
    pub restart_after: Option<usize>,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            restart_after: None, // auto: 2n
        }
    }
}

/// Work counters from one completed solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    /// Queen relocations performed, across all restarts.
    pub moves: u64,
    /// Full re-scrambles triggered by the restart bound.
    pub restarts: u64,
}

/// Solves the `n`-queens problem and returns a conflict-free board.
///
/// Runs min-conflicts search from a random scramble, re-scrambling whenever
/// the restart bound is hit. The output is deterministic given the same
/// seed, size, and parameters.
///
/// No arrangement exists for `n` of 2 or 3, and this function loops forever
/// on those sizes rather than detecting infeasibility. Callers that cannot
/// rule them out must impose an external timeout.
///
/// # Panics
/// Panics if:
/// - `n` is 0 or greater than 255
/// - `restart_after` is `Some(0)`
pub fn solve<R: Rng + ?Sized>(n: usize, rng: &mut R, params: &SolverParams) -> Board {
    let (board, _) = solve_with_stats(n, rng, params);
    board
}

/// Like [`solve`], additionally reporting how much work the search did.
///
/// The stats expose the internal restart mechanism as instrumentation; a
/// restart is not an error, only a sign the search left a basin behind.
///
/// # Panics
/// Panics under the same conditions as [`solve`].
pub fn solve_with_stats<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
    params: &SolverParams,
) -> (Board, SolveStats) {
    let restart_after = checked_restart_after(n, params);

    let mut search = Search::new(n, restart_after, rng);
    while !search.step(rng) {}

    let stats = SolveStats {
        moves: search.total_moves(),
        restarts: search.restarts(),
    };
    (search.into_board(), stats)
}

/// An iterator that produces independently solved boards.
///
/// Created by [`Solver::new`]. Each call to `next()` scrambles a fresh
/// configuration and runs the search to convergence, so successive boards
/// are independent draws from the owned generator. The iterator never
/// ends; see [`solve`] for the sizes on which it never yields at all.
///
/// # Example
///
/// ```
/// use queens_solver::{Solver, SolverParams};
/// use rand_chacha::ChaCha20Rng;
/// use rand::SeedableRng;
///
/// let rng = ChaCha20Rng::seed_from_u64(0);
/// let solver = Solver::new(8, rng, SolverParams::default());
///
/// for board in solver.take(3) {
///     print!("{}", board);
/// }
/// ```
pub struct Solver<R> {
    n: usize,
    rng: R,
    params: SolverParams,
}

impl<R: Rng> Solver<R> {
    /// Creates a solver for `n x n` boards.
    ///
    /// # Panics
    /// Panics if:
    /// - `n` is 0 or greater than 255
    /// - `restart_after` is `Some(0)`
    pub fn new(n: usize, rng: R, params: SolverParams) -> Self {
        checked_restart_after(n, &params);
        Self { n, rng, params }
    }
}

impl<R: Rng> Iterator for Solver<R> {
    type Item = Board;

    fn next(&mut self) -> Option<Self::Item> {
        Some(solve(self.n, &mut self.rng, &self.params))
    }
}

/// Validates the board size and resolves the restart bound.
fn checked_restart_after(n: usize, params: &SolverParams) -> usize {
    assert!((1..=255).contains(&n), "n must be in range 1..=255");
    let restart_after = params.restart_after.unwrap_or(2 * n);
    assert!(restart_after > 0, "restart_after must be at least 1");
    restart_after
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn reproducibility_same_seed_same_output() {
        let params = SolverParams::default();

        let mut rng1 = ChaCha20Rng::seed_from_u64(0);
        let (board1, stats1) = solve_with_stats(8, &mut rng1, &params);

        let mut rng2 = ChaCha20Rng::seed_from_u64(0);
        let (board2, stats2) = solve_with_stats(8, &mut rng2, &params);

        assert_eq!(board1, board2, "same seed should produce identical boards");
        assert_eq!(stats1, stats2, "same seed should produce identical work counts");
    }

    #[test]
    fn different_seed_different_output_smoke() {
        let params = SolverParams::default();

        // Try a few different seed pairs
        for offset in 0u64..5 {
            let mut rng1 = ChaCha20Rng::seed_from_u64(offset);
            let board1 = solve(8, &mut rng1, &params);

            let mut rng2 = ChaCha20Rng::seed_from_u64(offset + 100);
            let board2 = solve(8, &mut rng2, &params);

            if board1 != board2 {
                return; // Success: found different outputs
            }
        }
        panic!("all tested seed pairs produced identical boards (extremely unlikely)");
    }

    #[test]
    fn solved_boards_have_no_attacks() {
        let params = SolverParams::default();
        let mut rng = ChaCha20Rng::seed_from_u64(42);

        for n in [4, 5, 6, 7, 8, 12, 16, 20] {
            let board = solve(n, &mut rng, &params);
            assert_eq!(board.n(), n);
            assert_eq!(board.rows().len(), n);
            assert!(
                board.rows().iter().all(|&r| (r as usize) < n),
                "row out of range for n={}",
                n
            );
            assert!(board.is_solution(), "board has attacks for n={}", n);
        }
    }

    #[test]
    fn one_by_one_board_is_immediate() {
        let params = SolverParams::default();
        let mut rng = ChaCha20Rng::seed_from_u64(0);

        let (board, stats) = solve_with_stats(1, &mut rng, &params);
        assert_eq!(board.rows(), &[0]);
        assert_eq!(stats.moves, 0);
        assert_eq!(stats.restarts, 0);
    }

    #[test]
    fn four_queens_reaches_a_known_solution() {
        let params = SolverParams::default();

        // n=4 has exactly two solutions.
        for seed in 0u64..5 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let board = solve(4, &mut rng, &params);
            assert!(
                board.rows() == [1, 3, 0, 2] || board.rows() == [2, 0, 3, 1],
                "seed {} produced a non-solution {:?}",
                seed,
                board.rows()
            );
        }
    }

    #[test]
    fn iterator_reproducibility() {
        let params = SolverParams::default();

        let rng1 = ChaCha20Rng::seed_from_u64(0);
        let solver1 = Solver::new(6, rng1, params.clone());

        let rng2 = ChaCha20Rng::seed_from_u64(0);
        let solver2 = Solver::new(6, rng2, params);

        let boards1: Vec<_> = solver1.take(5).collect();
        let boards2: Vec<_> = solver2.take(5).collect();

        assert_eq!(boards1, boards2, "same seed should produce identical sequences");
    }

    #[test]
    fn iterator_yields_independent_solutions() {
        let rng = ChaCha20Rng::seed_from_u64(1);
        let solver = Solver::new(8, rng, SolverParams::default());

        let boards: Vec<_> = solver.take(10).collect();
        assert!(boards.iter().all(|b| b.is_solution()));

        // With 92 distinct solutions, ten draws repeating one board would
        // point at a generator that is not advancing.
        assert!(
            boards.iter().any(|b| b != &boards[0]),
            "ten draws yielded a single board"
        );
    }

    #[test]
    fn custom_restart_bound_still_solves() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let params = SolverParams {
            restart_after: Some(3),
        };

        let board = solve(8, &mut rng, &params);
        assert!(board.is_solution());
    }

    #[test]
    #[should_panic(expected = "n must be in range 1..=255")]
    fn rejects_zero_size() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let _ = solve(0, &mut rng, &SolverParams::default());
    }

    #[test]
    #[should_panic(expected = "restart_after must be at least 1")]
    fn rejects_zero_restart_bound() {
        let rng = ChaCha20Rng::seed_from_u64(0);
        let _ = Solver::new(
            8,
            rng,
            SolverParams {
                restart_after: Some(0),
            },
        );
    }
}
