//! Min-conflicts search over queen placements.
//!
//! The search keeps one queen per column and repeatedly moves a maximally
//! conflicted queen to the row in its column with the fewest conflicts,
//! breaking ties uniformly at random. A bounded move counter triggers a
//! full re-scramble, which lets the search escape plateaus where no single
//! move reduces the total conflict count.
//!
//! Reference: Minton, S., Johnston, M. D., Philips, A. B., & Laird, P.
//! (1992). "Minimizing conflicts: a heuristic repair method for constraint
//! satisfaction and scheduling problems." Artificial Intelligence, 58(1-3),
//! 161-205.

use crate::Board;
use rand::Rng;
use std::cmp::Ordering;

/// Internal state for the min-conflicts search.
///
/// Owns the working configuration: `rows[c]` is the row of the queen in
/// column `c`. Row values may collide mid-search; the search only converts
/// to a [`Board`] once every column scores zero conflicts.
pub(crate) struct Search {
    n: usize,
    /// Row of the queen in each column.
    rows: Vec<u8>,
    /// Moves since the last scramble.
    moves: usize,
    /// Move budget of one basin; reaching it re-scrambles the board.
    restart_after: usize,
    total_moves: u64,
    restarts: u64,
}

impl Search {
    /// Creates a search over an `n x n` board, scrambled with `rng`.
    pub fn new<R: Rng + ?Sized>(n: usize, restart_after: usize, rng: &mut R) -> Self {
        let mut search = Self {
            n,
            rows: vec![0; n],
            moves: 0,
            restart_after,
            total_moves: 0,
            restarts: 0,
        };
        search.scramble(rng);
        search
    }

    /// Resets the configuration to the identity permutation, then swaps
    /// each index with a uniformly drawn one in a single forward pass.
    ///
    /// Reaches every permutation of `0..n`, though the forward pass does
    /// not sample them uniformly. No conflict evaluation happens here.
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for (i, row) in self.rows.iter_mut().enumerate() {
            *row = i as u8;
        }
        for i in 0..self.n {
            let j = rng.random_range(0..self.n);
            self.rows.swap(i, j);
        }
    }

    /// Number of queens attacking cell (`row`, `col`), excluding the queen
    /// that occupies column `col` itself.
    ///
    /// `row` does not have to match the current placement in `col`, so the
    /// same function scores hypothetical relocations.
    pub fn conflicts(&self, row: usize, col: usize) -> usize {
        let mut count = 0;
        for (c, &r) in self.rows.iter().enumerate() {
            if c == col {
                continue;
            }
            let r = r as usize;
            if r == row || r.abs_diff(row) == c.abs_diff(col) {
                count += 1;
            }
        }
        count
    }

    /// Runs one search iteration.
    ///
    /// Scores every column and either reports convergence or relocates one
    /// maximally conflicted queen to a minimally conflicted row in its
    /// column (possibly the row it already occupies). Returns `true` when
    /// the configuration is conflict-free; no move is made in that case.
    /// Each move advances the move counter, and hitting the restart bound
    /// re-scrambles the whole board.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let mut worst = Candidates::new(Ordering::Greater, 0);
        for c in 0..self.n {
            worst.observe(c, self.conflicts(self.rows[c] as usize, c));
        }
        if worst.best() == 0 {
            // every queen scored zero: solved
            return true;
        }
        let col = worst.pick(rng);

        // The row scan includes the queen's current row, so the candidate
        // set is never empty.
        let mut best = Candidates::new(Ordering::Less, usize::MAX);
        for r in 0..self.n {
            best.observe(r, self.conflicts(r, col));
        }
        self.rows[col] = best.pick(rng) as u8;

        self.moves += 1;
        self.total_moves += 1;
        if self.moves == self.restart_after {
            self.scramble(rng);
            self.moves = 0;
            self.restarts += 1;
        }
        false
    }

    /// Returns true if no queen attacks another.
    pub fn is_solved(&self) -> bool {
        (0..self.n).all(|c| self.conflicts(self.rows[c] as usize, c) == 0)
    }

    /// Converts the configuration into a [`Board`].
    ///
    /// Only meaningful once [`Search::step`] has reported convergence.
    pub fn into_board(self) -> Board {
        debug_assert!(self.is_solved(), "cannot convert an unsolved configuration");
        Board::from_rows(self.rows)
    }

    /// Moves performed across all restarts.
    pub fn total_moves(&self) -> u64 {
        self.total_moves
    }

    /// Re-scrambles triggered by the restart bound.
    pub fn restarts(&self) -> u64 {
        self.restarts
    }
}

/// Extremal-candidate accumulator shared by both selection passes.
///
/// Tracks the best score seen so far in the direction given at
/// construction (`Ordering::Greater` for the worst-column scan,
/// `Ordering::Less` for the best-row scan) and the indices tied at it.
/// A strictly better score resets the tied set; an equal score appends.
struct Candidates {
    direction: Ordering,
    best: usize,
    tied: Vec<usize>,
}

impl Candidates {
    fn new(direction: Ordering, initial: usize) -> Self {
        Self {
            direction,
            best: initial,
            tied: Vec::new(),
        }
    }

    fn observe(&mut self, index: usize, score: usize) {
        match score.cmp(&self.best) {
            Ordering::Equal => self.tied.push(index),
            ordering if ordering == self.direction => {
                self.best = score;
                self.tied.clear();
                self.tied.push(index);
            }
            _ => {}
        }
    }

    fn best(&self) -> usize {
        self.best
    }

    /// Picks one tied candidate uniformly at random.
    ///
    /// # Panics
    /// Panics if no observed score reached the tracked extremum.
    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.tied[rng.random_range(0..self.tied.len())]
    }
}
