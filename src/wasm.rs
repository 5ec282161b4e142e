use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use wasm_bindgen::prelude::*;

use crate::{Board, Solver, SolverParams, solve};

/// Convert a Board to a JsValue (array of row indices, one per column).
fn board_to_js(board: &Board) -> Result<JsValue, JsError> {
    let rows: Vec<u8> = board.rows().to_vec();
    serde_wasm_bindgen::to_value(&rows).map_err(|e| JsError::new(&e.to_string()))
}

/// Checks a requested size before handing it to the search.
///
/// Sizes 2 and 3 have no solution and the search would spin forever, which
/// in a browser means a hung tab; reject them up front.
fn check_size(n: u8) -> Result<(), JsError> {
    if n == 0 {
        return Err(JsError::new("n must be at least 1"));
    }
    if n == 2 || n == 3 {
        return Err(JsError::new("no arrangement exists for n = 2 or n = 3"));
    }
    Ok(())
}

/// Solve the n-queens problem with the given seed.
/// Returns an array where element `c` is the row of the queen in column `c`.
#[wasm_bindgen]
pub fn queens(n: u8, seed: u64) -> Result<JsValue, JsError> {
    check_size(n)?;
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let board = solve(n as usize, &mut rng, &SolverParams::default());

    board_to_js(&board)
}

/// A stateful solver that produces independently solved boards.
///
/// Each call to `next()` scrambles a fresh configuration and runs the
/// min-conflicts search to convergence.
#[wasm_bindgen]
pub struct WasmSolver {
    solver: Solver<ChaCha20Rng>,
}

#[wasm_bindgen]
impl WasmSolver {
    /// Create a new solver for `n x n` boards.
    ///
    /// `n` must be in range 1..=255 and not 2 or 3. The `seed` determines
    /// the random sequence.
    #[wasm_bindgen(constructor)]
    pub fn new(n: u8, seed: u64) -> Result<WasmSolver, JsError> {
        check_size(n)?;
        let rng = ChaCha20Rng::seed_from_u64(seed);
        let solver = Solver::new(n as usize, rng, SolverParams::default());
        Ok(WasmSolver { solver })
    }

    /// Get the next solved board.
    ///
    /// Returns an array where element `c` is the row of the queen in
    /// column `c`.
    pub fn next(&mut self) -> Result<JsValue, JsError> {
        let board = self
            .solver
            .next()
            .expect("Solver is an infinite iterator");
        board_to_js(&board)
    }
}
