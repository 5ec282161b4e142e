#![doc = include_str!("../README.md")]

mod board;
mod min_conflicts;
mod solver;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use board::Board;
pub use solver::{SolveStats, Solver, SolverParams, solve, solve_with_stats};
