#![warn(missing_docs)]
//! A sudoku solver based on recursive backtracking
//!
//! ## Overview
//!
//! The solver walks the 81 cells in row-major order, skips the givens and
//! tries the digits 1 through 9 in every empty cell, backtracking when a
//! cell runs out of candidates. One digit bitset per row, column and block
//! records which digits the unit already contains, so checking a candidate
//! is a couple of bit operations instead of a scan over the board.
//!
//! ## Example
//!
//! ```
//! use sudoku_backtrack::Puzzle;
//!
//! let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
//!
//! // Puzzles can be read from line notation, from whitespace-separated
//! // grid files or directly from bytes.
//! let mut puzzle = Puzzle::from_str_line(line).unwrap();
//!
//! if puzzle.solve() {
//!     println!("{}", puzzle);
//!     println!("{}", puzzle.to_str_line());
//! }
//! ```

pub mod bitset;
mod board;
mod consts;
pub mod errors;
mod helper;
mod solver;

pub use crate::bitset::DigitSet;
pub use crate::board::{Block, Cell, Col, Digit, LineString, Puzzle, Row};
pub use crate::solver::Solver;
