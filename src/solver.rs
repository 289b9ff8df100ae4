//! Board state and the recursive backtracking search.

use crate::bitset::DigitSet;
use crate::board::{Cell, Digit, Puzzle};
use crate::consts::{N_CELLS, N_UNITS};
use crate::helper::{CellArray, UnitArray};

/// The working state of a search: the cell contents, the mask of givens
/// and one digit set per row, column and block recording which digits the
/// unit already contains.
///
/// The three digit sets are kept in lockstep with the grid: every
/// placement enters the digit into the cell's row, column and block set,
/// every removal clears the same three entries. A candidate digit is legal
/// exactly if all three lookups come back empty, so the search never
/// rescans the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Solver {
    grid: CellArray<Option<Digit>>,
    fixed: CellArray<bool>,
    row_digits: UnitArray<DigitSet>,
    col_digits: UnitArray<DigitSet>,
    block_digits: UnitArray<DigitSet>,
}

impl Solver {
    /// Loads a puzzle. Every given is entered through the same placement
    /// path the search uses, so the digit sets are consistent from the
    /// start, and is marked as fixed.
    ///
    /// The configuration is not checked for contradictions. A puzzle whose
    /// givens conflict simply has no solution.
    pub fn from_puzzle(puzzle: &Puzzle) -> Solver {
        let mut solver = Solver {
            grid: CellArray([None; N_CELLS]),
            fixed: CellArray([false; N_CELLS]),
            row_digits: UnitArray([DigitSet::NONE; N_UNITS]),
            col_digits: UnitArray([DigitSet::NONE; N_UNITS]),
            block_digits: UnitArray([DigitSet::NONE; N_UNITS]),
        };
        for (cell, digit) in Cell::all().zip(puzzle.iter()) {
            if let Some(digit) = digit {
                solver.place(digit, cell);
                solver.fixed[cell] = true;
            }
        }
        solver
    }

    // Enters `digit` into the cell and into the three unit sets. Must be
    // undone with `remove` before the cell can be filled again.
    fn place(&mut self, digit: Digit, cell: Cell) {
        self.grid[cell] = Some(digit);
        self.row_digits[cell.row()].insert(digit);
        self.col_digits[cell.col()].insert(digit);
        self.block_digits[cell.block()].insert(digit);
    }

    // Inverse of `place`. Must be called with the digit that was placed.
    fn remove(&mut self, digit: Digit, cell: Cell) {
        self.grid[cell] = None;
        self.row_digits[cell.row()].remove(digit);
        self.col_digits[cell.col()].remove(digit);
        self.block_digits[cell.block()].remove(digit);
    }

    // digits not yet present in the cell's row, column or block
    fn open_digits(&self, cell: Cell) -> DigitSet {
        !(self.row_digits[cell.row()]
            | self.col_digits[cell.col()]
            | self.block_digits[cell.block()])
    }

    /// Checks whether `digit` can be placed in `cell` without duplicating
    /// it in the cell's row, column or block.
    ///
    /// This does not consult the mask of givens; fixed cells are the
    /// caller's responsibility.
    pub fn is_safe(&self, digit: Digit, cell: Cell) -> bool {
        self.open_digits(cell).contains(digit)
    }

    /// Whether the value in `cell` came from the loaded puzzle. Fixed
    /// cells are never touched by the search.
    pub fn is_fixed(&self, cell: Cell) -> bool {
        self.fixed[cell]
    }

    /// Runs the search. Returns true if a solution was found; the solved
    /// grid can then be read back with [`Solver::to_puzzle`].
    ///
    /// Returns false if the search space is exhausted without a solution.
    /// Every trial placement is undone on the way out, so the state
    /// afterwards equals the loaded configuration. Exhaustion is a regular
    /// outcome, not an error.
    ///
    /// The search assumes the non-fixed cells are empty, as produced by
    /// [`Solver::from_puzzle`].
    pub fn solve(&mut self) -> bool {
        self.solve_cell(0)
    }

    // Fills cells n..81 in row-major order, given that cells 0..n are
    // consistent.
    fn solve_cell(&mut self, n: u8) -> bool {
        let cell = match Cell::new_checked(n) {
            Some(cell) => cell,
            // all 81 cells are filled
            None => return true,
        };
        if self.fixed[cell] {
            return self.solve_cell(n + 1);
        }
        for digit in self.open_digits(cell) {
            self.place(digit, cell);
            if self.solve_cell(n + 1) {
                return true;
            }
            // only reached when the subtree under this placement failed
            self.remove(digit, cell);
        }
        false
    }

    /// Returns the current grid as a [`Puzzle`], for display or further
    /// processing.
    pub fn to_puzzle(&self) -> Puzzle {
        let mut bytes = [0; N_CELLS];
        for cell in Cell::all() {
            if let Some(digit) = self.grid[cell] {
                bytes[cell.as_index()] = digit.get();
            }
        }
        Puzzle(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(line: &str) -> Puzzle {
        Puzzle::from_str_line(line).unwrap_or_else(|err| panic!("{:?}", err))
    }

    const EXAMPLE: &str =
        "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";

    #[test]
    fn place_remove_round_trip() {
        let mut solver = Solver::from_puzzle(&puzzle(EXAMPLE));
        let before = solver;

        let cell = Cell::new(0);
        let digit = Digit::new(4);
        assert!(solver.is_safe(digit, cell));

        solver.place(digit, cell);
        assert_ne!(solver, before);
        assert!(!solver.is_safe(digit, cell));

        solver.remove(digit, cell);
        assert_eq!(solver, before);
    }

    #[test]
    fn load_round_trip() {
        let puzzle = puzzle(EXAMPLE);
        assert_eq!(Solver::from_puzzle(&puzzle).to_puzzle(), puzzle);
    }

    #[test]
    fn is_safe_matches_unit_scan() {
        let puzzle = puzzle(EXAMPLE);
        let solver = Solver::from_puzzle(&puzzle);
        for cell in Cell::all() {
            for digit in Digit::all() {
                let conflict = cell
                    .row()
                    .cells()
                    .chain(cell.col().cells())
                    .chain(cell.block().cells())
                    .any(|other| puzzle.get(other) == Some(digit));
                assert_eq!(solver.is_safe(digit, cell), !conflict);
            }
        }
    }

    #[test]
    fn givens_are_fixed() {
        let puzzle = puzzle(EXAMPLE);
        let solver = Solver::from_puzzle(&puzzle);
        for cell in Cell::all() {
            assert_eq!(solver.is_fixed(cell), puzzle.get(cell).is_some());
        }
    }

    #[test]
    fn exhausted_search_restores_the_loaded_state() {
        // the empty cell in the top left can hold nothing: its row already
        // contains every digit but 5, and its column two fixed 5s
        let line = format!(".12346789{}{}{}", "5........", "5........", &".".repeat(54));
        let mut solver = Solver::from_puzzle(&puzzle(&line));
        let before = solver;

        assert!(!solver.solve());
        assert_eq!(solver, before);
    }

    #[test]
    fn solved_search_keeps_givens() {
        let puzzle = puzzle(EXAMPLE);
        let mut solver = Solver::from_puzzle(&puzzle);
        assert!(solver.solve());

        let solution = solver.to_puzzle();
        assert!(solution.is_solved());
        for cell in Cell::all() {
            if let Some(digit) = puzzle.get(cell) {
                assert_eq!(solution.get(cell), Some(digit));
            }
        }
    }
}
