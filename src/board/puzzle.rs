use crate::bitset::DigitSet;
use crate::board::{Block, Cell, Col, Digit, Row};
use crate::consts::N_CELLS;
use crate::errors::{
    FromBytesError, FromBytesSliceError, GridParseError, InvalidEntry, LineParseError,
};
use crate::solver::Solver;

use std::{fmt, str};

/// A 9×9 sudoku configuration: 81 cell values in row-major order, `0`
/// marking an empty cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle(pub(crate) [u8; N_CELLS]);

impl Puzzle {
    /// Creates a puzzle from a byte array, `0` marking an empty cell.
    pub fn from_bytes(bytes: [u8; N_CELLS]) -> Result<Puzzle, FromBytesError> {
        match bytes.iter().all(|&byte| byte <= 9) {
            true => Ok(Puzzle(bytes)),
            false => Err(FromBytesError(())),
        }
    }

    /// Creates a puzzle from a byte slice, which must have length 81.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Puzzle, FromBytesSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; N_CELLS];
        array.copy_from_slice(bytes);
        Puzzle::from_bytes(array).map_err(FromBytesSliceError::FromBytesError)
    }

    /// Reads a puzzle in line notation: 81 cell characters in row-major
    /// order, where `'1'..='9'` are digits and `'0'`, `'.'` or `'_'` mark
    /// an empty cell.
    ///
    /// Anything after the 81st cell is ignored as a comment, as long as it
    /// is separated from the cells by whitespace.
    pub fn from_str_line(s: &str) -> Result<Puzzle, LineParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_cells: u8 = 0;
        for ch in s.chars() {
            if n_cells as usize == N_CELLS {
                return match ch {
                    ' ' | '\t' | '\r' | '\n' => Ok(Puzzle(grid)),
                    '0'..='9' | '.' | '_' => Err(LineParseError::TooManyCells),
                    _ => Err(LineParseError::MissingCommentDelimiter),
                };
            }
            grid[n_cells as usize] = match ch {
                '1'..='9' => ch as u8 - b'0',
                '0' | '.' | '_' => 0,
                _ => return Err(LineParseError::InvalidEntry(InvalidEntry { cell: n_cells, ch })),
            };
            n_cells += 1;
        }
        if (n_cells as usize) < N_CELLS {
            return Err(LineParseError::NotEnoughCells(n_cells));
        }
        Ok(Puzzle(grid))
    }

    /// Reads a puzzle in grid notation: 81 whitespace-separated integers in
    /// `0..=9`, row-major, `0` marking an empty cell. Content after the
    /// 81st value is ignored.
    ///
    /// This is the format of the puzzle files consumed by the binary.
    pub fn from_str_grid(s: &str) -> Result<Puzzle, GridParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_values: u8 = 0;
        for token in s.split_whitespace() {
            if n_values as usize == N_CELLS {
                break;
            }
            grid[n_values as usize] = match token.parse::<u8>() {
                Ok(value) if value <= 9 => value,
                _ => {
                    return Err(GridParseError::InvalidValue {
                        cell: n_values,
                        token: token.to_string(),
                    });
                }
            };
            n_values += 1;
        }
        if (n_values as usize) < N_CELLS {
            return Err(GridParseError::NotEnoughValues(n_values));
        }
        Ok(Puzzle(grid))
    }

    /// Returns the digit in `cell`, `None` if the cell is empty.
    pub fn get(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    /// Returns an iterator over the cell contents, going from left to
    /// right, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().map(|&value| Digit::new_checked(value))
    }

    /// Returns the puzzle as a byte array, `0` marking an empty cell.
    pub fn to_bytes(self) -> [u8; N_CELLS] {
        self.0
    }

    /// Tries to find a solution and fills it in. Returns true if a
    /// solution was found.
    ///
    /// If no solution exists, the puzzle is left unchanged and false is
    /// returned. That is a regular outcome, not an error.
    pub fn solve(&mut self) -> bool {
        let mut solver = Solver::from_puzzle(self);
        let found_solution = solver.solve();
        *self = solver.to_puzzle();
        found_solution
    }

    /// Tries to find a solution. Returns `None` if no solution exists.
    pub fn solve_one(self) -> Option<Puzzle> {
        let mut puzzle = self;
        match puzzle.solve() {
            true => Some(puzzle),
            false => None,
        }
    }

    /// Checks whether the puzzle is solved: every cell is filled and every
    /// row, column and block contains each digit exactly once.
    pub fn is_solved(&self) -> bool {
        Row::all().all(|row| self.unit_is_solved(row.cells()))
            && Col::all().all(|col| self.unit_is_solved(col.cells()))
            && Block::all().all(|block| self.unit_is_solved(block.cells()))
    }

    // nine cells, all filled and the digit set full => all distinct
    fn unit_is_solved(&self, cells: impl Iterator<Item = Cell>) -> bool {
        let mut seen = DigitSet::NONE;
        for cell in cells {
            match self.get(cell) {
                Some(digit) => seen.insert(digit),
                None => return false,
            }
        }
        seen.is_full()
    }

    /// Returns the puzzle in line notation, `'.'` marking empty cells.
    pub fn to_str_line(&self) -> LineString {
        let mut line = [0; N_CELLS];
        for (ch, &value) in line.iter_mut().zip(self.0.iter()) {
            *ch = match value {
                0 => b'.',
                digit => digit + b'0',
            };
        }
        LineString(line)
    }
}

/// The line notation of a [`Puzzle`]. Dereferences to `str`.
#[derive(Copy, Clone)]
pub struct LineString([u8; N_CELLS]);

impl std::ops::Deref for LineString {
    type Target = str;

    fn deref(&self) -> &str {
        // the line consists of ascii digits and dots
        str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self)
    }
}

impl fmt::Debug for LineString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl fmt::Display for Puzzle {
    /// Renders the puzzle as a bordered grid, empty cells left blank:
    ///
    /// ```text
    /// -------------------------------------
    /// |   |   | 3 |   | 2 |   | 6 |   |   |
    /// ...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in Row::all() {
            writeln!(f, "{:-<37}", "")?;
            for cell in row.cells() {
                match self.get(cell) {
                    Some(digit) => write!(f, "| {} ", digit)?,
                    None => write!(f, "|   ")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "{:-<37}", "")
    }
}

impl fmt::Debug for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.to_str_line(), f)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Puzzle;
    use serde::de::{self, Deserialize, Deserializer, Visitor};
    use serde::ser::{Serialize, Serializer};
    use std::fmt;

    impl Serialize for Puzzle {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.to_str_line())
            } else {
                serializer.serialize_bytes(&self.0)
            }
        }
    }

    struct PuzzleVisitor;

    impl<'de> Visitor<'de> for PuzzleVisitor {
        type Value = Puzzle;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a sudoku in line notation or as 81 raw bytes")
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<Puzzle, E> {
            Puzzle::from_str_line(s).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, bytes: &[u8]) -> Result<Puzzle, E> {
            Puzzle::from_bytes_slice(bytes).map_err(de::Error::custom)
        }
    }

    impl<'de> Deserialize<'de> for Puzzle {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Puzzle, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(PuzzleVisitor)
            } else {
                deserializer.deserialize_bytes(PuzzleVisitor)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_round_trip() {
        let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
        let puzzle = Puzzle::from_str_line(line).unwrap();
        assert_eq!(&*puzzle.to_str_line(), line);
    }

    #[test]
    fn line_accepts_all_empty_markers() {
        let dots = Puzzle::from_str_line(&".".repeat(81)).unwrap();
        let zeros = Puzzle::from_str_line(&"0".repeat(81)).unwrap();
        let underscores = Puzzle::from_str_line(&"_".repeat(81)).unwrap();
        assert_eq!(dots, zeros);
        assert_eq!(dots, underscores);
    }

    #[test]
    fn line_comment_needs_delimiter() {
        let line = ".".repeat(81);
        assert!(Puzzle::from_str_line(&format!("{} a comment", line)).is_ok());
        assert_eq!(
            Puzzle::from_str_line(&format!("{}comment", line)),
            Err(LineParseError::MissingCommentDelimiter),
        );
        assert_eq!(
            Puzzle::from_str_line(&format!("{}4", line)),
            Err(LineParseError::TooManyCells),
        );
    }

    #[test]
    fn line_reports_invalid_entry() {
        let mut line = ".".repeat(81);
        line.replace_range(13..14, "x");
        assert_eq!(
            Puzzle::from_str_line(&line),
            Err(LineParseError::InvalidEntry(InvalidEntry { cell: 13, ch: 'x' })),
        );
    }

    #[test]
    fn grid_matches_line() {
        let grid = "
            0 0 3 0 2 0 6 0 0
            9 0 0 3 0 5 0 0 1
            0 0 1 8 0 6 4 0 0
            0 0 8 1 0 2 9 0 0
            7 0 0 0 0 0 0 0 8
            0 0 6 7 0 8 2 0 0
            0 0 2 6 0 9 5 0 0
            8 0 0 2 0 3 0 0 9
            0 0 5 0 1 0 3 0 0
        ";
        let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
        assert_eq!(
            Puzzle::from_str_grid(grid).unwrap(),
            Puzzle::from_str_line(line).unwrap(),
        );
    }

    #[test]
    fn grid_rejects_bad_tokens() {
        assert_eq!(
            Puzzle::from_str_grid("0 0 12"),
            Err(GridParseError::InvalidValue {
                cell: 2,
                token: "12".to_string(),
            }),
        );
        assert_eq!(
            Puzzle::from_str_grid("1 2 3"),
            Err(GridParseError::NotEnoughValues(3)),
        );
    }

    #[test]
    fn bytes_constructors_check_their_input() {
        assert!(Puzzle::from_bytes([10; N_CELLS]).is_err());
        assert!(matches!(
            Puzzle::from_bytes_slice(&[0; 80]),
            Err(FromBytesSliceError::WrongLength(80)),
        ));
    }
}
