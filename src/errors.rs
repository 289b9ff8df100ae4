//! Errors that may be encountered when reading a puzzle from external input
#[cfg(doc)]
use crate::Puzzle;

/// Error for [`Puzzle::from_bytes`]
#[derive(Debug, thiserror::Error)]
#[error("byte array contains cell values above 9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Puzzle::from_bytes_slice`]
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains invalid cell values
    #[error(transparent)]
    FromBytesError(FromBytesError),
}

/// An invalid cell encountered during parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Cell number from 0..=80, counted in row-major order
    pub cell: u8,
    /// The offending character
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        self.cell / 9
    }

    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        self.cell % 9
    }
}

/// Error for [`Puzzle::from_str_line`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LineParseError {
    /// Accepted entries are the digits `1..=9` and `'0'`, `'.'` or `'_'`
    /// for empty cells
    #[error("cell {} contains invalid character '{}'", .0.cell, .0.ch)]
    InvalidEntry(InvalidEntry),
    /// Fewer than 81 cells supplied. Contains the number of cells found.
    #[error("line contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// 82 or more valid cell characters supplied
    #[error("line contains more than 81 cells")]
    TooManyCells,
    /// Anything after the 81st cell must be delimited by a space or tab
    #[error("missing comment delimiter")]
    MissingCommentDelimiter,
}

/// Error for [`Puzzle::from_str_grid`]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    /// A value that is not an integer in `0..=9`
    #[error("cell {cell} contains invalid value '{token}'")]
    InvalidValue {
        /// Cell number from 0..=80, counted in row-major order
        cell: u8,
        /// The offending whitespace-separated token
        token: String,
    },
    /// Input ended before 81 values were read. Contains the number of
    /// values found.
    #[error("grid contains {0} values instead of required 81")]
    NotEnoughValues(u8),
}
