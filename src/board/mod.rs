//! Types for cells, digits and other things on a sudoku board
mod digit;
mod positions;
mod puzzle;

pub use self::{
    digit::Digit,
    positions::{Block, Cell, Col, Row},
    puzzle::{LineString, Puzzle},
};
