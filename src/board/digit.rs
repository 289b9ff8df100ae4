use std::fmt;
use std::num::NonZeroU8;

// digits are offset by one from their storage index
/// A digit that can be entered in a cell, in the range `1..=9`.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`.
    ///
    /// # Panics
    /// Panics, if the digit is not in the range of `1..=9`.
    pub fn new(digit: u8) -> Self {
        Self::new_checked(digit).unwrap()
    }

    /// Constructs a new `Digit`. Returns `None`, if the digit is not in the
    /// range of `1..=9`.
    pub fn new_checked(digit: u8) -> Option<Self> {
        if digit > 9 {
            return None;
        }
        NonZeroU8::new(digit).map(Digit)
    }

    /// Constructs a new `Digit` from an index, i.e. `digit - 1`.
    ///
    /// # Panics
    /// Panics, if the index is not in the range of `0..=8`.
    pub(crate) fn from_index(idx: u8) -> Self {
        Self::new_checked(idx + 1).unwrap()
    }

    /// Returns an iterator over all digits in increasing order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..10).map(Digit::new)
    }

    /// Returns the digit contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the digit as `usize`, offset by `-1` so numbering starts
    /// from `0`.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
