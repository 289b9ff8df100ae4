// Internal containers that can only be indexed by the right position structs

use crate::board::{Block, Cell, Col, Row};
use crate::consts::{N_CELLS, N_UNITS};
use std::ops::{Deref, DerefMut, Index, IndexMut};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Container with one slot for each cell.
pub(crate) struct CellArray<T>(pub [T; N_CELLS]);

impl<T> Deref for CellArray<T> {
    type Target = [T; N_CELLS];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for CellArray<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> Index<Cell> for CellArray<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, idx: Cell) -> &Self::Output {
        &self.0[idx.as_index()]
    }
}

impl<T> IndexMut<Cell> for CellArray<T> {
    #[inline(always)]
    fn index_mut(&mut self, idx: Cell) -> &mut Self::Output {
        &mut self.0[idx.as_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Container with one slot for each unit of one kind (rows, columns or
/// blocks).
pub(crate) struct UnitArray<T>(pub [T; N_UNITS]);

macro_rules! impl_unit_index {
    ( $( $unit:ty ),* $(,)? ) => {
        $(
            impl<T> Index<$unit> for UnitArray<T> {
                type Output = T;

                #[inline(always)]
                fn index(&self, idx: $unit) -> &Self::Output {
                    &self.0[idx.as_index()]
                }
            }

            impl<T> IndexMut<$unit> for UnitArray<T> {
                #[inline(always)]
                fn index_mut(&mut self, idx: $unit) -> &mut Self::Output {
                    &mut self.0[idx.as_index()]
                }
            }
        )*
    };
}

impl_unit_index!(Row, Col, Block);
