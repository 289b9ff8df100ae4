pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_UNITS: usize = 9;
