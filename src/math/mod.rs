//! Mathematical utilities: sampling grids and the normal density.

pub mod gauss;
pub mod grid;

pub use gauss::*;
pub use grid::*;
