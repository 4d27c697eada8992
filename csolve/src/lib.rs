pub mod array;
pub mod dims;
pub mod generator;
pub mod grid;
pub mod solver;

pub use grid::{Cell, Direction, Grid, GridError};
pub use solver::{solve, SolveError, Solver, Strategy};
