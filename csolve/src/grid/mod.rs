pub mod cell;
#[allow(clippy::module_inception)]
pub mod grid;
pub mod text;

pub use cell::{Cell, Direction};
pub use grid::Grid;
pub use text::Glyph;

use std::fmt;

use thiserror::Error;

use crate::dims::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

/// Reasons a grid can't be built, reported before any search starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no cells")]
    EmptyGrid,
    #[error("{what} cell {pos} lies outside of the {rows}x{cols} grid")]
    OutOfBounds {
        what: Endpoint,
        pos: Coord,
        rows: usize,
        cols: usize,
    },
    #[error("maze has no start cell")]
    MissingStart,
    #[error("maze has no end cell")]
    MissingEnd,
    #[error("{what} cell is marked twice, at {first} and at {second}")]
    DuplicateMarker {
        what: Endpoint,
        first: Coord,
        second: Coord,
    },
    #[error("line {line} is {len} characters wide, the top border is only {expected}")]
    RaggedRows {
        line: usize,
        len: usize,
        expected: usize,
    },
    #[error("maze drawing must be an odd number (at least 3) of lines and columns, got {lines}x{width}")]
    BadLayout { lines: usize, width: usize },
    #[error("unexpected character {ch:?} inside cell at line {line}, column {col}")]
    UnexpectedChar { ch: char, line: usize, col: usize },
    #[error("expected {expected} cells, got {got}")]
    SizeMismatch { expected: usize, got: usize },
    #[error("cell stored at {at} claims to be at {claims}")]
    WrongCoord { at: Coord, claims: Coord },
    #[error("{dir:?} wall of {pos} doesn't match the wall of its neighbor")]
    AsymmetricWall { pos: Coord, dir: Direction },
}
