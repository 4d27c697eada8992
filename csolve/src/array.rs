use std::ops;

use serde::{Deserialize, Serialize};

use crate::dims::Coord;

/// Flat, row-major 2D storage indexed by [`Coord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Array2D<T> {
    buf: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2D<T> {
    /// Wraps an existing buffer, returns `None` if its length doesn't match `rows * cols`.
    pub fn from_buf(buf: Vec<T>, rows: usize, cols: usize) -> Option<Self> {
        (rows.checked_mul(cols) == Some(buf.len())).then_some(Self { buf, rows, cols })
    }

    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(Coord) -> T) -> Self {
        let mut buf = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                buf.push(f(Coord(row as i32, col as i32)));
            }
        }

        Self { buf, rows, cols }
    }

    pub fn size(&self) -> Coord {
        Coord(self.rows as i32, self.cols as i32)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Coord) -> Option<usize> {
        if !pos.all_non_negative() {
            return None;
        }

        let (row, col) = (pos.0 as usize, pos.1 as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }

        row.checked_mul(self.cols)?.checked_add(col)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Coord> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Coord((idx / self.cols) as i32, (idx % self.cols) as i32))
    }

    pub fn contains(&self, pos: Coord) -> bool {
        self.dim_to_idx(pos).is_some()
    }

    pub fn get(&self, pos: Coord) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Coord) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }

        let start = row * self.cols;
        Some(&self.buf[start..start + self.cols])
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, rows: usize, cols: usize) -> Self {
        Self {
            buf: vec![item; rows * cols],
            rows,
            cols,
        }
    }

    pub fn fill(&mut self, item: T) {
        self.buf.fill(item);
    }
}

impl<T> ops::Index<Coord> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        self.get(index).expect("Index out of bounds")
    }
}

impl<T> ops::IndexMut<Coord> for Array2D<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        self.get_mut(index).expect("Index out of bounds")
    }
}
