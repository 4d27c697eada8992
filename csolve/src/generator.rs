use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::array::Array2D;
use crate::dims::Coord;
use crate::grid::{Direction, Grid, GridError};

/// Carves a perfect maze (exactly one path between any two cells) with randomized depth-first
/// backtracking.
///
/// Start is the top left cell, end the bottom right one.
pub fn depth_first<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<Grid, GridError> {
    let end = Coord(rows as i32 - 1, cols as i32 - 1);
    let mut grid = Grid::walled(rows, cols, Coord::ZERO, end)?;

    let mut visited = Array2D::new(false, rows, cols);
    let mut stack = Vec::with_capacity(rows * cols);

    visited[Coord::ZERO] = true;
    stack.push(Coord::ZERO);
    while let Some(current) = stack.pop() {
        let unvisited: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|dir| visited.get(current + dir.offset()) == Some(&false))
            .collect();

        if let Some(&dir) = unvisited.choose(rng) {
            let chosen = current + dir.offset();
            grid.remove_wall(current, dir);
            visited[chosen] = true;
            stack.push(current);
            stack.push(chosen);
        }
    }

    debug!("generated {}x{} maze", rows, cols);
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn passages(grid: &Grid) -> usize {
        grid.cells()
            .iter_pos()
            .map(|pos| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|dir| grid.can_move(pos, *dir).is_some())
                    .count()
            })
            .sum()
    }

    #[test]
    fn perfect_maze_is_a_spanning_tree() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = depth_first(8, 11, &mut rng).unwrap();
        assert_eq!(passages(&grid), 8 * 11 - 1);
        assert_eq!(grid.start(), Coord(0, 0));
        assert_eq!(grid.end(), Coord(7, 10));
    }

    #[test]
    fn same_seed_same_maze() {
        let a = depth_first(6, 6, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = depth_first(6, 6, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn single_cell() {
        let grid = depth_first(1, 1, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(grid.start(), grid.end());
    }

    #[test]
    fn empty_size_is_an_error() {
        assert_eq!(
            depth_first(0, 4, &mut StdRng::seed_from_u64(1)).unwrap_err(),
            GridError::EmptyGrid
        );
    }
}
