use log::trace;

use super::{Exploration, Search, SolveError};
use crate::grid::{Direction, Grid};

/// Stack based search.
///
/// Cells are marked explored when pushed, so nothing is pushed twice, and the search stops as
/// soon as the end cell is popped.
pub struct DepthFirstSearch;

impl Search for DepthFirstSearch {
    fn search(&self, grid: &Grid, exploration: &mut Exploration) -> Result<(), SolveError> {
        let mut stack = Vec::with_capacity(grid.cell_count());

        let mut current = grid.start();
        exploration.mark_explored(current);
        exploration.visit(current);

        while current != grid.end() {
            for dir in Direction::ALL {
                if let Some(next) = exploration.valid_neighbor(grid, current, dir) {
                    exploration.mark_explored(next);
                    exploration.set_parent(next, current);
                    stack.push(next);
                }
            }

            current = stack.pop().ok_or(SolveError::NoSolution {
                start: grid.start(),
                end: grid.end(),
            })?;
            trace!("dfs: at {}, {} waiting", current, stack.len());
            exploration.visit(current);
        }

        Ok(())
    }
}
