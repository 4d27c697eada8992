use super::{Exploration, SolveError};
use crate::grid::{Cell, Grid};

/// Follows parent links from the end cell back to the start and returns the cells in
/// start-to-end order.
///
/// Fails if a link is missing, or if the chain is longer than the grid has cells, which can only
/// happen when the links form a cycle.
pub fn reconstruct<'g>(
    grid: &'g Grid,
    exploration: &Exploration,
) -> Result<Vec<&'g Cell>, SolveError> {
    let start = grid.start();

    let mut current = grid.end();
    let mut stack = vec![current];
    while current != start {
        current = exploration
            .parent(current)
            .ok_or(SolveError::BrokenParentChain { at: current })?;

        if stack.len() == grid.cell_count() {
            return Err(SolveError::BrokenParentChain { at: current });
        }
        stack.push(current);
    }

    let mut solution = Vec::with_capacity(stack.len());
    while let Some(pos) = stack.pop() {
        let cell = grid
            .get_cell(pos)
            .ok_or(SolveError::BrokenParentChain { at: pos })?;
        solution.push(cell);
    }

    Ok(solution)
}
