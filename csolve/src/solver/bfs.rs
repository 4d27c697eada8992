use std::collections::VecDeque;

use log::trace;

use super::{Exploration, Search, SolveError};
use crate::grid::{Direction, Grid};

/// Queue based search, finds a path with the fewest hops.
///
/// Runs until the queue is empty, so every reachable cell ends up with a parent.
pub struct BreadthFirstSearch;

impl Search for BreadthFirstSearch {
    fn search(&self, grid: &Grid, exploration: &mut Exploration) -> Result<(), SolveError> {
        let mut queue = VecDeque::with_capacity(grid.cell_count());

        exploration.mark_explored(grid.start());
        queue.push_back(grid.start());

        while let Some(current) = queue.pop_front() {
            trace!("bfs: at {}, {} waiting", current, queue.len());
            exploration.visit(current);

            for dir in Direction::ALL {
                if let Some(next) = exploration.valid_neighbor(grid, current, dir) {
                    exploration.set_parent(next, current);
                    exploration.mark_explored(next);
                    queue.push_back(next);
                }
            }
        }

        if exploration.is_explored(grid.end()) {
            Ok(())
        } else {
            Err(SolveError::NoSolution {
                start: grid.start(),
                end: grid.end(),
            })
        }
    }
}
