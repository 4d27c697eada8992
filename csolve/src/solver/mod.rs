mod bfs;
mod dfs;
mod exploration;
pub mod path;

pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;
pub use exploration::Exploration;

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dims::Coord;
use crate::grid::{Cell, Grid};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("no path leads from {start} to {end}")]
    NoSolution { start: Coord, end: Coord },
    #[error("parent chain is broken at {at}")]
    BrokenParentChain { at: Coord },
}

/// Traversal that fills an [`Exploration`] with parent links leading to the end cell.
pub trait Search {
    fn search(&self, grid: &Grid, exploration: &mut Exploration) -> Result<(), SolveError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    Dfs,
    Bfs,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Dfs, Strategy::Bfs];

    pub fn searcher(self) -> &'static dyn Search {
        match self {
            Strategy::Dfs => &DepthFirstSearch,
            Strategy::Bfs => &BreadthFirstSearch,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Dfs => write!(f, "DFS"),
            Strategy::Bfs => write!(f, "BFS"),
        }
    }
}

/// Solves one grid, as many times as asked.
///
/// Every call to [`Solver::solve`] starts from a clean [`Exploration`], so results never depend
/// on earlier searches. The exploration of the last search stays around for inspection.
pub struct Solver<'g> {
    grid: &'g Grid,
    exploration: Exploration,
}

impl<'g> Solver<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            exploration: Exploration::new(grid),
        }
    }

    pub fn set_grid(&mut self, grid: &'g Grid) {
        self.grid = grid;
        if self.exploration.fits(grid) {
            self.exploration.reset();
        } else {
            self.exploration = Exploration::new(grid);
        }
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn exploration(&self) -> &Exploration {
        &self.exploration
    }

    pub fn reset(&mut self) {
        self.exploration.reset();
    }

    pub fn solve(&mut self, strategy: Strategy) -> Result<Vec<&'g Cell>, SolveError> {
        self.reset();
        debug!(
            "solving {}x{} grid from {} to {} with {}",
            self.grid.rows(),
            self.grid.cols(),
            self.grid.start(),
            self.grid.end(),
            strategy
        );

        if let Err(err) = strategy
            .searcher()
            .search(self.grid, &mut self.exploration)
        {
            warn!(
                "{} gave up after exploring {} cells: {}",
                strategy,
                self.exploration.explored_count(),
                err
            );
            return Err(err);
        }

        let solution = path::reconstruct(self.grid, &self.exploration)?;
        debug!(
            "{} found a path of {} cells, explored {} cells",
            strategy,
            solution.len(),
            self.exploration.explored_count()
        );

        Ok(solution)
    }

    pub fn solve_dfs(&mut self) -> Result<Vec<&'g Cell>, SolveError> {
        self.solve(Strategy::Dfs)
    }

    pub fn solve_bfs(&mut self) -> Result<Vec<&'g Cell>, SolveError> {
        self.solve(Strategy::Bfs)
    }
}

/// Finds a path from the start to the end cell of `grid`.
pub fn solve(grid: &Grid, strategy: Strategy) -> Result<Vec<&Cell>, SolveError> {
    Solver::new(grid).solve(strategy)
}
