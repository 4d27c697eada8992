use crate::array::Array2D;
use crate::dims::Coord;
use crate::grid::{Direction, Grid};

/// Per-search state: which cells were already discovered and who discovered them.
///
/// Kept apart from the [`Grid`], so that one grid can be searched over and over without
/// touching its cells.
#[derive(Debug, Clone)]
pub struct Exploration {
    explored: Array2D<bool>,
    parents: Array2D<Option<Coord>>,
    visit_order: Vec<Coord>,
}

impl Exploration {
    pub fn new(grid: &Grid) -> Self {
        Self {
            explored: Array2D::new(false, grid.rows(), grid.cols()),
            parents: Array2D::new(None, grid.rows(), grid.cols()),
            visit_order: Vec::new(),
        }
    }

    /// Clears explored flags and parent links of every cell.
    pub fn reset(&mut self) {
        self.explored.fill(false);
        self.parents.fill(None);
        self.visit_order.clear();
    }

    pub fn fits(&self, grid: &Grid) -> bool {
        self.explored.size() == grid.size()
    }

    pub fn is_explored(&self, pos: Coord) -> bool {
        self.explored.get(pos).copied().unwrap_or(false)
    }

    pub fn mark_explored(&mut self, pos: Coord) {
        if let Some(explored) = self.explored.get_mut(pos) {
            *explored = true;
        }
    }

    pub fn parent(&self, pos: Coord) -> Option<Coord> {
        self.parents.get(pos).copied().flatten()
    }

    pub fn set_parent(&mut self, pos: Coord, parent: Coord) {
        if let Some(slot) = self.parents.get_mut(pos) {
            *slot = Some(parent);
        }
    }

    /// The neighbor of `from` in `dir`, if it's inside the grid, not walled off and not explored
    /// yet.
    pub fn valid_neighbor(&self, grid: &Grid, from: Coord, dir: Direction) -> Option<Coord> {
        grid.can_move(from, dir)
            .filter(|next| !self.is_explored(*next))
    }

    pub(crate) fn visit(&mut self, pos: Coord) {
        self.visit_order.push(pos);
    }

    /// Cells in the order the search expanded them.
    pub fn visit_order(&self) -> &[Coord] {
        &self.visit_order
    }

    pub fn explored_count(&self) -> usize {
        self.explored.iter().filter(|explored| **explored).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_everything() {
        let grid = Grid::open(2, 2, Coord(0, 0), Coord(1, 1)).unwrap();
        let mut exploration = Exploration::new(&grid);

        exploration.mark_explored(Coord(0, 1));
        exploration.set_parent(Coord(0, 1), Coord(0, 0));
        exploration.visit(Coord(0, 0));
        assert_eq!(exploration.explored_count(), 1);
        assert_eq!(exploration.parent(Coord(0, 1)), Some(Coord(0, 0)));

        exploration.reset();
        assert_eq!(exploration.explored_count(), 0);
        assert_eq!(exploration.parent(Coord(0, 1)), None);
        assert!(exploration.visit_order().is_empty());
        assert!(grid.is_passage(Coord(0, 0), Coord(0, 1)));
    }

    #[test]
    fn valid_neighbor_combines_bounds_walls_and_explored() {
        let mut grid = Grid::open(2, 2, Coord(0, 0), Coord(1, 1)).unwrap();
        grid.add_wall(Coord(0, 0), Direction::South);
        let mut exploration = Exploration::new(&grid);

        let origin = Coord(0, 0);
        assert_eq!(exploration.valid_neighbor(&grid, origin, Direction::North), None);
        assert_eq!(exploration.valid_neighbor(&grid, origin, Direction::South), None);
        assert_eq!(
            exploration.valid_neighbor(&grid, origin, Direction::East),
            Some(Coord(0, 1))
        );

        exploration.mark_explored(Coord(0, 1));
        assert_eq!(exploration.valid_neighbor(&grid, origin, Direction::East), None);
    }

    #[test]
    fn out_of_bounds_is_never_explored() {
        let grid = Grid::open(1, 1, Coord(0, 0), Coord(0, 0)).unwrap();
        let mut exploration = Exploration::new(&grid);
        exploration.mark_explored(Coord(5, 5));
        assert!(!exploration.is_explored(Coord(5, 5)));
        assert_eq!(exploration.explored_count(), 0);
    }
}
