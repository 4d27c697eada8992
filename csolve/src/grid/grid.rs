use serde::{Deserialize, Serialize};

use crate::array::Array2D;
use crate::dims::Coord;
use crate::grid::cell::{Cell, Direction};
use crate::grid::{Endpoint, GridError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    cells: Array2D<Cell>,
    start: Coord,
    end: Coord,
}

/// Unchecked form of [`Grid`] as it comes out of a deserializer.
#[derive(Deserialize)]
struct RawGrid {
    cells: Array2D<Cell>,
    start: Coord,
    end: Coord,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let expected = raw.cells.rows().checked_mul(raw.cells.cols());
        if expected != Some(raw.cells.len()) {
            return Err(GridError::SizeMismatch {
                expected: expected.unwrap_or(usize::MAX),
                got: raw.cells.len(),
            });
        }

        Grid::new(raw.cells, raw.start, raw.end)
    }
}

impl Grid {
    /// Builds a grid from already laid out cells.
    ///
    /// Checks that every cell sits where its coordinate says, that walls agree from both sides
    /// and that the start and end are inside. The outer border is closed.
    pub fn new(cells: Array2D<Cell>, start: Coord, end: Coord) -> Result<Self, GridError> {
        let mut grid = Grid { cells, start, end };
        grid.validate()?;
        grid.close_border();
        Ok(grid)
    }

    /// Grid with walls only around the border
    pub fn open(rows: usize, cols: usize, start: Coord, end: Coord) -> Result<Self, GridError> {
        Self::new(Array2D::from_fn(rows, cols, Cell::open), start, end)
    }

    /// Grid where every cell is closed from all sides
    pub fn walled(rows: usize, cols: usize, start: Coord, end: Coord) -> Result<Self, GridError> {
        Self::new(Array2D::from_fn(rows, cols, Cell::new), start, end)
    }

    fn validate(&self) -> Result<(), GridError> {
        if self.cells.is_empty() {
            return Err(GridError::EmptyGrid);
        }

        for (at, cell) in self.cells.iter_pos().zip(self.cells.iter()) {
            if cell.coord != at {
                return Err(GridError::WrongCoord {
                    at,
                    claims: cell.coord,
                });
            }

            for dir in [Direction::East, Direction::South] {
                if let Some(neighbor) = self.cells.get(at + dir.offset()) {
                    if cell.has_wall(dir) != neighbor.has_wall(dir.reverse()) {
                        return Err(GridError::AsymmetricWall { pos: at, dir });
                    }
                }
            }
        }

        self.check_endpoint(Endpoint::Start, self.start)?;
        self.check_endpoint(Endpoint::End, self.end)
    }

    fn check_endpoint(&self, what: Endpoint, pos: Coord) -> Result<(), GridError> {
        if self.is_in_bounds(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                what,
                pos,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    fn close_border(&mut self) {
        let (rows, cols) = (self.rows() as i32, self.cols() as i32);
        for row in 0..rows {
            self.cells[Coord(row, 0)].set_wall(Direction::West, true);
            self.cells[Coord(row, cols - 1)].set_wall(Direction::East, true);
        }
        for col in 0..cols {
            self.cells[Coord(0, col)].set_wall(Direction::North, true);
            self.cells[Coord(rows - 1, col)].set_wall(Direction::South, true);
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.size()
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    pub fn start_cell(&self) -> &Cell {
        &self.cells[self.start]
    }

    pub fn end_cell(&self) -> &Cell {
        &self.cells[self.end]
    }

    pub fn set_start(&mut self, pos: Coord) -> Result<(), GridError> {
        self.check_endpoint(Endpoint::Start, pos)?;
        self.start = pos;
        Ok(())
    }

    pub fn set_end(&mut self, pos: Coord) -> Result<(), GridError> {
        self.check_endpoint(Endpoint::End, pos)?;
        self.end = pos;
        Ok(())
    }

    pub fn is_in_bounds(&self, pos: Coord) -> bool {
        self.cells.contains(pos)
    }

    pub fn get_cell(&self, pos: Coord) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    /// Returns the cell reached by stepping from `from` in `dir`, unless the step leaves the grid
    /// or goes through a wall.
    pub fn can_move(&self, from: Coord, dir: Direction) -> Option<Coord> {
        let to = from + dir.offset();
        let cell = self.cells.get(from)?;
        (cell.is_open(dir) && self.is_in_bounds(to)).then_some(to)
    }

    /// Reachable neighbors of `pos`, in search order.
    pub fn neighbors(&self, pos: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.can_move(pos, dir))
    }

    /// Whether two cells are adjacent and no wall stands between them.
    pub fn is_passage(&self, from: Coord, to: Coord) -> bool {
        Direction::between(from, to).is_some_and(|dir| self.can_move(from, dir).is_some())
    }

    /// Opens the wall on `dir` side of `pos`, together with the matching wall of the neighbor.
    ///
    /// Border walls stay closed; returns whether the wall was removed.
    pub fn remove_wall(&mut self, pos: Coord, dir: Direction) -> bool {
        self.set_wall(pos, dir, false)
    }

    pub fn add_wall(&mut self, pos: Coord, dir: Direction) -> bool {
        self.set_wall(pos, dir, true)
    }

    fn set_wall(&mut self, pos: Coord, dir: Direction, wall: bool) -> bool {
        let other = pos + dir.offset();
        if !self.is_in_bounds(pos) || !self.is_in_bounds(other) {
            return false;
        }

        self.cells[pos].set_wall(dir, wall);
        self.cells[other].set_wall(dir.reverse(), wall);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid_keeps_border_closed() {
        let grid = Grid::open(2, 2, Coord(0, 0), Coord(1, 1)).unwrap();
        assert_eq!(grid.can_move(Coord(0, 0), Direction::North), None);
        assert_eq!(grid.can_move(Coord(0, 0), Direction::West), None);
        assert_eq!(grid.can_move(Coord(0, 0), Direction::East), Some(Coord(0, 1)));
        assert_eq!(grid.can_move(Coord(1, 1), Direction::South), None);
        assert_eq!(
            grid.neighbors(Coord(0, 0)).collect::<Vec<_>>(),
            vec![Coord(0, 1), Coord(1, 0)]
        );
    }

    #[test]
    fn walls_are_shared_by_neighbors() {
        let mut grid = Grid::walled(2, 3, Coord(0, 0), Coord(1, 2)).unwrap();
        assert!(grid.remove_wall(Coord(0, 1), Direction::South));
        assert!(grid.is_passage(Coord(0, 1), Coord(1, 1)));
        assert!(grid.is_passage(Coord(1, 1), Coord(0, 1)));
        assert!(!grid.is_passage(Coord(0, 0), Coord(0, 1)));

        assert!(grid.add_wall(Coord(1, 1), Direction::North));
        assert!(!grid.is_passage(Coord(0, 1), Coord(1, 1)));
    }

    #[test]
    fn border_walls_cannot_be_removed() {
        let mut grid = Grid::walled(1, 1, Coord(0, 0), Coord(0, 0)).unwrap();
        assert!(!grid.remove_wall(Coord(0, 0), Direction::North));
        assert!(grid.start_cell().has_wall(Direction::North));
    }

    #[test]
    fn endpoints_must_be_inside() {
        let err = Grid::open(3, 3, Coord(0, 0), Coord(3, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                what: Endpoint::End,
                pos: Coord(3, 0),
                rows: 3,
                cols: 3,
            }
        );

        let err = Grid::open(3, 3, Coord(-1, 0), Coord(2, 2)).unwrap_err();
        assert!(matches!(
            err,
            GridError::OutOfBounds {
                what: Endpoint::Start,
                ..
            }
        ));

        let mut grid = Grid::open(3, 3, Coord(0, 0), Coord(2, 2)).unwrap();
        assert!(grid.set_start(Coord(0, 5)).is_err());
        assert_eq!(grid.start(), Coord(0, 0));
        grid.set_end(Coord(1, 1)).unwrap();
        assert_eq!(grid.end_cell().get_coord(), Coord(1, 1));
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert_eq!(
            Grid::open(0, 0, Coord(0, 0), Coord(0, 0)).unwrap_err(),
            GridError::EmptyGrid
        );
    }

    #[test]
    fn asymmetric_walls_are_rejected() {
        let mut cells = Array2D::from_fn(1, 2, Cell::open);
        cells[Coord(0, 0)].set_wall(Direction::East, true);
        let err = Grid::new(cells, Coord(0, 0), Coord(0, 1)).unwrap_err();
        assert_eq!(
            err,
            GridError::AsymmetricWall {
                pos: Coord(0, 0),
                dir: Direction::East
            }
        );
    }

    #[test]
    fn ron_round_trip() {
        let mut grid = Grid::open(2, 3, Coord(0, 0), Coord(1, 2)).unwrap();
        grid.add_wall(Coord(0, 0), Direction::East);
        grid.add_wall(Coord(1, 1), Direction::North);

        let text = ron::to_string(&grid).unwrap();
        let back: Grid = ron::from_str(&text).unwrap();
        assert_eq!(back.to_string(), grid.to_string());
        assert_eq!(back.end(), Coord(1, 2));
    }

    #[test]
    fn ron_input_is_validated() {
        const CELL: &str = "(north:true,east:true,south:true,west:true,coord:(0,0))";

        let ok = format!("(cells:(buf:[{CELL}],rows:1,cols:1),start:(0,0),end:(0,0))");
        assert!(ron::from_str::<Grid>(&ok).is_ok());

        let outside = format!("(cells:(buf:[{CELL}],rows:1,cols:1),start:(0,0),end:(0,3))");
        assert!(ron::from_str::<Grid>(&outside).is_err());

        let short = format!("(cells:(buf:[{CELL}],rows:2,cols:1),start:(0,0),end:(0,0))");
        assert!(ron::from_str::<Grid>(&short).is_err());
    }

    #[test]
    fn huge_ron_sizes_are_rejected() {
        let huge = format!(
            "(cells:(buf:[],rows:{},cols:2),start:(0,0),end:(0,0))",
            usize::MAX
        );
        let err = ron::from_str::<Grid>(&huge).unwrap_err();
        assert!(err.to_string().contains("got 0"), "{}", err);

        let no_cols = format!(
            "(cells:(buf:[],rows:{},cols:0),start:(0,0),end:(0,0))",
            usize::MAX
        );
        assert!(ron::from_str::<Grid>(&no_cols).is_err());
    }

    #[test]
    fn misplaced_cells_are_rejected() {
        let cells = Array2D::from_fn(1, 2, |pos| Cell::open(Coord(pos.0, 1 - pos.1)));
        assert!(matches!(
            Grid::new(cells, Coord(0, 0), Coord(0, 1)),
            Err(GridError::WrongCoord { .. })
        ));
    }
}
