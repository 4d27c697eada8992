//! Plain text drawing of a maze.
//!
//! A maze with `rows x cols` cells is drawn on `2 * rows + 1` lines of `2 * cols + 1` characters.
//! Cells sit on odd lines and odd columns, walls between them, and corners on even positions:
//!
//! ```text
//! +-+-+-+
//! |S    |
//! +-+ + +
//! |    E|
//! +-+-+-+
//! ```
//!
//! `S` marks the start and `E` the end cell. Between two cells a space, `.` or `*` is an opening
//! and any other character is a wall, so drawings with a path marked on them read back the same.
//! The outer border is always closed, whatever is drawn there.

use std::fmt;
use std::str::FromStr;

use crate::array::Array2D;
use crate::dims::Coord;
use crate::grid::cell::{Cell, Direction};
use crate::grid::{Endpoint, Grid, GridError};

pub const START_CHAR: char = 'S';
pub const END_CHAR: char = 'E';
/// Characters read as open space, both inside cells and between them
pub const OPEN_CHARS: [char; 3] = [' ', '.', '*'];

/// Single character position of the drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Corner,
    HorizontalWall,
    VerticalWall,
    /// Opening between two cells
    Gap,
    Cell(Coord),
}

impl Glyph {
    pub fn as_char(self, grid: &Grid) -> char {
        match self {
            Glyph::Corner => '+',
            Glyph::HorizontalWall => '-',
            Glyph::VerticalWall => '|',
            Glyph::Gap => ' ',
            Glyph::Cell(pos) if pos == grid.start() => START_CHAR,
            Glyph::Cell(pos) if pos == grid.end() => END_CHAR,
            Glyph::Cell(_) => ' ',
        }
    }
}

impl Grid {
    /// Lays the grid out as the text drawing, one [`Glyph`] per character.
    pub fn glyphs(&self) -> Array2D<Glyph> {
        let (rows, cols) = (self.rows() as i32, self.cols() as i32);

        Array2D::from_fn(
            self.rows() * 2 + 1,
            self.cols() * 2 + 1,
            |Coord(line, col)| match (line % 2, col % 2) {
                (0, 0) => Glyph::Corner,
                (0, _) => {
                    let (row, col) = (line / 2, col / 2);
                    let closed = row == 0
                        || row == rows
                        || self.cells()[Coord(row, col)].has_wall(Direction::North);
                    if closed {
                        Glyph::HorizontalWall
                    } else {
                        Glyph::Gap
                    }
                }
                (_, 0) => {
                    let (row, col) = (line / 2, col / 2);
                    let closed = col == 0
                        || col == cols
                        || self.cells()[Coord(row, col)].has_wall(Direction::West);
                    if closed {
                        Glyph::VerticalWall
                    } else {
                        Glyph::Gap
                    }
                }
                _ => Glyph::Cell(Coord(line / 2, col / 2)),
            },
        )
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyphs = self.glyphs();
        for line in 0..glyphs.rows() {
            let text: String = glyphs
                .row(line)
                .unwrap_or_default()
                .iter()
                .map(|glyph| glyph.as_char(self))
                .collect();
            writeln!(f, "{}", text)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines: Vec<Vec<char>> = s
            .lines()
            .skip_while(|line| line.trim().is_empty())
            .map(|line| line.trim_end().chars().collect())
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        let width = lines.first().map_or(0, Vec::len);
        if lines.len() < 3 || lines.len() % 2 == 0 || width < 3 || width % 2 == 0 {
            return Err(GridError::BadLayout {
                lines: lines.len(),
                width,
            });
        }

        for (i, line) in lines.iter_mut().enumerate() {
            if line.len() > width {
                return Err(GridError::RaggedRows {
                    line: i + 1,
                    len: line.len(),
                    expected: width,
                });
            }
            line.resize(width, ' ');
        }

        let rows = (lines.len() - 1) / 2;
        let cols = (width - 1) / 2;
        let is_wall = |line: usize, col: usize| !OPEN_CHARS.contains(&lines[line][col]);

        let mut start = None;
        let mut end = None;
        for row in 0..rows {
            for col in 0..cols {
                let (line, column) = (row * 2 + 1, col * 2 + 1);
                let pos = Coord(row as i32, col as i32);
                let marker = match lines[line][column] {
                    START_CHAR => (&mut start, Endpoint::Start),
                    END_CHAR => (&mut end, Endpoint::End),
                    ch if OPEN_CHARS.contains(&ch) => continue,
                    ch => {
                        return Err(GridError::UnexpectedChar {
                            ch,
                            line: line + 1,
                            col: column + 1,
                        })
                    }
                };

                match marker {
                    (Some(first), what) => {
                        return Err(GridError::DuplicateMarker {
                            what,
                            first: *first,
                            second: pos,
                        })
                    }
                    (slot, _) => *slot = Some(pos),
                }
            }
        }

        let cells = Array2D::from_fn(rows, cols, |pos| {
            let (row, col) = (pos.0 as usize, pos.1 as usize);
            let (line, column) = (row * 2 + 1, col * 2 + 1);

            let mut cell = Cell::open(pos);
            cell.set_wall(Direction::North, is_wall(line - 1, column));
            cell.set_wall(Direction::South, is_wall(line + 1, column));
            cell.set_wall(Direction::West, is_wall(line, column - 1));
            cell.set_wall(Direction::East, is_wall(line, column + 1));
            cell
        });

        let start = start.ok_or(GridError::MissingStart)?;
        let end = end.ok_or(GridError::MissingEnd)?;
        Grid::new(cells, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
+-+-+-+
|S    |
+-+ + +
|    E|
+-+-+-+
";

    #[test]
    fn parses_walls_and_markers() {
        let grid: Grid = SMALL.parse().unwrap();
        assert_eq!(grid.size(), Coord(2, 3));
        assert_eq!(grid.start(), Coord(0, 0));
        assert_eq!(grid.end(), Coord(1, 2));

        assert!(grid.is_passage(Coord(0, 0), Coord(0, 1)));
        assert!(!grid.is_passage(Coord(0, 0), Coord(1, 0)));
        assert!(grid.is_passage(Coord(0, 1), Coord(1, 1)));
        assert!(grid.is_passage(Coord(0, 2), Coord(1, 2)));
        assert!(grid.is_passage(Coord(1, 0), Coord(1, 1)));
    }

    #[test]
    fn display_round_trips() {
        let grid: Grid = SMALL.parse().unwrap();
        assert_eq!(grid.to_string(), SMALL);
    }

    #[test]
    fn open_border_is_closed_anyway() {
        let text = "+ + +\n S E \n+ + +\n";
        let grid: Grid = text.parse().unwrap();
        assert!(grid.start_cell().has_wall(Direction::North));
        assert!(grid.start_cell().has_wall(Direction::West));
        assert!(grid.end_cell().has_wall(Direction::East));
        assert!(grid.is_passage(Coord(0, 0), Coord(0, 1)));
    }

    #[test]
    fn trailing_whitespace_is_padded() {
        let text = "+-+-+\n|S E|   \n+-+-+\n\n\n";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.size(), Coord(1, 2));
        assert!(grid.is_passage(Coord(0, 0), Coord(0, 1)));
    }

    #[test]
    fn layout_errors() {
        assert!(matches!(
            "+-+\n|S|\n".parse::<Grid>(),
            Err(GridError::BadLayout { lines: 2, .. })
        ));
        assert!(matches!(
            "+-+-\n|S E|\n+-+-+\n".parse::<Grid>(),
            Err(GridError::BadLayout { width: 4, .. })
        ));
        assert_eq!(
            "+-+\n|S|E\n+-+\n".parse::<Grid>().unwrap_err(),
            GridError::RaggedRows {
                line: 2,
                len: 4,
                expected: 3
            }
        );
    }

    #[test]
    fn marker_errors() {
        assert_eq!(
            "+-+-+\n| | |\n+-+-+\n".parse::<Grid>().unwrap_err(),
            GridError::MissingStart
        );
        assert_eq!(
            "+-+-+\n|S| |\n+-+-+\n".parse::<Grid>().unwrap_err(),
            GridError::MissingEnd
        );
        assert_eq!(
            "+-+-+\n|S|S|\n+-+-+\n".parse::<Grid>().unwrap_err(),
            GridError::DuplicateMarker {
                what: Endpoint::Start,
                first: Coord(0, 0),
                second: Coord(0, 1)
            }
        );
    }

    #[test]
    fn unknown_cell_content() {
        let grid: Grid = "+-+-+\n|S#E|\n+-+-+\n".parse().unwrap();
        assert!(!grid.is_passage(Coord(0, 0), Coord(0, 1)));

        assert_eq!(
            "+-+-+-+\n|S|#|E|\n+-+-+-+\n".parse::<Grid>().unwrap_err(),
            GridError::UnexpectedChar {
                ch: '#',
                line: 2,
                col: 4
            }
        );
    }

    #[test]
    fn marked_gaps_stay_open() {
        let text = "\
+-+-+-+
|S***.|
+*+-+.+
|.| |E|
+-+-+-+
";
        let grid: Grid = text.parse().unwrap();
        assert!(grid.is_passage(Coord(0, 0), Coord(0, 1)));
        assert!(grid.is_passage(Coord(0, 0), Coord(1, 0)));
        assert!(grid.is_passage(Coord(0, 2), Coord(1, 2)));
        assert!(!grid.is_passage(Coord(0, 1), Coord(1, 1)));
    }

    #[test]
    fn glyph_layout() {
        let grid: Grid = SMALL.parse().unwrap();
        let glyphs = grid.glyphs();
        assert_eq!(glyphs.size(), Coord(5, 7));
        assert_eq!(glyphs[Coord(0, 0)], Glyph::Corner);
        assert_eq!(glyphs[Coord(1, 1)], Glyph::Cell(Coord(0, 0)));
        assert_eq!(glyphs[Coord(1, 2)], Glyph::Gap);
        assert_eq!(glyphs[Coord(2, 1)], Glyph::HorizontalWall);
        assert_eq!(glyphs[Coord(3, 0)], Glyph::VerticalWall);
    }
}
