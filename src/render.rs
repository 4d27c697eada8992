use std::fmt::Write as _;

use crossterm::style::ContentStyle;
use csolve::{
    array::Array2D,
    dims::Coord,
    grid::{Glyph, Grid},
    solver::Exploration,
    Cell, Strategy,
};

use crate::settings::{ColorScheme, Settings};

pub const EXPLORED_CHAR: char = '.';

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub path_char: char,
    pub color: bool,
    pub show_explored: bool,
    pub show_coords: bool,
    pub color_scheme: ColorScheme,
}

impl RenderOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            path_char: settings.get_path_char(),
            color: settings.get_color(),
            show_explored: settings.get_show_explored(),
            show_coords: settings.get_show_coords(),
            color_scheme: settings.get_color_scheme(),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    None,
    Explored,
    Path,
}

struct Styles {
    walls: ContentStyle,
    path: ContentStyle,
    explored: ContentStyle,
    markers: ContentStyle,
}

/// Draws the grid with the solution path on top of it.
///
/// Path cells and the gaps between consecutive path cells get `path_char`, start and end keep
/// their markers.
pub fn render_solution(
    grid: &Grid,
    solution: &[&Cell],
    exploration: Option<&Exploration>,
    options: &RenderOptions,
) -> String {
    let mut marks = Array2D::new(Mark::None, grid.rows(), grid.cols());
    if let (true, Some(exploration)) = (options.show_explored, exploration) {
        for pos in grid.cells().iter_pos() {
            if exploration.is_explored(pos) {
                marks[pos] = Mark::Explored;
            }
        }
    }
    for cell in solution {
        if let Some(mark) = marks.get_mut(cell.get_coord()) {
            *mark = Mark::Path;
        }
    }

    let steps: Vec<(Coord, Coord)> = solution
        .windows(2)
        .map(|pair| (pair[0].get_coord(), pair[1].get_coord()))
        .collect();
    let is_step = |a: Coord, b: Coord| steps.iter().any(|&s| s == (a, b) || s == (b, a));

    let styles = options.color.then(|| Styles {
        walls: options.color_scheme.walls_style(),
        path: options.color_scheme.path_style(),
        explored: options.color_scheme.explored_style(),
        markers: options.color_scheme.markers_style(),
    });

    let glyphs = grid.glyphs();
    let mut out = String::with_capacity(glyphs.len() * 2);
    for pos in glyphs.iter_pos() {
        let glyph = glyphs[pos];
        let (ch, style) = match glyph {
            Glyph::Cell(cell) if cell == grid.start() || cell == grid.end() => {
                (glyph.as_char(grid), styles.as_ref().map(|s| s.markers))
            }
            Glyph::Cell(cell) => match marks[cell] {
                Mark::Path => (options.path_char, styles.as_ref().map(|s| s.path)),
                Mark::Explored => (EXPLORED_CHAR, styles.as_ref().map(|s| s.explored)),
                Mark::None => (' ', None),
            },
            Glyph::Gap => {
                let (a, b) = gap_sides(pos);
                if is_step(a, b) {
                    (options.path_char, styles.as_ref().map(|s| s.path))
                } else {
                    (' ', None)
                }
            }
            _ => (glyph.as_char(grid), styles.as_ref().map(|s| s.walls)),
        };

        match style {
            Some(style) => {
                let _ = write!(out, "{}", style.apply(ch));
            }
            None => out.push(ch),
        }

        if pos.1 as usize == glyphs.cols() - 1 {
            out.push('\n');
        }
    }

    out
}

/// The two cells a gap in the drawing connects
fn gap_sides(pos: Coord) -> (Coord, Coord) {
    let Coord(line, col) = pos;
    if line % 2 == 0 {
        (Coord(line / 2 - 1, col / 2), Coord(line / 2, col / 2))
    } else {
        (Coord(line / 2, col / 2 - 1), Coord(line / 2, col / 2))
    }
}

pub fn summary(strategy: Strategy, solution: &[&Cell], exploration: &Exploration) -> String {
    format!(
        "{}: {} cells, {} hops, {} explored",
        strategy,
        solution.len(),
        solution.len().saturating_sub(1),
        exploration.explored_count()
    )
}

pub fn coords_list(solution: &[&Cell]) -> String {
    solution
        .iter()
        .map(|cell| format!("{}\n", cell.get_coord()))
        .collect()
}

#[cfg(test)]
mod tests {
    use csolve::{Solver, Strategy};

    use super::*;

    const MAZE: &str = "\
+-+-+-+
|S    |
+ +-+ +
| | |E|
+-+-+-+
";

    fn plain() -> RenderOptions {
        RenderOptions {
            color: false,
            ..Default::default()
        }
    }

    #[test]
    fn path_is_drawn_over_the_grid() {
        let grid: Grid = MAZE.parse().unwrap();
        let mut solver = Solver::new(&grid);
        let path = solver.solve(Strategy::Bfs).unwrap();

        let drawn = render_solution(&grid, &path, Some(solver.exploration()), &plain());
        assert_eq!(
            drawn,
            "\
+-+-+-+
|S****|
+ +-+*+
| | |E|
+-+-+-+
"
        );
    }

    #[test]
    fn explored_cells_are_dotted() {
        let grid: Grid = MAZE.parse().unwrap();
        let mut solver = Solver::new(&grid);
        let path = solver.solve(Strategy::Bfs).unwrap();

        let options = RenderOptions {
            show_explored: true,
            ..plain()
        };
        let drawn = render_solution(&grid, &path, Some(solver.exploration()), &options);
        assert!(drawn.contains("|.| |E|"), "{}", drawn);
    }

    #[test]
    fn rendered_solution_reads_back() {
        let grid: Grid = MAZE.parse().unwrap();
        let mut solver = Solver::new(&grid);
        let path = solver.solve(Strategy::Bfs).unwrap();

        let options = RenderOptions {
            show_explored: true,
            ..plain()
        };
        let drawn = render_solution(&grid, &path, Some(solver.exploration()), &options);
        let back: Grid = drawn.parse().unwrap();

        assert_eq!(back.to_string(), MAZE);
        let again = csolve::solve(&back, Strategy::Bfs).unwrap();
        assert_eq!(coords_list(&again), coords_list(&path));
    }

    #[test]
    fn empty_solution_draws_the_maze() {
        let grid: Grid = MAZE.parse().unwrap();
        assert_eq!(render_solution(&grid, &[], None, &plain()), MAZE);
    }

    #[test]
    fn colored_output_keeps_the_shape() {
        let grid: Grid = MAZE.parse().unwrap();
        let path = csolve::solve(&grid, Strategy::Dfs).unwrap();
        let drawn = render_solution(&grid, &path, None, &RenderOptions::default());
        assert_eq!(drawn.lines().count(), 5);
        assert!(drawn.contains('S'));
        assert!(drawn.contains('*'));
    }

    #[test]
    fn summary_and_coords() {
        let grid: Grid = MAZE.parse().unwrap();
        let mut solver = Solver::new(&grid);
        let path = solver.solve(Strategy::Bfs).unwrap();

        assert_eq!(
            summary(Strategy::Bfs, &path, solver.exploration()),
            "BFS: 4 cells, 3 hops, 5 explored"
        );
        assert_eq!(coords_list(&path), "(0, 0)\n(0, 1)\n(0, 2)\n(1, 2)\n");
    }
}
