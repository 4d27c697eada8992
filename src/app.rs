use std::{io, path::PathBuf};

use csolve::{SolveError, Solver, Strategy};
use log::{info, warn};
use thiserror::Error;

use crate::{
    loader::{self, LoadError, MazeSource},
    render::{self, RenderOptions},
    settings::SettingsError,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("{strategy} failed: {source}")]
    Solve {
        strategy: Strategy,
        source: SolveError,
    },
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("Cannot install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("No maze given, pass a file or --generate ROWSxCOLS")]
    NoMaze,
}

/// Everything one run needs, after settings and flags are merged.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub source: MazeSource,
    pub strategies: Vec<Strategy>,
    pub render: RenderOptions,
    pub save_ron: Option<PathBuf>,
}

/// Loads the maze and prints one solution per strategy.
///
/// A strategy that finds no path is reported and the remaining ones still run; the first such
/// failure is returned once all are done.
pub fn run(options: &RunOptions, out: &mut impl io::Write) -> Result<(), AppError> {
    let grid = options.source.load()?;
    if let Some(path) = &options.save_ron {
        loader::save_ron(&grid, path)?;
    }

    let mut solver = Solver::new(&grid);
    let mut failure = None;

    for (i, &strategy) in options.strategies.iter().enumerate() {
        if i > 0 {
            solver.reset();
            writeln!(out)?;
        }

        match solver.solve(strategy) {
            Ok(solution) => {
                write!(
                    out,
                    "{}",
                    render::render_solution(
                        &grid,
                        &solution,
                        Some(solver.exploration()),
                        &options.render
                    )
                )?;
                writeln!(
                    out,
                    "{}",
                    render::summary(strategy, &solution, solver.exploration())
                )?;
                if options.render.show_coords {
                    write!(out, "{}", render::coords_list(&solution))?;
                }
                info!("{} done", strategy);
            }
            Err(source) => {
                writeln!(out, "{}: no solution", strategy)?;
                warn!("{} could not solve the maze: {}", strategy, source);
                failure.get_or_insert(AppError::Solve { strategy, source });
            }
        }
    }

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
