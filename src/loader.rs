use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use csolve::{generator, Grid, GridError};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot access {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("Invalid RON maze: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Invalid maze: {0}")]
    Grid(#[from] GridError),
    #[error("Cannot serialize maze: {0}")]
    Serialize(#[from] ron::Error),
}

/// Maze size given as `ROWSxCOLS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl FromStr for GridSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rows, cols) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected ROWSxCOLS, got {:?}", s))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|err| format!("bad size {:?}: {}", part, err))
        };

        let size = GridSize {
            rows: parse(rows)?,
            cols: parse(cols)?,
        };
        if size.rows == 0 || size.cols == 0 {
            return Err("maze needs at least one row and one column".to_string());
        }
        Ok(size)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeSource {
    File(PathBuf),
    Generated { size: GridSize, seed: Option<u64> },
}

impl MazeSource {
    pub fn load(&self) -> Result<Grid, LoadError> {
        match self {
            MazeSource::File(path) => load_grid(path),
            MazeSource::Generated { size, seed } => {
                let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
                info!("generating {} maze with seed {}", size, seed);
                generate(*size, seed)
            }
        }
    }
}

fn is_ron(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ron"))
}

/// Reads a maze, as RON when the file ends with `.ron`, as a text drawing otherwise.
pub fn load_grid(path: &Path) -> Result<Grid, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;

    let grid: Grid = if is_ron(path) {
        ron::from_str(&text)?
    } else {
        text.parse()?
    };
    debug!("loaded {}x{} maze from {:?}", grid.rows(), grid.cols(), path);

    Ok(grid)
}

pub fn generate(size: GridSize, seed: u64) -> Result<Grid, LoadError> {
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(generator::depth_first(size.rows, size.cols, &mut rng)?)
}

pub fn save_ron(grid: &Grid, path: &Path) -> Result<(), LoadError> {
    let text = ron::ser::to_string_pretty(grid, ron::ser::PrettyConfig::default())?;
    fs::write(path, text).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    info!("maze saved to {:?}", path);
    Ok(())
}
