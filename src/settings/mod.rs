use std::{
    fs, io,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use crossterm::style::{Color, ContentStyle};
use csolve::Strategy;
use log::{warn, LevelFilter};
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read/write settings file: {0}")]
    Io(#[from] io::Error),
    #[error("Error reading settings file ({path:?}): {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Which searches to run on a maze.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum StrategyChoice {
    Dfs,
    Bfs,
    #[default]
    Both,
}

impl StrategyChoice {
    pub fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyChoice::Dfs => vec![Strategy::Dfs],
            StrategyChoice::Bfs => vec![Strategy::Bfs],
            StrategyChoice::Both => Strategy::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const ORDER: [LogLevel; 6] = [
        LogLevel::Off,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Level raised by `steps`, saturating at [`LogLevel::Trace`]
    pub fn raised(self, steps: u8) -> LogLevel {
        let idx = Self::ORDER.iter().position(|l| *l == self).unwrap_or(0);
        Self::ORDER[(idx + steps as usize).min(Self::ORDER.len() - 1)]
    }

    pub fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Colors are stored by name, as crossterm understands them (`"dark_grey"`, `"green"`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    pub walls: String,
    pub path: String,
    pub explored: String,
    pub markers: String,
}

impl ColorScheme {
    pub fn walls_style(&self) -> ContentStyle {
        style_of(&self.walls)
    }

    pub fn path_style(&self) -> ContentStyle {
        style_of(&self.path)
    }

    pub fn explored_style(&self) -> ContentStyle {
        style_of(&self.explored)
    }

    pub fn markers_style(&self) -> ContentStyle {
        style_of(&self.markers)
    }
}

fn style_of(name: &str) -> ContentStyle {
    let foreground_color = match Color::try_from(name) {
        Ok(color) => Some(color),
        Err(_) => {
            warn!("unknown color {:?}, using the default", name);
            None
        }
    };

    ContentStyle {
        foreground_color,
        background_color: None,
        ..Default::default()
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            walls: "white".to_string(),
            path: "green".to_string(),
            explored: "dark_grey".to_string(),
            markers: "cyan".to_string(),
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub strategy: Option<StrategyChoice>,
    #[serde(default)]
    pub path_char: Option<char>,
    #[serde(default)]
    pub color: Option<bool>,
    #[serde(default)]
    pub show_explored: Option<bool>,
    #[serde(default)]
    pub show_coords: Option<bool>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
    #[serde(default)]
    pub color_scheme: Option<ColorScheme>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_path() -> PathBuf {
        constants::settings_path()
    }

    pub fn populate(mut self) -> Self {
        self.strategy = Some(self.get_strategy());
        self.path_char = Some(self.get_path_char());
        self.color = Some(self.get_color());
        self.show_explored = Some(self.get_show_explored());
        self.show_coords = Some(self.get_show_coords());
        self.log_level = Some(self.get_log_level());
        self.color_scheme = Some(self.get_color_scheme());

        self
    }

    pub fn set_strategy(mut self, value: StrategyChoice) -> Self {
        self.strategy = Some(value);
        self
    }

    pub fn get_strategy(&self) -> StrategyChoice {
        self.strategy.unwrap_or_default()
    }

    pub fn set_path_char(mut self, value: char) -> Self {
        self.path_char = Some(value);
        self
    }

    pub fn get_path_char(&self) -> char {
        self.path_char.unwrap_or('*')
    }

    pub fn set_color(mut self, value: bool) -> Self {
        self.color = Some(value);
        self
    }

    pub fn get_color(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn set_show_explored(mut self, value: bool) -> Self {
        self.show_explored = Some(value);
        self
    }

    pub fn get_show_explored(&self) -> bool {
        self.show_explored.unwrap_or_default()
    }

    pub fn set_show_coords(mut self, value: bool) -> Self {
        self.show_coords = Some(value);
        self
    }

    pub fn get_show_coords(&self) -> bool {
        self.show_coords.unwrap_or_default()
    }

    pub fn set_log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn set_color_scheme(mut self, value: ColorScheme) -> Self {
        self.color_scheme = Some(value);
        self
    }

    pub fn get_color_scheme(&self) -> ColorScheme {
        self.color_scheme.clone().unwrap_or_default()
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, SettingsError> {
        Self::options()
            .from_str(text)
            .map_err(|source| SettingsError::Parse {
                path: path.to_owned(),
                source,
            })
    }

    /// Reads settings from `path`, creating the file with defaults if there isn't one yet.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text, path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Self::reset_config(path)?;
                Self::parse(DEFAULT_SETTINGS, path)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}
