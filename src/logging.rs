use std::{
    io::{self, Write as _},
    sync::{
        atomic::{AtomicBool, Ordering},
        OnceLock, PoisonError, RwLock,
    },
};

use crossterm::style::{Attribute, Color, ContentStyle};
use log::{LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    // default configuration
    const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

    LOGGER.get_or_init(|| AppLogger::new(DEFAULT_LEVEL))
}

/// Installs the logger; `level` can still be changed later through [`AppLogger::set_min_level`].
pub fn init(level: LevelFilter, color: bool) -> Result<(), log::SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level);
    logger.set_color(color);

    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

#[derive(Clone, Debug)]
pub struct Message {
    pub level: log::Level,
    pub message: String,
    pub source: String,
}

impl Message {
    fn level_color(&self) -> Color {
        match self.level {
            log::Level::Error => Color::Red,
            log::Level::Warn => Color::Yellow,
            log::Level::Info => Color::White,
            log::Level::Debug => Color::Blue,
            log::Level::Trace => Color::Grey,
        }
    }

    pub fn format(&self, color: bool) -> String {
        let level = format!("{:>5}", self.level);
        if !color {
            return format!("{} {} -> {}", level, self.source, self.message);
        }

        let indicator_style = ContentStyle {
            foreground_color: Some(self.level_color()),
            ..Default::default()
        };
        let mut source_style = ContentStyle::default();
        source_style.attributes.set(Attribute::Dim);

        format!(
            "{} {} -> {}",
            indicator_style.apply(level),
            source_style.apply(&self.source),
            self.message
        )
    }
}

pub struct AppLogger {
    min_level: RwLock<LevelFilter>,
    color: AtomicBool,
}

impl AppLogger {
    fn new(min_level: LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            color: AtomicBool::new(true),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        *self
            .min_level
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        *self
            .min_level
            .write()
            .unwrap_or_else(PoisonError::into_inner) = level;
    }

    pub fn set_color(&self, color: bool) {
        self.color.store(color, Ordering::Relaxed);
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = Message {
                level: record.level(),
                message: record.args().to_string(),
                source: record.module_path().unwrap_or("unknown").to_string(),
            };

            let line = message.format(self.color.load(Ordering::Relaxed));
            let _ = writeln!(io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(level: log::Level) -> Message {
        Message {
            level,
            message: "no path leads from (0, 0) to (2, 2)".to_string(),
            source: "csolve::solver".to_string(),
        }
    }

    #[test]
    fn plain_format() {
        assert_eq!(
            message(log::Level::Warn).format(false),
            " WARN csolve::solver -> no path leads from (0, 0) to (2, 2)"
        );
    }

    #[test]
    fn colored_format_keeps_text() {
        let text = message(log::Level::Error).format(true);
        assert!(text.contains("ERROR"));
        assert!(text.contains("csolve::solver"));
        assert!(text.ends_with("-> no path leads from (0, 0) to (2, 2)"));
    }

    #[test]
    fn level_filtering() {
        let logger = AppLogger::new(LevelFilter::Warn);
        let meta = |level| Metadata::builder().level(level).target("test").build();

        assert!(logger.enabled(&meta(log::Level::Error)));
        assert!(!logger.enabled(&meta(log::Level::Info)));

        logger.set_min_level(LevelFilter::Debug);
        assert_eq!(logger.min_level(), LevelFilter::Debug);
        assert!(logger.enabled(&meta(log::Level::Debug)));
        assert!(!logger.enabled(&meta(log::Level::Trace)));
    }
}
