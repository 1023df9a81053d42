//! Process-wide fern logger. One line format for every sink:
//! `[<rfc3339> - LEVEL] message [file:line]`.

use crate::error::{Result as ServerErrorResult, ServerError};

use reg_config::LogLevel;

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter, info};

/// Install the logger. Writes to stdout, or appends to `log_file` when set.
/// Colors apply to stdout only.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let colors = (colored && log_file.is_none()).then(level_colors);

    let dispatch = Dispatch::new()
        .level(*log_level)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                humantime::format_rfc3339(SystemTime::now()),
                level_label(colors.as_ref(), record.level()),
                message,
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
            ))
        });

    let dispatch = match &log_file {
        Some(path) => dispatch.chain(fern::log_file(path).map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })?),
        None => dispatch.chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match log_file {
        Some(path) => info!("Logger initialized: level={}, file={}", *log_level, path.display()),
        None => info!("Logger initialized: level={}, stdout", *log_level),
    }

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

pub(crate) fn level_label(colors: Option<&ColoredLevelConfig>, level: Level) -> String {
    match colors {
        Some(colors) => colors.color(level).to_string(),
        None => level.to_string(),
    }
}
