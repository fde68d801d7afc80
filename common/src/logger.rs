use chrono::Local;
use colored::Colorize;
use fern::Dispatch;
use log::{Level, LevelFilter};
use std::fmt::Display;
use std::fs::{OpenOptions, create_dir_all};
use std::path::Path;

/// Maps a textual level to a filter. Unknown names fall back to `Info`.
pub fn parse_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Renders one log line as `<timestamp> <LEVEL> <target>: <message>`.
///
/// `ansi` colours the level; the file sink passes `false` so the log stays greppable.
fn format_line(timestamp: &str, level: Level, target: &str, message: impl Display, ansi: bool) -> String {
    let label = format!("{:<5}", level);
    let label = if ansi {
        match level {
            Level::Error => label.red().bold().to_string(),
            Level::Warn => label.yellow().to_string(),
            Level::Info => label.green().to_string(),
            Level::Debug => label.cyan().to_string(),
            Level::Trace => label.dimmed().to_string(),
        }
    } else {
        label
    };
    format!("{timestamp} {label} {target}: {message}")
}

/// Installs the global logger.
///
/// Stdout carries the grading report, so console logs go to stderr (coloured) and a plain
/// copy is appended to `log_file_path`.
pub fn init_logger(log_level: &str, log_file_path: &str) -> Result<(), fern::InitError> {
    if let Some(parent) = Path::new(log_file_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            create_dir_all(parent)?;
        }
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    let console = Dispatch::new()
        .format(|out, message, record| {
            let now = Local::now().format("%H:%M:%S").to_string();
            out.finish(format_args!(
                "{}",
                format_line(&now, record.level(), record.target(), message, true)
            ))
        })
        .chain(std::io::stderr());

    let file = Dispatch::new()
        .format(|out, message, record| {
            let now = Local::now().format("%Y-%m-%dT%H:%M:%S%:z").to_string();
            out.finish(format_args!(
                "{}",
                format_line(&now, record.level(), record.target(), message, false)
            ))
        })
        .chain(log_file);

    Dispatch::new()
        .level(parse_level(log_level))
        .chain(console)
        .chain(file)
        .apply()?;

    Ok(())
}
