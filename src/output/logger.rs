//! Minimal colored stderr logger for the `log` facade

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Log level for a `-v` count: 0 = warn, 1 = info, 2 = debug, 3+ = trace
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Writes records from this crate to stderr as `LEVEL message`
#[derive(Debug)]
pub struct TerminalLogger {
    level: LevelFilter,
}

impl TerminalLogger {
    #[must_use]
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for TerminalLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level && metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let label = match record.level() {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".green(),
            Level::Debug => "DEBUG".cyan(),
            Level::Trace => "TRACE".bright_black(),
        };
        eprintln!("{label} {}", record.args());
    }

    fn flush(&self) {}
}

/// Install the terminal logger as the global logger
///
/// # Errors
///
/// Returns `SetLoggerError` if a logger was already installed.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    let level = level_for(verbosity);
    log::set_boxed_logger(Box::new(TerminalLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}
