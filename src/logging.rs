use std::env;

use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`error`..`trace`).
pub const LOG_ENV_VAR: &str = "OTHELLO_LOG";

struct StdoutLogger;

impl log::Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StdoutLogger = StdoutLogger;

fn level_from(value: Option<String>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Installs a stdout logger with the level from `OTHELLO_LOG`, defaulting to
/// `info`. Later calls leave the first logger in place.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV_VAR).ok());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
