//! Process configuration. The only knob is log verbosity.

use std::env;

use log::LevelFilter;

/// Names a log level: `DEBUG`, `INFO`, `WARNING`, `ERROR`, `CRITICAL`, ...
pub const LOG_ENV_VAR: &str = "TA_LOGGING";

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Map a level name to a filter. Names are case-sensitive; anything
/// unrecognized gets [`DEFAULT_LEVEL`].
pub fn level_from_name(name: Option<&str>) -> LevelFilter {
    match name {
        Some("CRITICAL" | "FATAL" | "ERROR") => LevelFilter::Error,
        Some("WARNING" | "WARN") => LevelFilter::Warn,
        Some("INFO") => LevelFilter::Info,
        Some("DEBUG") => LevelFilter::Debug,
        Some("NOTSET") => LevelFilter::Trace,
        _ => DEFAULT_LEVEL,
    }
}

/// Level selected by the environment.
pub fn log_level() -> LevelFilter {
    level_from_name(env::var(LOG_ENV_VAR).ok().as_deref())
}

/// Send log records to stderr at the configured level.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log_level())
        .init();
}
