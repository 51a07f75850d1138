//! Logger Module
//!
//! The logging capability a [`Driver`](crate::Driver) is constructed with.
//!
//! Hosts can plug in anything that implements [`Logger`]. When nothing is
//! supplied the driver falls back to [`ConsoleLogger`], which forwards
//! accepted messages to `tracing`; the host's subscriber decides where they
//! end up (the bundled CLI installs a `tracing-subscriber` fmt layer).

use std::fmt;
use std::str::FromStr;

use crate::error::FolioError;

/// Severity of a log message, ordered from least to most verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    Fatal,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fatal" => Ok(Level::Fatal),
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            "trace" => Ok(Level::Trace),
            other => Err(FolioError::Config(format!("unknown log level '{}'", other))),
        }
    }
}

/// Leveled message sink injected into the driver
///
/// Implementors only provide [`Logger::log`]; the per-severity methods
/// take `format_args!` output so callers never allocate for messages
/// that end up filtered.
pub trait Logger: Send + Sync {
    fn log(&self, level: Level, args: fmt::Arguments<'_>);

    fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Fatal, args)
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args)
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args)
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args)
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args)
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Trace, args)
    }
}

/// Default logger: drops anything more verbose than `level`, emits the
/// rest as `tracing` events under the `foliodb` target
///
/// Output only appears once the host installs a `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger {
    level: Level,
}

impl ConsoleLogger {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether a message at `level` passes the threshold
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        match level {
            Level::Fatal => tracing::error!(target: "foliodb", fatal = true, "{}", args),
            Level::Error => tracing::error!(target: "foliodb", "{}", args),
            Level::Warn => tracing::warn!(target: "foliodb", "{}", args),
            Level::Info => tracing::info!(target: "foliodb", "{}", args),
            Level::Debug => tracing::debug!(target: "foliodb", "{}", args),
            Level::Trace => tracing::trace!(target: "foliodb", "{}", args),
        }
    }
}
