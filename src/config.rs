//! Configuration for FolioDB
//!
//! Options accepted by [`Driver::open`](crate::Driver::open), with sensible defaults.

use std::fmt;
use std::sync::Arc;

use crate::logger::{Level, Logger};

/// Options for opening a driver
#[derive(Clone, Default)]
pub struct Options {
    // -------------------------------------------------------------------------
    // Logging Configuration
    // -------------------------------------------------------------------------
    /// Injected logger; `None` means a [`ConsoleLogger`](crate::logger::ConsoleLogger)
    ///
    /// The console logger only emits `tracing` events: nothing is printed
    /// unless the host installs a subscriber (e.g. `tracing_subscriber::fmt`).
    pub logger: Option<Arc<dyn Logger>>,

    /// Threshold for the default console logger (ignored when `logger` is set)
    pub log_level: Level,

    // -------------------------------------------------------------------------
    // Durability Configuration
    // -------------------------------------------------------------------------
    /// Whether writes are fsynced before and after the rename
    pub sync_strategy: SyncStrategy,
}

/// Write sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStrategy {
    /// Rely on rename atomicity alone; data may still sit in the page cache
    #[default]
    None,

    /// fsync the temp file before the rename and the directory after it
    EveryWrite,
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("logger", &self.logger.as_ref().map(|_| "<custom>"))
            .field("log_level", &self.log_level)
            .field("sync_strategy", &self.sync_strategy)
            .finish()
    }
}

impl Options {
    /// Create a new options builder
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }
}

/// Builder for Options
#[derive(Default)]
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    /// Inject a logger
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.options.logger = Some(logger);
        self
    }

    /// Set the level of the default console logger
    pub fn log_level(mut self, level: Level) -> Self {
        self.options.log_level = level;
        self
    }

    /// Set the write sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.options.sync_strategy = strategy;
        self
    }

    pub fn build(self) -> Options {
        self.options
    }
}
