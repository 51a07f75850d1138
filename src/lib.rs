//! # FolioDB
//!
//! A tiny document store that keeps each record as a standalone JSON file:
//! - Collections are directories, resources are `<name>.json` files
//! - Crash-safe writes through a temp file and an atomic rename
//! - Per-collection locking for writers, lock-free readers
//! - Injectable leveled logger
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Driver                              │
//! │          write / read / read_all / delete                    │
//! └──────────┬──────────────────┬──────────────────┬────────────┘
//!            │                  │                  │
//!            ▼                  ▼                  ▼
//!   ┌────────────────┐  ┌───────────────┐  ┌───────────────┐
//!   │  LockRegistry  │  │    Layout     │  │     Codec     │
//!   │ (per collection│  │ (paths, probe)│  │ (tab-indented │
//!   │     Mutex)     │  │               │  │     JSON)     │
//!   └────────────────┘  └───────┬───────┘  └───────────────┘
//!                               │
//!                               ▼
//!                       ┌───────────────┐
//!                       │ Atomic writes │
//!                       │ (tmp+rename)  │
//!                       └───────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use foliodb::Driver;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct User {
//!     name: String,
//!     age: String,
//! }
//!
//! let db = Driver::open_path("./data").unwrap();
//! db.write("users", "arnab", &User { name: "Arnab".into(), age: "29".into() }).unwrap();
//! let user: User = db.read("users", "arnab").unwrap();
//! db.delete("users", "arnab").unwrap();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod logger;

pub mod storage;
pub mod driver;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FolioError, Result};
pub use config::{Options, SyncStrategy};
pub use logger::{ConsoleLogger, Level, Logger};
pub use driver::Driver;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FolioDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
