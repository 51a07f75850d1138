//! Storage Module
//!
//! The pieces the driver is assembled from.
//!
//! ## Responsibilities
//! - Turn (collection, resource) keys into paths under the root
//! - Resolve bare vs. `.json`-suffixed resource names
//! - Encode/decode documents (tab-indented JSON)
//! - Crash-safe writes via temp file + rename
//! - Per-collection lock registry
//!
//! ## Write Path
//! ```text
//!   value ──encode──▶ {resource}.json.tmp ──rename──▶ {resource}.json
//! ```

pub mod atomic;
pub mod codec;
pub mod layout;
pub mod locks;

pub use layout::{EntryKind, Probe};
pub use locks::{CollectionLock, LockRegistry};
