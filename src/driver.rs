//! Driver Module
//!
//! The storage handle bound to one root directory.
//!
//! ## Responsibilities
//! - Map (collection, resource) keys to JSON files under the root
//! - Serialize writers and deleters per collection
//! - Crash-safe writes (temp file + rename)
//! - Resolve bare vs. `.json`-suffixed resource names on read/delete

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{Options, SyncStrategy};
use crate::error::{FolioError, Result};
use crate::logger::{ConsoleLogger, Logger};
use crate::storage::{atomic, codec, layout, EntryKind, LockRegistry};

/// The main storage handle
///
/// ## Concurrency Model: per-collection writers, lock-free readers
///
/// - **Writes / deletes**: hold the collection's lock for the whole call
///   - One writer or deleter per collection at a time
///   - Different collections proceed in parallel
///   - The registry lock is only held while looking up the collection lock
///
/// - **Reads** (read/read_all): take no lock
///   - May run next to an in-flight write on the same collection
///   - The rename in the write path means they see the old document or the
///     new one, never a partial file
///
/// Nothing coordinates separate processes sharing a root.
pub struct Driver {
    /// Cleaned root directory, fixed at open
    root: PathBuf,

    /// Collection name → exclusive lock (grows, never shrinks)
    locks: LockRegistry,

    /// Injected or default logger
    logger: Arc<dyn Logger>,

    /// fsync behaviour of the write path
    sync_strategy: SyncStrategy,
}

impl Driver {
    /// Open a driver rooted at `path`
    ///
    /// The path is cleaned lexically. A missing root is created together
    /// with its parents; an existing one is left untouched.
    pub fn open(path: impl AsRef<Path>, options: Options) -> Result<Self> {
        let root = layout::clean_path(path.as_ref());

        let logger: Arc<dyn Logger> = match options.logger {
            Some(logger) => logger,
            None => Arc::new(ConsoleLogger::new(options.log_level)),
        };

        let driver = Self {
            root,
            locks: LockRegistry::new(),
            logger,
            sync_strategy: options.sync_strategy,
        };

        // Any stat failure counts as "not there yet"; create_dir_all
        // reports the real problem if there is one
        if fs::metadata(&driver.root).is_ok() {
            driver.logger.debug(format_args!(
                "Using '{}' (database already exists)",
                driver.root.display()
            ));
            return Ok(driver);
        }

        driver.logger.debug(format_args!(
            "Creating the database at '{}'...",
            driver.root.display()
        ));
        atomic::create_dir_all(&driver.root)?;

        Ok(driver)
    }

    /// Open with default options (console logger at INFO)
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(path, Options::default())
    }

    /// Store `value` as `{root}/{collection}/{resource}.json`
    ///
    /// Steps:
    /// 1. Acquire the collection lock
    /// 2. Create the collection directory if missing
    /// 3. Encode as tab-indented JSON
    /// 4. Write `{resource}.json.tmp`, then rename it over the record
    ///
    /// The lock is keyed by the cleaned collection name, so `users`,
    /// `users/` and `./users` serialize against each other.
    pub fn write<T>(&self, collection: &str, resource: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        if collection.is_empty() {
            return Err(FolioError::validation("missing collection - no place to save record"));
        }
        if resource.is_empty() {
            return Err(FolioError::validation(
                "missing resource - unable to save record (no name)",
            ));
        }

        let lock = self.locks.get_or_create(&layout::collection_key(collection));
        let _guard = lock.lock();

        let dir = layout::collection_dir(&self.root, collection);
        let final_path = layout::record_path(&self.root, collection, resource);

        atomic::create_dir_all(&dir)?;
        let bytes = codec::encode(value)?;
        atomic::write_atomic(&final_path, &bytes, self.sync_strategy)?;

        self.logger.trace(format_args!(
            "wrote {} bytes to '{}'",
            bytes.len(),
            final_path.display()
        ));
        Ok(())
    }

    /// Read a record and decode it into `T`
    pub fn read<T: DeserializeOwned>(&self, collection: &str, resource: &str) -> Result<T> {
        let text = self.read_raw(collection, resource)?;
        codec::decode(&text)
    }

    /// Read a record's raw document text
    ///
    /// `resource` may be given bare or with its `.json` extension.
    pub fn read_raw(&self, collection: &str, resource: &str) -> Result<String> {
        if collection.is_empty() {
            return Err(FolioError::validation("missing collection - unable to read"));
        }
        if resource.is_empty() {
            return Err(FolioError::validation(
                "missing resource - unable to read record (no name)",
            ));
        }

        let target = layout::join(&self.root, &[collection, resource]);
        let probe = layout::probe(&target)?.ok_or_else(|| FolioError::NotFound(target.clone()))?;

        let record = layout::record_path(&self.root, collection, resource);
        Ok(fs::read_to_string(probe.record_file(record))?)
    }

    /// Read every file in a collection as raw text
    ///
    /// Entries are returned sorted by file name. Nothing is filtered: a
    /// stray `.tmp` file is returned like any record. The first unreadable
    /// entry fails the whole call.
    pub fn read_all(&self, collection: &str) -> Result<Vec<String>> {
        if collection.is_empty() {
            return Err(FolioError::validation("missing collection - unable to read"));
        }

        let dir = layout::collection_dir(&self.root, collection);
        if layout::probe(&dir)?.is_none() {
            return Err(FolioError::NotFound(dir));
        }

        let mut entries = fs::read_dir(&dir)?.collect::<std::io::Result<Vec<_>>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        let mut records = Vec::with_capacity(entries.len());
        for entry in entries {
            records.push(fs::read_to_string(entry.path())?);
        }
        Ok(records)
    }

    /// [`read_all`](Self::read_all), decoding each document into `T`
    pub fn read_all_as<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        self.read_all(collection)?
            .iter()
            .map(|text| codec::decode(text))
            .collect()
    }

    /// Delete a record, or a whole directory
    ///
    /// Shares the collection lock with [`write`](Self::write). The target
    /// is resolved like a read. If it is a directory it is removed with
    /// everything under it, so an empty `resource` deletes the entire
    /// collection.
    pub fn delete(&self, collection: &str, resource: &str) -> Result<()> {
        if collection.is_empty() {
            return Err(FolioError::validation("missing collection - unable to delete"));
        }

        let lock = self.locks.get_or_create(&layout::collection_key(collection));
        let _guard = lock.lock();

        let target = layout::join(&self.root, &[collection, resource]);
        let probe = match layout::probe(&target) {
            Ok(Some(probe)) => probe,
            _ => return Err(FolioError::NotFound(target)),
        };

        match probe.kind {
            EntryKind::Dir => {
                fs::remove_dir_all(&probe.path)?;
                self.logger.trace(format_args!(
                    "removed directory tree '{}'",
                    probe.path.display()
                ));
            }
            EntryKind::File => {
                let record = layout::record_path(&self.root, collection, resource);
                let file = probe.record_file(record);
                fs::remove_file(&file)?;
                self.logger.trace(format_args!("removed '{}'", file.display()));
            }
            EntryKind::Other => {}
        }

        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The cleaned root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }

    pub fn sync_strategy(&self) -> SyncStrategy {
        self.sync_strategy
    }

    /// Number of collections that have been written to or deleted from
    pub fn lock_count(&self) -> usize {
        self.locks.len()
    }
}

impl std::fmt::Debug for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Driver")
            .field("root", &self.root)
            .field("collections_locked", &self.locks.len())
            .field("sync_strategy", &self.sync_strategy)
            .finish()
    }
}
