//! Path Layout
//!
//! Maps (collection, resource) keys onto the on-disk tree:
//!
//! ```text
//! {root}/
//!   └── {collection}/
//!         ├── {resource}.json
//!         └── {resource}.json.tmp   (only while a write is in flight)
//! ```

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

/// Extension every stored record carries
pub const RECORD_EXTENSION: &str = ".json";

/// Suffix of the sibling file a write goes through before the rename
pub const TEMP_EXTENSION: &str = ".tmp";

/// Lexically normalize a path
///
/// Collapses repeated separators, drops `.` segments and resolves `..`
/// against the preceding normal segment. `..` directly under the root is
/// dropped; leading `..` of a relative path is kept. An empty result is `.`.
/// The filesystem is never consulted, so symlinks are not resolved.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.into_iter().collect()
}

/// Join `parts` under `root` and clean the result
///
/// Empty parts are skipped, and a part starting with a separator is
/// appended rather than replacing `root` (unlike [`Path::join`]).
pub fn join(root: &Path, parts: &[&str]) -> PathBuf {
    let mut joined = OsString::from(root.as_os_str());
    for part in parts.iter().filter(|p| !p.is_empty()) {
        joined.push(MAIN_SEPARATOR_STR);
        joined.push(part);
    }
    clean_path(Path::new(&joined))
}

/// `path` with `suffix` appended to its final segment
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// `{root}/{collection}`
pub fn collection_dir(root: &Path, collection: &str) -> PathBuf {
    join(root, &[collection])
}

/// `{root}/{collection}/{resource}.json`
///
/// The extension is attached before cleaning, so a resource named `.` or
/// `..` still lands inside the collection directory.
pub fn record_path(root: &Path, collection: &str, resource: &str) -> PathBuf {
    let file_name = format!("{}{}", resource, RECORD_EXTENSION);
    join(root, &[collection, &file_name])
}

/// Registry key for a collection: the cleaned relative name, so aliases
/// like `users/` and `./users` share one lock
pub fn collection_key(collection: &str) -> String {
    clean_path(Path::new(collection)).to_string_lossy().into_owned()
}

/// `{path}.tmp`
pub fn temp_path(final_path: &Path) -> PathBuf {
    with_suffix(final_path, TEMP_EXTENSION)
}

/// What a probe found on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Exists but is neither a regular file nor a directory
    Other,
}

/// Result of a successful [`probe`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    /// The path that matched: the literal one, or the `.json` sibling
    pub path: PathBuf,

    /// True when the literal path matched
    pub literal: bool,

    pub kind: EntryKind,
}

impl Probe {
    fn from_metadata(path: PathBuf, literal: bool, meta: &fs::Metadata) -> Self {
        let kind = if meta.is_dir() {
            EntryKind::Dir
        } else if meta.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        Self { path, literal, kind }
    }

    /// The record file a read or delete of this entry acts on
    ///
    /// A literal regular file whose name already ends in `.json` is used
    /// as-is; anything else resolves to `record`, the `{resource}.json` path.
    pub fn record_file(&self, record: PathBuf) -> PathBuf {
        let named_with_extension = self
            .path
            .extension()
            .map_or(false, |ext| ext == &RECORD_EXTENSION[1..]);

        if self.literal && self.kind == EntryKind::File && named_with_extension {
            self.path.clone()
        } else {
            record
        }
    }
}

/// Two-probe existence check: `path` first, then `path.json`
///
/// Returns `Ok(None)` when neither exists. Errors other than NotFound on
/// either probe are surfaced.
pub fn probe(path: &Path) -> io::Result<Option<Probe>> {
    let suffixed = match fs::metadata(path) {
        Ok(meta) => return Ok(Some(Probe::from_metadata(path.to_path_buf(), true, &meta))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => with_suffix(path, RECORD_EXTENSION),
        Err(e) => return Err(e),
    };

    match fs::metadata(&suffixed) {
        Ok(meta) => Ok(Some(Probe::from_metadata(suffixed, false, &meta))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
