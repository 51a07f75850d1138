//! Atomic File Writes
//!
//! Write-then-rename: the bytes go to `<path>.tmp` first and are renamed
//! over `<path>` in one step, so readers see either the old document or
//! the new one, never a truncated file.
//!
//! A failed rename leaves the temp file in place; the next successful
//! write to the same record truncates and reuses it.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::config::SyncStrategy;

use super::layout;

/// Permissions for created directories (rwxr-xr-x)
pub const DIR_MODE: u32 = 0o755;

/// Permissions for created record files (rw-r--r--)
pub const FILE_MODE: u32 = 0o644;

/// Create `dir` and any missing parents; a no-op if it already exists
pub fn create_dir_all(dir: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder.create(dir)
}

/// Replace `path` with `bytes` via a temp sibling and a rename
pub fn write_atomic(path: &Path, bytes: &[u8], sync: SyncStrategy) -> io::Result<()> {
    let tmp_path = layout::temp_path(path);

    {
        let mut file = open_for_write(&tmp_path)?;
        file.write_all(bytes)?;
        if sync == SyncStrategy::EveryWrite {
            file.sync_all()?;
        }
    }

    fs::rename(&tmp_path, path)?;

    if sync == SyncStrategy::EveryWrite {
        if let Some(parent) = path.parent() {
            sync_dir(parent)?;
        }
    }

    Ok(())
}

fn open_for_write(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    options.open(path)
}

/// Persist a rename by fsyncing the directory holding it
#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
