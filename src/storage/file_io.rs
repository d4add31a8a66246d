//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LedgerError;

/// Read JSON from a file, returning a default value if there is nothing to read
///
/// A missing file, an empty (or whitespace-only) file and a top-level JSON
/// `null` all yield `T::default()`.
pub fn read_json_or_default<T, P>(path: P) -> Result<T, LedgerError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

    if contents.trim().is_empty() {
        return Ok(T::default());
    }

    let parsed: Option<T> = serde_json::from_str(&contents)
        .map_err(|e| LedgerError::Storage(format!("Failed to parse {}: {}", path.display(), e)))?;

    Ok(parsed.unwrap_or_default())
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at all,
/// so a later read never observes a partial write.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), LedgerError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = with_suffix(path, ".tmp");

    let result = write_temp(&temp_path, data).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| LedgerError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_temp<T>(temp_path: &Path, data: &T) -> Result<(), LedgerError>
where
    T: Serialize + ?Sized,
{
    let file = File::create(temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| LedgerError::Storage(format!("Failed to serialize data: {}", e)))?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

    Ok(())
}

/// Most numbered copies `preserve_copy` will create next to one file
const MAX_PRESERVED_COPIES: u32 = 1000;

/// Copy a file aside, returning the new path
///
/// The first copy is `<name>.corrupt`; later ones are `<name>.corrupt.1`,
/// `<name>.corrupt.2`, ... An existing copy is never overwritten.
pub fn preserve_copy(path: &Path) -> Result<PathBuf, LedgerError> {
    let failed = |target: &Path, e: io::Error| {
        LedgerError::Storage(format!(
            "Failed to preserve {} as {}: {}",
            path.display(),
            target.display(),
            e
        ))
    };

    for attempt in 0..MAX_PRESERVED_COPIES {
        let target = match attempt {
            0 => with_suffix(path, ".corrupt"),
            n => with_suffix(path, &format!(".corrupt.{}", n)),
        };

        let mut copy = match OpenOptions::new().write(true).create_new(true).open(&target) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(failed(&target, e)),
        };

        let mut original = File::open(path).map_err(|e| failed(&target, e))?;
        io::copy(&mut original, &mut copy).map_err(|e| failed(&target, e))?;
        copy.sync_all().map_err(|e| failed(&target, e))?;
        return Ok(target);
    }

    Err(LedgerError::Storage(format!(
        "Too many preserved copies of {}; remove old .corrupt files",
        path.display()
    )))
}

/// `path` with `suffix` appended to its file name ("expenses.json" -> "expenses.json.tmp")
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}
