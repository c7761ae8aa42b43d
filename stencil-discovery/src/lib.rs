//! Local file discovery for `stencil-discovery`.
//!
//! `discover(paths, recursive)` turns command-line inputs into the initial
//! [`FileRecord`] collection. A file given directly is keyed by its file
//! name; a file found under a directory (with `recursive`) is keyed by its
//! `/`-separated path relative to that directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use stencil_core::types::FileRecord;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Errors from file discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("expected file '{path}' to not be a directory (use recursive to read directories)")]
    DirectoryWithoutRecursive { path: PathBuf },

    #[error("expected file '{relative_path}' to be discovered once, but found it again at {path}")]
    DuplicatePath { relative_path: String, path: PathBuf },

    #[error("file name of '{path}' is not valid UTF-8")]
    NonUtf8Path { path: PathBuf },
}

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> DiscoveryError {
    DiscoveryError::Io {
        path: path.into(),
        source,
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Read every input in `paths`, in order, into file records.
///
/// Fails on the first unreadable input, on a directory when `recursive` is
/// off, and when two inputs resolve to the same relative path.
pub fn discover<P: AsRef<Path>>(paths: &[P], recursive: bool) -> Result<Vec<FileRecord>, DiscoveryError> {
    let mut records = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let meta = fs::metadata(path).map_err(|e| io_err(path, e))?;
        if meta.is_dir() {
            if !recursive {
                return Err(DiscoveryError::DirectoryWithoutRecursive {
                    path: path.to_path_buf(),
                });
            }
            let mut found = Vec::new();
            collect_files(path, &mut found)?;
            for file in found {
                let rel = relative_key(path, &file)?;
                records.push(read_record(rel, &file)?);
            }
        } else {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| DiscoveryError::NonUtf8Path {
                    path: path.to_path_buf(),
                })?;
            records.push(read_record(name.to_string(), path)?);
        }
    }
    ensure_unique(&records)?;
    tracing::debug!("discovered {} file(s)", records.len());
    Ok(records)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Depth-first walk, entries sorted by name within each directory.
fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), DiscoveryError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        entries.push(entry.path());
    }
    entries.sort();
    for path in entries {
        let meta = fs::metadata(&path).map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn relative_key(root: &Path, file: &Path) -> Result<String, DiscoveryError> {
    let rel = file.strip_prefix(root).unwrap_or(file);
    let mut parts = Vec::new();
    for component in rel.components() {
        let part = component
            .as_os_str()
            .to_str()
            .ok_or_else(|| DiscoveryError::NonUtf8Path {
                path: file.to_path_buf(),
            })?;
        parts.push(part);
    }
    Ok(parts.join("/"))
}

fn read_record(relative_path: String, path: &Path) -> Result<FileRecord, DiscoveryError> {
    let content = fs::read(path).map_err(|e| io_err(path, e))?;
    Ok(FileRecord::new(relative_path, path, content))
}

fn ensure_unique(records: &[FileRecord]) -> Result<(), DiscoveryError> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.original_relative_path()) {
            return Err(DiscoveryError::DuplicatePath {
                relative_path: record.original_relative_path().to_string(),
                path: record.source().to_path_buf(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
