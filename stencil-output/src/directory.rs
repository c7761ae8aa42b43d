//! Output directory reconciliation.
//!
//! ## `OutputDirectory::write`: 4-step protocol
//!
//! 1. Resolve destination paths and reject duplicates or paths that leave
//!    the root (no disk access).
//! 2. Ensure the root exists and is a directory.
//! 3. Delete every file under the root that [`is_likely_template_output`]
//!    classifies as a previous run's output. Directories are kept.
//! 4. Write each output file in order, creating parent directories.
//!
//! Each deletion and creation is announced through the [`Ui`] before it
//! happens. Nothing is rolled back on failure: a failed step 3 or 4 leaves
//! the directory partially reconciled.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use stencil_core::types::OutputFile;
use stencil_core::ui::Ui;

use crate::classify::is_likely_template_output;
use crate::error::{io_err, OutputError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// One disk operation performed by [`OutputDirectory::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// A stale output from a previous run was removed.
    Deleted { path: PathBuf },
    /// An output file was written.
    Created { path: PathBuf },
}

// ---------------------------------------------------------------------------
// OutputDirectory
// ---------------------------------------------------------------------------

/// A set of rendered files bound to the directory they replace.
pub struct OutputDirectory<'a> {
    path: PathBuf,
    files: Vec<OutputFile>,
    ui: &'a dyn Ui,
}

impl<'a> OutputDirectory<'a> {
    pub fn new(path: impl Into<PathBuf>, files: Vec<OutputFile>, ui: &'a dyn Ui) -> Self {
        OutputDirectory {
            path: path.into(),
            files,
            ui,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn files(&self) -> &[OutputFile] {
        &self.files
    }

    /// Replace stale outputs under the root with `files`.
    ///
    /// Returns the operations performed, in order.
    pub fn write(&self) -> Result<Vec<WriteResult>, OutputError> {
        let destinations = resolve_destinations(&self.files)?;
        self.ensure_root()?;

        let mut results = self.remove_old_files()?;

        for (file, relative) in self.files.iter().zip(destinations) {
            let path = self.path.join(relative);
            self.ui.print_line(&format!("creating: {}", path.display()));

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
            }
            std::fs::write(&path, file.content()).map_err(|e| io_err(&path, e))?;

            tracing::info!("wrote: {}", path.display());
            results.push(WriteResult::Created { path });
        }

        Ok(results)
    }

    fn ensure_root(&self) -> Result<(), OutputError> {
        match std::fs::metadata(&self.path) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(OutputError::NotADirectory {
                path: self.path.clone(),
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                std::fs::create_dir_all(&self.path).map_err(|e| io_err(&self.path, e))
            }
            Err(err) => Err(io_err(&self.path, err)),
        }
    }

    /// Remove every file a previous run is likely to have produced.
    ///
    /// The whole tree is listed before anything is deleted.
    fn remove_old_files(&self) -> Result<Vec<WriteResult>, OutputError> {
        let mut selected = Vec::new();
        collect_stale_files(&self.path, &mut selected)?;

        let mut results = Vec::with_capacity(selected.len());
        for path in selected {
            self.ui.print_line(&format!("deleting: {}", path.display()));
            std::fs::remove_file(&path).map_err(|e| io_err(&path, e))?;
            tracing::info!("deleted: {}", path.display());
            results.push(WriteResult::Deleted { path });
        }
        Ok(results)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fail if two files share a destination path or one leaves the root.
pub fn check_conflicts(files: &[OutputFile]) -> Result<(), OutputError> {
    resolve_destinations(files).map(|_| ())
}

/// Normalized destination of each file, in order.
fn resolve_destinations(files: &[OutputFile]) -> Result<Vec<PathBuf>, OutputError> {
    let mut seen = HashSet::new();
    let mut destinations = Vec::with_capacity(files.len());
    for file in files {
        let relative = normalize_relative(file.relative_path())?;
        if !seen.insert(relative.clone()) {
            return Err(OutputError::DuplicatePath { path: relative });
        }
        destinations.push(relative);
    }
    Ok(destinations)
}

/// Drop `.` components. Absolute paths, `..` and empty paths are rejected.
fn normalize_relative(path: &Path) -> Result<PathBuf, OutputError> {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(OutputError::OutsideRoot {
                    path: path.to_path_buf(),
                });
            }
        }
    }
    if normalized.as_os_str().is_empty() {
        return Err(OutputError::OutsideRoot {
            path: path.to_path_buf(),
        });
    }
    Ok(normalized)
}

/// Depth-first, sorted walk. Symlinks are classified by name and never
/// followed.
fn collect_stale_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), OutputError> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        entries.push(entry.path());
    }
    entries.sort();

    for path in entries {
        let meta = std::fs::symlink_metadata(&path).map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_stale_files(&path, out)?;
        } else if is_likely_template_output(&path) {
            tracing::debug!("stale output: {}", path.display());
            out.push(path);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
