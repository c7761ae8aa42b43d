//! Stale-output classification.
//!
//! Decides, from a path alone, whether a file left in the output directory
//! looks like something a previous run wrote. Contents are never read.

use std::path::Path;

use stencil_core::types::ContentType;

/// `true` when `path` has the shape of a rendered template output.
///
/// Matches the extensions discovery treats as templates by default
/// (`.yml`, `.yaml`, `.txt`). Anything else, including extensionless files
/// and dot-directories such as `.git`, is left alone.
pub fn is_likely_template_output(path: &Path) -> bool {
    ContentType::from_path(path).is_template_by_default()
}
