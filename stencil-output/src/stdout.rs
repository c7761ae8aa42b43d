//! Stdout output mode: print every rendered file as one document stream.

use stencil_core::types::OutputFile;
use stencil_core::ui::Ui;

const DOCUMENT_SEPARATOR: &[u8] = b"---\n";

/// Print `files` through `ui` in order.
///
/// Consecutive files are separated by a `---` line; each is terminated with
/// a newline if it does not already end with one. Empty files print nothing
/// but their separator.
pub fn print_files(files: &[OutputFile], ui: &dyn Ui) {
    ui.print_bytes(&combined_bytes(files));
}

pub(crate) fn combined_bytes(files: &[OutputFile]) -> Vec<u8> {
    let mut out = Vec::new();
    for (i, file) in files.iter().enumerate() {
        if i > 0 {
            out.extend_from_slice(DOCUMENT_SEPARATOR);
        }
        let content = file.content();
        out.extend_from_slice(content);
        if !content.is_empty() && !content.ends_with(b"\n") {
            out.push(b'\n');
        }
    }
    out
}
