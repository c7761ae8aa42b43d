//! Progress sink shared by the pipeline stages.

use std::cell::RefCell;
use std::io::Write;

/// Line and byte sink for user-facing output.
///
/// Fire-and-forget: implementations swallow their own write failures.
pub trait Ui {
    /// Print one line; a trailing newline is added.
    fn print_line(&self, line: &str);

    /// Print raw bytes exactly as given.
    fn print_bytes(&self, bytes: &[u8]);
}

/// Writes to the process's stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutUi;

impl Ui for StdoutUi {
    fn print_line(&self, line: &str) {
        write_logged(&mut std::io::stdout().lock(), format!("{line}\n").as_bytes());
    }

    fn print_bytes(&self, bytes: &[u8]) {
        write_logged(&mut std::io::stdout().lock(), bytes);
    }
}

/// Write and flush `bytes`, logging instead of returning a failure.
fn write_logged(out: &mut impl Write, bytes: &[u8]) -> bool {
    match out.write_all(bytes).and_then(|()| out.flush()) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!("stdout write failed: {err}");
            false
        }
    }
}

/// Captures everything in memory. Used by tests.
#[derive(Debug, Default)]
pub struct MemoryUi {
    lines: RefCell<Vec<String>>,
    bytes: RefCell<Vec<u8>>,
}

impl MemoryUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines printed so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Bytes printed so far.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.borrow().clone()
    }
}

impl Ui for MemoryUi {
    fn print_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }

    fn print_bytes(&self, bytes: &[u8]) {
        self.bytes.borrow_mut().extend_from_slice(bytes);
    }
}
