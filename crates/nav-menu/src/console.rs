//! Console output sinks
//!
//! Human-readable lines go to the browser console in production. Native
//! tests swap in [`BufferSink`] to capture what would have been printed.

use std::cell::RefCell;
use std::rc::Rc;

/// Severity of a console line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    /// `console.log`
    Log,
    /// `console.error`
    Error,
}

/// Destination for human-readable log lines
pub trait ConsoleSink {
    /// Writes an informational line
    fn log(&self, line: &str);
    /// Writes an error line
    fn error(&self, line: &str);
}

/// Writes through `web_sys::console`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

impl ConsoleSink for BrowserConsole {
    fn log(&self, line: &str) {
        web_sys::console::log_1(&line.into());
    }

    fn error(&self, line: &str) {
        web_sys::console::error_1(&line.into());
    }
}

/// In-memory sink; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    lines: Rc<RefCell<Vec<(ConsoleLevel, String)>>>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines in write order
    #[must_use]
    pub fn lines(&self) -> Vec<(ConsoleLevel, String)> {
        self.lines.borrow().clone()
    }

    /// Captured lines of one level, text only
    #[must_use]
    pub fn lines_at(&self, level: ConsoleLevel) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text.clone())
            .collect()
    }

    fn push(&self, level: ConsoleLevel, line: &str) {
        self.lines.borrow_mut().push((level, line.to_string()));
    }
}

impl ConsoleSink for BufferSink {
    fn log(&self, line: &str) {
        self.push(ConsoleLevel::Log, line);
    }

    fn error(&self, line: &str) {
        self.push(ConsoleLevel::Error, line);
    }
}
