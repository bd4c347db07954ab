//! Output sinks for command results
//!
//! Commands never print directly. They write lines to an [`OutputSink`],
//! which keeps the standard and error streams apart and preserves the order
//! lines were written in.

use std::io::Write;

use crate::output::print_warning;

/// Ordered, append-only destination for command output
pub trait OutputSink {
    /// Write a line to the standard stream
    fn display_text(&mut self, line: &str);

    /// Write an empty line to the standard stream
    fn display_newline(&mut self) {
        self.display_text("");
    }

    /// Write each warning as its own line on the error stream
    fn display_warnings(&mut self, warnings: &[String]);
}

/// Sink writing to the process's stdout and stderr
#[derive(Debug, Default)]
pub struct TerminalSink;

impl TerminalSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for TerminalSink {
    fn display_text(&mut self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", line);
    }

    fn display_warnings(&mut self, warnings: &[String]) {
        for warning in warnings {
            print_warning(warning);
        }
    }
}

/// Sink that records everything in memory
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferSink {
    pub out: Vec<String>,
    pub err: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard stream joined with newlines
    pub fn stdout(&self) -> String {
        self.out.join("\n")
    }

    /// Error stream joined with newlines
    pub fn stderr(&self) -> String {
        self.err.join("\n")
    }
}

impl OutputSink for BufferSink {
    fn display_text(&mut self, line: &str) {
        self.out.push(line.to_string());
    }

    fn display_warnings(&mut self, warnings: &[String]) {
        self.err.extend(warnings.iter().cloned());
    }
}
