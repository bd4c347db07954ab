//! Output formatting utilities for the CLI
//!
//! This module provides the `app` report renderer, human-readable unit
//! formatting shared by the report columns, and colored status messages.

mod report;
mod units;

pub use report::{render_summary, NO_RUNNING_INSTANCES};
pub use units::{format_cpu, human_bytes};

use std::io::Write;

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::tty::IsTty;

/// Write one status line.
///
/// With `colored` the prefix and color are applied; otherwise the message
/// is written exactly as given so piped output stays parseable.
fn write_status<W: Write>(
    out: &mut W,
    colored: bool,
    color: Color,
    prefix: &str,
    msg: &str,
) -> std::io::Result<()> {
    if !colored {
        return writeln!(out, "{}", msg);
    }
    crossterm::execute!(
        out,
        SetForegroundColor(color),
        Print(prefix),
        ResetColor,
        Print(msg),
        Print("\n")
    )
}

/// Print a success message in green with a checkmark prefix
///
/// Outputs to stdout with green coloring for positive feedback to the user.
pub fn print_success(msg: &str) {
    let mut stdout = std::io::stdout();
    let colored = stdout.is_tty();
    let _ = write_status(&mut stdout, colored, Color::Green, "✓ ", msg);
}

/// Print an error message in red with an X prefix
///
/// Outputs to stderr so it never mixes with report output on stdout.
pub fn print_error(msg: &str) {
    let mut stderr = std::io::stderr();
    let colored = stderr.is_tty();
    let _ = write_status(&mut stderr, colored, Color::Red, "✗ ", msg);
}

/// Print a warning in yellow on stderr
pub fn print_warning(msg: &str) {
    let mut stderr = std::io::stderr();
    let colored = stderr.is_tty();
    let _ = write_status(&mut stderr, colored, Color::Yellow, "", msg);
}

/// Print an informational message in cyan with an info symbol prefix
pub fn print_info(msg: &str) {
    let mut stdout = std::io::stdout();
    let colored = stdout.is_tty();
    let _ = write_status(&mut stdout, colored, Color::Cyan, "ℹ ", msg);
}
