//! Status messages printed to standard error.
//!
//! Standard output is reserved for command results so
//! that output can be piped into other programs.
use colored::Colorize;

const TICK: &str = "✓";
const WARN: &str = "Warning:";
const ERROR: &str = "Error:";

/// Print a success message.
pub fn success(msg: impl AsRef<str>) {
    eprintln!("{} {}", msg.as_ref().green(), TICK.green());
}

/// Print an informational message.
pub fn info(msg: impl AsRef<str>) {
    eprintln!("{}", msg.as_ref().cyan());
}

/// Print a warning message.
pub fn warn(msg: impl AsRef<str>) {
    eprintln!("{} {}", WARN.yellow(), msg.as_ref());
}

/// Print an error message for failure.
pub fn fail(msg: impl AsRef<str>) {
    eprintln!("{} {}", ERROR.red(), msg.as_ref());
}
