//! ANSI backend: code, text, reset.

use std::io::{self, Write};

use crate::terminal::Terminal;

/// Sequence written after every styled span.
pub const RESET: &str = "\x1b[0m";

pub fn write<W: Write>(terminal: &mut Terminal<W>, code: &str, text: &str) -> io::Result<()> {
    write!(terminal, "{}{}{}", code, text, RESET)
}
