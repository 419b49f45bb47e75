//! Legacy console backend: named colors applied for the span of a write.

use std::{
    io::{self, Write},
    ops::{Deref, DerefMut},
};

use tracing::warn;

use super::ConsoleStyle;
use crate::terminal::Terminal;

/// Applies a [`ConsoleStyle`] until dropped, then restores the colors that
/// were active when it was entered.
pub struct ColorScope<'a, W: Write> {
    terminal: &'a mut Terminal<W>,
    previous: ConsoleStyle,
}

impl<'a, W: Write> ColorScope<'a, W> {
    /// Unset components of `style` keep their previous value. A failure to
    /// apply the colors is logged and the scope is still entered.
    pub fn enter(terminal: &'a mut Terminal<W>, style: &ConsoleStyle) -> Self {
        let previous = terminal.colors();
        if let Err(err) = terminal.set_colors(style.or(previous)) {
            warn!(%err, "could not apply console colors, writing unstyled");
        }
        Self { terminal, previous }
    }
}

impl<W: Write> Deref for ColorScope<'_, W> {
    type Target = Terminal<W>;

    fn deref(&self) -> &Self::Target {
        &*self.terminal
    }
}

impl<W: Write> DerefMut for ColorScope<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.terminal
    }
}

impl<W: Write> Drop for ColorScope<'_, W> {
    fn drop(&mut self) {
        if let Err(err) = self.terminal.set_colors(self.previous) {
            warn!(%err, "could not restore console colors");
        }
    }
}

pub fn write<W: Write>(
    terminal: &mut Terminal<W>,
    style: &ConsoleStyle,
    text: &str,
) -> io::Result<()> {
    let mut scope = ColorScope::enter(terminal, style);
    scope.write_all(text.as_bytes())
}
