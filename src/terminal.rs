use std::io::{self, stderr, stdout, Stderr, Stdout, Write};

use crossterm::{
    queue,
    style::{Color, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::theme::ConsoleStyle;

/// Width assumed when the real terminal size cannot be read.
pub const DEFAULT_WIDTH: u16 = 80;

/// An output handle that remembers the colors it has applied.
///
/// Terminals cannot be asked for their current colors, so the handle records
/// every color it sets. `None` means the terminal default.
pub struct Terminal<W: Write> {
    out: W,
    colors: ConsoleStyle,
    width: u16,
}

impl Terminal<Stderr> {
    pub fn stderr() -> Self {
        Self::new(stderr()).with_width(detect_width())
    }
}

impl Terminal<Stdout> {
    pub fn stdout() -> Self {
        Self::new(stdout()).with_width(detect_width())
    }
}

fn detect_width() -> u16 {
    match terminal::size() {
        Ok((width, _)) if width > 0 => width,
        _ => DEFAULT_WIDTH,
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            colors: ConsoleStyle::default(),
            width: DEFAULT_WIDTH,
        }
    }

    pub fn with_width(self, width: u16) -> Self {
        Self {
            width: width.max(1),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Colors currently applied by this handle.
    pub fn colors(&self) -> ConsoleStyle {
        self.colors
    }

    /// Applies `colors`. Each component is recorded as soon as it is written,
    /// so a failure halfway leaves the record matching the terminal.
    pub fn set_colors(&mut self, colors: ConsoleStyle) -> io::Result<()> {
        let foreground = colors.foreground.map(Color::from).unwrap_or(Color::Reset);
        queue!(self.out, SetForegroundColor(foreground))?;
        self.colors.foreground = colors.foreground;

        let background = colors.background.map(Color::from).unwrap_or(Color::Reset);
        queue!(self.out, SetBackgroundColor(background))?;
        self.colors.background = colors.background;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Write for Terminal<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
