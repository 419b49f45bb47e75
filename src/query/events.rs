use std::{collections::VecDeque, io::stdin};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use tracing::warn;

use crate::{Error, Result};

/// Where a query gets its input from.
pub trait KeySource {
    /// Blocks until the next key press.
    fn read_key(&mut self) -> Result<KeyEvent>;

    /// Reads one line, without its line ending.
    fn read_line(&mut self) -> Result<String>;
}

/// Keys from the real terminal in raw mode, lines from stdin.
pub struct TerminalEvents;

struct RawMode;

impl RawMode {
    fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!(%err, "could not leave raw mode");
        }
    }
}

impl KeySource for TerminalEvents {
    fn read_key(&mut self) -> Result<KeyEvent> {
        let _raw = RawMode::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            return Err(Error::EndOfInput);
        }
        input.truncate(input.trim_end_matches(['\n', '\r']).len());
        Ok(input)
    }
}

/// A prepared sequence of keys and lines, for running queries without a
/// terminal attached.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    keys: VecDeque<KeyEvent>,
    lines: VecDeque<String>,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, code: KeyCode) -> Self {
        self.keys.push_back(KeyEvent::new(code, KeyModifiers::NONE));
        self
    }

    pub fn keys(self, codes: impl IntoIterator<Item = KeyCode>) -> Self {
        codes.into_iter().fold(self, Self::key)
    }

    /// Queues `c` typed with Control held.
    pub fn ctrl(mut self, c: char) -> Self {
        self.keys
            .push_back(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
        self
    }

    /// Queues one key per character of `text`.
    pub fn typed(self, text: &str) -> Self {
        self.keys(text.chars().map(KeyCode::Char))
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push_back(line.into());
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.keys.is_empty() && self.lines.is_empty()
    }
}

impl KeySource for ScriptedEvents {
    fn read_key(&mut self) -> Result<KeyEvent> {
        self.keys.pop_front().ok_or(Error::EndOfInput)
    }

    fn read_line(&mut self) -> Result<String> {
        self.lines.pop_front().ok_or(Error::EndOfInput)
    }
}

/// Ctrl-C never reaches the process as a signal while in raw mode.
pub(crate) fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}
