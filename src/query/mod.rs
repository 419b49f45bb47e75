use std::io::Write;

use crossterm::{
    cursor::{MoveToColumn, MoveToPreviousLine},
    queue,
    terminal::{Clear, ClearType},
};

use crate::{
    item::{Answer, Prompt},
    style::Styler,
    terminal::Terminal,
    theme::ColorTheme,
    Result,
};

mod events;
mod input;
mod reader;
mod select;

pub use events::*;
pub use input::*;
pub use reader::*;
pub use select::*;

pub struct QueryBuilder<'a> {
    icon: String,
    prompt: String,
    theme: &'a ColorTheme,
}

impl<'a> QueryBuilder<'a> {
    pub fn with_theme(theme: &'a ColorTheme) -> Self {
        Self {
            icon: String::new(),
            prompt: String::new(),
            theme,
        }
    }

    pub fn with_icon(self, icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            ..self
        }
    }

    pub fn with_prompt(self, prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..self
        }
    }

    fn session(self) -> PromptSession<'a> {
        PromptSession {
            icon: self.icon,
            question: self.prompt,
            theme: self.theme,
        }
    }
}

pub trait Query: Sized {
    type Result;

    fn show(self) -> Result<Self::Result> {
        self.show_on(&mut Terminal::stderr(), &mut TerminalEvents)
    }

    fn show_on<W: Write, K: KeySource>(
        self,
        terminal: &mut Terminal<W>,
        keys: &mut K,
    ) -> Result<Self::Result>;
}

/// The prompt line shared by every query: drawn first, then rewritten with
/// the answer once the query resolves.
pub struct PromptSession<'a> {
    icon: String,
    question: String,
    theme: &'a ColorTheme,
}

impl<'a> PromptSession<'a> {
    pub fn theme(&self) -> &'a ColorTheme {
        self.theme
    }

    fn prompt(&self) -> Prompt<'_> {
        Prompt {
            icon: &self.icon,
            text: &self.question,
        }
    }

    /// Draws `:icon:  question:` and returns its width.
    pub fn header<W: Write>(&self, terminal: &mut Terminal<W>) -> Result<usize> {
        Ok(self.theme.style(terminal, &self.prompt())?)
    }

    /// Clears the `rows` rows above the cursor.
    pub fn erase<W: Write>(&self, terminal: &mut Terminal<W>, rows: u16) -> Result<()> {
        if rows > 0 {
            queue!(terminal, MoveToPreviousLine(rows), Clear(ClearType::FromCursorDown))?;
        }
        Ok(())
    }

    /// Clears the line the cursor is on, including rows it wrapped onto.
    pub fn rewind<W: Write>(&self, terminal: &mut Terminal<W>, rows: u16) -> Result<()> {
        if rows > 1 {
            queue!(terminal, MoveToPreviousLine(rows - 1))?;
        }
        queue!(terminal, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;
        Ok(())
    }

    /// Rewrites the prompt line with `answer`, leaving it as the only trace
    /// of the query.
    pub fn resolve<W: Write>(
        &self,
        terminal: &mut Terminal<W>,
        rows: u16,
        answer: &str,
    ) -> Result<()> {
        self.erase(terminal, rows)?;
        self.finish(terminal, answer)
    }

    fn finish<W: Write>(&self, terminal: &mut Terminal<W>, answer: &str) -> Result<()> {
        self.header(terminal)?;
        self.theme.style(terminal, &Answer(answer))?;
        writeln!(terminal)?;
        terminal.flush()?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    /// The text after the last "move to previous line", which is what stays
    /// on screen once a query resolves.
    pub fn final_frame(output: &[u8]) -> String {
        let output = String::from_utf8_lossy(output);
        let marker = "\x1b[";
        let mut start = 0;
        let mut search = 0;
        while let Some(found) = output[search..].find(marker) {
            let at = search + found;
            let rest = &output[at + marker.len()..];
            let digits = rest.chars().take_while(char::is_ascii_digit).count();
            if digits > 0 && rest[digits..].starts_with('F') {
                start = at + marker.len() + digits + 1;
            }
            search = at + marker.len();
        }
        console::strip_ansi_codes(&output[start..]).into_owned()
    }
}
