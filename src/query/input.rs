use std::{fmt::Display, io::Write, marker::PhantomData, str::FromStr};

use crossterm::event::KeyCode;
use tracing::debug;

use crate::{
    item::InvalidInput,
    style::Styler,
    terminal::Terminal,
    util::{display_width, rows},
    Error, Result,
};

use super::{
    events::is_interrupt, KeySource, PromptSession, Query, QueryBuilder, SecretBuffer,
};

/// Asks for a line and parses it as `T`, asking again until it parses.
pub struct InputQuery<'a, T> {
    session: PromptSession<'a>,
    _value: PhantomData<fn() -> T>,
}

impl<'a, T> Query for InputQuery<'a, T>
where
    T: FromStr,
    T::Err: Display,
{
    type Result = T;

    fn show_on<W: Write, K: KeySource>(
        self,
        terminal: &mut Terminal<W>,
        keys: &mut K,
    ) -> Result<Self::Result> {
        let Self { session, .. } = self;
        let mut rejected: Option<String> = None;

        loop {
            let mut width = session.header(terminal)?;
            if let Some(input) = &rejected {
                width += session.theme().style(terminal, &InvalidInput(input))?;
            }
            terminal.write_all(b" ")?;
            terminal.flush()?;

            let input = match keys.read_line() {
                Ok(input) => input,
                Err(err) => {
                    session.rewind(terminal, rows(width + 1, terminal.width()))?;
                    terminal.flush()?;
                    return Err(err);
                }
            };
            // The terminal echoed the input after the prompt.
            let used = rows(width + 1 + display_width(&input), terminal.width());
            let input = input.trim();

            match input.parse::<T>() {
                Ok(value) => {
                    session.resolve(terminal, used, input)?;
                    return Ok(value);
                }
                Err(err) => {
                    debug!(input, %err, "rejected prompt input");
                    session.erase(terminal, used)?;
                    rejected = Some(input.to_string());
                }
            }
        }
    }
}

/// Reads a secret key by key, showing a mask instead of the text.
pub struct SecretQuery<'a> {
    session: PromptSession<'a>,
    mask: Option<char>,
}

impl<'a> SecretQuery<'a> {
    /// Character shown per typed character; `None` shows nothing.
    pub fn with_mask(self, mask: Option<char>) -> Self {
        Self { mask, ..self }
    }
}

impl<'a> Query for SecretQuery<'a> {
    type Result = String;

    fn show_on<W: Write, K: KeySource>(
        self,
        terminal: &mut Terminal<W>,
        keys: &mut K,
    ) -> Result<Self::Result> {
        let Self { session, mask } = self;
        let mut buffer = SecretBuffer::new(mask);

        let header = session.header(terminal)?;
        terminal.write_all(b" ")?;
        terminal.flush()?;
        let mut used = rows(header + 1, terminal.width());

        loop {
            let key = match keys.read_key() {
                Ok(key) if !is_interrupt(&key) => key,
                outcome => {
                    session.rewind(terminal, used)?;
                    terminal.flush()?;
                    return Err(outcome.err().unwrap_or(Error::Interrupted));
                }
            };
            if key.code == KeyCode::Enter {
                break;
            }
            if buffer.on_key(&key) {
                let masked = buffer.masked();
                session.rewind(terminal, used)?;
                session.header(terminal)?;
                write!(terminal, " {}", masked)?;
                terminal.flush()?;
                used = rows(header + 1 + display_width(&masked), terminal.width());
            }
        }

        session.rewind(terminal, used)?;
        session.finish(terminal, &buffer.masked())?;
        Ok(buffer.into_secret())
    }
}

impl<'a> QueryBuilder<'a> {
    pub fn input<T>(self) -> InputQuery<'a, T>
    where
        T: FromStr,
        T::Err: Display,
    {
        InputQuery {
            session: self.session(),
            _value: PhantomData,
        }
    }

    pub fn secret(self) -> SecretQuery<'a> {
        SecretQuery {
            session: self.session(),
            mask: Some('*'),
        }
    }
}
