use std::io::Write;

use crossterm::{
    cursor::MoveToPreviousLine,
    event::{KeyCode, KeyEvent},
    queue,
    terminal::{Clear, ClearType},
};

use crate::{
    item::{Choice, ListItem},
    style::Styler,
    terminal::Terminal,
    theme::ColorTheme,
    util::rows,
    Result,
};

/// Cursor and selection state of the list under a choice prompt.
pub struct ChoiceList<'a, T> {
    choices: &'a [Choice<T>],
    cursor: usize,
    /// Toggled rows in the order they were toggled on.
    selected: Vec<usize>,
    is_many: bool,
    last_printed_rows: u16,
}

impl<'a, T> ChoiceList<'a, T> {
    pub fn new(choices: &'a [Choice<T>], is_many: bool) -> Self {
        Self {
            choices,
            cursor: 0,
            selected: Vec::new(),
            is_many,
            last_printed_rows: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_many(&self) -> bool {
        self.is_many
    }

    pub fn show<W: Write>(&mut self, theme: &ColorTheme, f: &mut Terminal<W>) -> Result<()> {
        let mut printed_rows = 0u16;

        for (i, choice) in self.choices.iter().enumerate() {
            let item = ListItem {
                label: &choice.label,
                is_cursor: i == self.cursor,
                is_selected: self.is_many.then(|| self.selected.contains(&i)),
            };
            let width = theme.style(f, &item)?;
            writeln!(f)?;
            printed_rows = printed_rows.saturating_add(rows(width, f.width()));
        }

        self.last_printed_rows = printed_rows;
        f.flush()?;
        Ok(())
    }

    pub fn clear<W: Write>(&mut self, f: &mut Terminal<W>) -> Result<()> {
        if self.last_printed_rows > 0 {
            queue!(
                f,
                MoveToPreviousLine(self.last_printed_rows),
                Clear(ClearType::FromCursorDown),
            )?;
            self.last_printed_rows = 0;
        }
        Ok(())
    }

    /// Handles a movement key and returns `true` if redraw is required.
    pub fn on_key(&mut self, key_event: &KeyEvent) -> bool {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') if self.cursor > 0 => {
                self.cursor -= 1;
                true
            }
            KeyCode::Down | KeyCode::Char('j') if self.cursor + 1 < self.choices.len() => {
                self.cursor += 1;
                true
            }
            _ => false,
        }
    }

    /// Toggles selection state of the row under the cursor.
    pub fn toggle(&mut self) {
        match self.selected.iter().position(|&i| i == self.cursor) {
            Some(at) => {
                self.selected.remove(at);
            }
            None => self.selected.push(self.cursor),
        }
    }

    /// Settles the selection on Enter. Returns `false` while a multi-choice
    /// list has nothing toggled on.
    pub fn confirm(&mut self) -> bool {
        if self.is_many {
            !self.selected.is_empty()
        } else {
            self.selected = vec![self.cursor];
            true
        }
    }

    pub fn get_result(self) -> Vec<usize> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn choices() -> Vec<Choice<u8>> {
        vec![Choice::new("a", 1), Choice::new("b", 2), Choice::new("c", 3)]
    }

    #[test]
    fn cursor_stops_at_edges() {
        let choices = choices();
        let mut list = ChoiceList::new(&choices, false);
        assert!(!list.on_key(&key(KeyCode::Up)));
        assert!(list.on_key(&key(KeyCode::Down)));
        assert!(list.on_key(&key(KeyCode::Char('j'))));
        assert!(!list.on_key(&key(KeyCode::Down)));
        assert_eq!(list.cursor(), 2);
        assert!(list.on_key(&key(KeyCode::Char('k'))));
        assert_eq!(list.cursor(), 1);
    }

    #[test]
    fn keeps_toggle_order() {
        let choices = choices();
        let mut list = ChoiceList::new(&choices, true);
        list.on_key(&key(KeyCode::Down));
        list.on_key(&key(KeyCode::Down));
        list.toggle();
        list.on_key(&key(KeyCode::Up));
        list.on_key(&key(KeyCode::Up));
        list.toggle();
        list.on_key(&key(KeyCode::Down));
        list.toggle();
        list.toggle();
        assert!(list.confirm());
        assert_eq!(list.get_result(), vec![2, 0]);
    }

    #[test]
    fn multi_choice_needs_a_selection() {
        let choices = choices();
        let mut list = ChoiceList::new(&choices, true);
        assert!(!list.confirm());
    }

    #[test]
    fn clear_moves_over_printed_rows() {
        let theme = crate::theme::presets::legacy_console();
        let choices = choices();
        let mut list = ChoiceList::new(&choices, false);
        let mut terminal = Terminal::new(Vec::new());

        list.show(&theme, &mut terminal).unwrap();
        list.clear(&mut terminal).unwrap();

        let output = String::from_utf8(terminal.into_inner()).unwrap();
        assert!(output.ends_with("\x1b[3F\x1b[J"));
    }
}
