use std::io::Write;

use crossterm::{
    cursor::{Hide, Show},
    event::KeyCode,
    queue,
};

use crate::{
    item::{label_of, Choice},
    query::{events::is_interrupt, KeySource, PromptSession, Query},
    terminal::Terminal,
    util::rows,
    Error, Result,
};

use super::ChoiceList;

/// Runs the interactive list under the prompt and returns the chosen rows.
/// The cursor is hidden while the list is up and shown again on every exit.
fn pick<W: Write, K: KeySource, T>(
    session: &PromptSession<'_>,
    choices: &[Choice<T>],
    is_many: bool,
    terminal: &mut Terminal<W>,
    keys: &mut K,
) -> Result<(Vec<usize>, u16)> {
    queue!(terminal, Hide)?;
    let result = interact(session, ChoiceList::new(choices, is_many), terminal, keys);
    queue!(terminal, Show)?;
    terminal.flush()?;
    result
}

/// Draws the prompt and its list, then tears both down. On success only the
/// prompt line is left for the answer; on any failure nothing is left.
fn interact<W: Write, K: KeySource, T>(
    session: &PromptSession<'_>,
    mut list: ChoiceList<'_, T>,
    terminal: &mut Terminal<W>,
    keys: &mut K,
) -> Result<(Vec<usize>, u16)> {
    let header = session.header(terminal)?;
    writeln!(terminal)?;
    let header_rows = rows(header, terminal.width());

    match navigate(session, &mut list, terminal, keys) {
        Ok(()) => {
            list.clear(terminal)?;
            Ok((list.get_result(), header_rows))
        }
        Err(err) => {
            list.clear(terminal)?;
            session.erase(terminal, header_rows)?;
            Err(err)
        }
    }
}

/// Handles keys until the selection is confirmed.
fn navigate<W: Write, K: KeySource, T>(
    session: &PromptSession<'_>,
    list: &mut ChoiceList<'_, T>,
    terminal: &mut Terminal<W>,
    keys: &mut K,
) -> Result<()> {
    list.show(session.theme(), terminal)?;
    loop {
        let event = keys.read_key()?;
        if is_interrupt(&event) {
            return Err(Error::Interrupted);
        }
        match event.code {
            KeyCode::Enter => {
                if list.confirm() {
                    return Ok(());
                }
            }
            KeyCode::Char(' ') if list.is_many() => {
                list.toggle();
                list.clear(terminal)?;
                list.show(session.theme(), terminal)?;
            }
            _ => {
                if list.on_key(&event) {
                    list.clear(terminal)?;
                    list.show(session.theme(), terminal)?;
                }
            }
        }
    }
}

/// Takes the values at `picked` out of `choices`, in `picked` order.
fn take_values<T>(choices: Vec<Choice<T>>, picked: &[usize]) -> Vec<T> {
    let mut slots: Vec<Option<T>> = choices
        .into_iter()
        .map(|choice| Some(choice.value))
        .collect();
    picked.iter().filter_map(|&i| slots.get_mut(i)?.take()).collect()
}

/// The answer line: chosen labels, looked up by value, joined by ", ".
fn answer<T: PartialEq>(choices: &[Choice<T>], picked: &[usize]) -> String {
    picked
        .iter()
        .filter_map(|&i| choices.get(i))
        .filter_map(|choice| label_of(choices, &choice.value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One value out of a list of choices.
pub struct SelectQuery<'a, T> {
    session: PromptSession<'a>,
    choices: Vec<Choice<T>>,
}

impl<'a, T> SelectQuery<'a, T> {
    pub(crate) fn new(session: PromptSession<'a>, choices: Vec<Choice<T>>) -> Self {
        Self { session, choices }
    }
}

impl<'a, T: PartialEq> Query for SelectQuery<'a, T> {
    type Result = T;

    fn show_on<W: Write, K: KeySource>(
        self,
        terminal: &mut Terminal<W>,
        keys: &mut K,
    ) -> Result<Self::Result> {
        let Self { session, choices } = self;

        let (picked, header_rows) = pick(&session, &choices, false, terminal, keys)?;
        session.resolve(terminal, header_rows, &answer(&choices, &picked))?;
        take_values(choices, &picked).pop().ok_or(Error::NoChoices)
    }
}

/// Any subset of a list of choices, in the order they were toggled on.
pub struct MultiSelectQuery<'a, T> {
    session: PromptSession<'a>,
    choices: Vec<Choice<T>>,
}

impl<'a, T> MultiSelectQuery<'a, T> {
    pub(crate) fn new(session: PromptSession<'a>, choices: Vec<Choice<T>>) -> Self {
        Self { session, choices }
    }
}

impl<'a, T: PartialEq> Query for MultiSelectQuery<'a, T> {
    type Result = Vec<T>;

    fn show_on<W: Write, K: KeySource>(
        self,
        terminal: &mut Terminal<W>,
        keys: &mut K,
    ) -> Result<Self::Result> {
        let Self { session, choices } = self;

        let (picked, header_rows) = pick(&session, &choices, true, terminal, keys)?;
        session.resolve(terminal, header_rows, &answer(&choices, &picked))?;
        Ok(take_values(choices, &picked))
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::{
        query::{test_support::final_frame, QueryBuilder, ScriptedEvents},
        theme::presets,
    };

    use super::*;

    #[test]
    fn single_choice_returns_value_and_label() {
        let theme = presets::ansi_256();
        let mut terminal = Terminal::new(Vec::new());
        let mut events = ScriptedEvents::new().keys([KeyCode::Down, KeyCode::Enter]);

        let value = QueryBuilder::with_theme(&theme)
            .with_icon("label")
            .with_prompt("fooo123")
            .select([("First", 1), ("Second", 2)])
            .unwrap()
            .show_on(&mut terminal, &mut events)
            .unwrap();

        assert_eq!(value, 2);
        assert_eq!(final_frame(terminal.get_ref()), ":label:  fooo123: Second\n");
    }

    #[test]
    fn multi_choice_joins_labels_in_toggle_order() {
        let theme = presets::ansi_256();
        let mut terminal = Terminal::new(Vec::new());
        let mut events = ScriptedEvents::new().keys([
            KeyCode::Char(' '),
            KeyCode::Down,
            KeyCode::Char(' '),
            KeyCode::Enter,
        ]);

        let values = QueryBuilder::with_theme(&theme)
            .with_icon("label")
            .with_prompt("foo123")
            .multi_select([("First", "a"), ("Second", "b")])
            .unwrap()
            .show_on(&mut terminal, &mut events)
            .unwrap();

        assert_eq!(values, vec!["a", "b"]);
        assert_eq!(final_frame(terminal.get_ref()), ":label:  foo123: First, Second\n");
    }

    #[test]
    fn multi_choice_ignores_enter_until_something_is_toggled() {
        let theme = presets::legacy_console();
        let mut terminal = Terminal::new(Vec::new());
        let mut events = ScriptedEvents::new().keys([
            KeyCode::Enter,
            KeyCode::Down,
            KeyCode::Char(' '),
            KeyCode::Up,
            KeyCode::Char(' '),
            KeyCode::Enter,
        ]);

        let values = QueryBuilder::with_theme(&theme)
            .with_prompt("Pick")
            .multi_select([("First", 'a'), ("Second", 'b')])
            .unwrap()
            .show_on(&mut terminal, &mut events)
            .unwrap();

        assert_eq!(values, vec!['b', 'a']);
        assert_eq!(final_frame(terminal.get_ref()), "::  Pick: Second, First\n");
    }

    #[test]
    fn confirm_maps_yes_and_no() {
        let theme = presets::ansi_256();

        let mut terminal = Terminal::new(Vec::new());
        let mut events = ScriptedEvents::new().key(KeyCode::Enter);
        let yes = QueryBuilder::with_theme(&theme)
            .with_icon("question")
            .with_prompt("Confirm")
            .confirm()
            .show_on(&mut terminal, &mut events)
            .unwrap();
        assert!(yes);
        assert_eq!(final_frame(terminal.get_ref()), ":question:  Confirm: Yes\n");

        let mut terminal = Terminal::new(Vec::new());
        let mut events = ScriptedEvents::new().keys([KeyCode::Down, KeyCode::Enter]);
        let no = QueryBuilder::with_theme(&theme)
            .with_icon("question")
            .with_prompt("Confirm")
            .confirm()
            .show_on(&mut terminal, &mut events)
            .unwrap();
        assert!(!no);
        assert_eq!(final_frame(terminal.get_ref()), ":question:  Confirm: No\n");
    }

    #[test]
    fn duplicate_values_fail_before_rendering() {
        let theme = presets::ansi_256();
        let result = QueryBuilder::with_theme(&theme)
            .with_prompt("Pick")
            .select([("X", 1), ("Y", 1)]);
        assert!(matches!(result, Err(Error::DuplicateChoice { .. })));

        let result = QueryBuilder::with_theme(&theme)
            .with_prompt("Pick")
            .multi_select(Vec::<(&str, u8)>::new());
        assert!(matches!(result, Err(Error::NoChoices)));
    }

    #[test]
    fn interrupt_clears_the_prompt_and_restores_cursor() {
        let theme = presets::ansi_256();
        let mut terminal = Terminal::new(Vec::new());
        let mut events = ScriptedEvents::new().key(KeyCode::Down).ctrl('c');

        let result = QueryBuilder::with_theme(&theme)
            .with_prompt("Pick")
            .select([("First", 1), ("Second", 2)])
            .unwrap()
            .show_on(&mut terminal, &mut events);

        assert!(matches!(result, Err(Error::Interrupted)));
        let output = String::from_utf8(terminal.into_inner()).unwrap();
        assert!(output.ends_with("\x1b[2F\x1b[J\x1b[1F\x1b[J\x1b[?25h"));
        assert_eq!(final_frame(output.as_bytes()), "");
    }

    #[test]
    fn running_out_of_keys_clears_the_prompt() {
        let theme = presets::ansi_256();
        let mut terminal = Terminal::new(Vec::new());
        let mut events = ScriptedEvents::new().key(KeyCode::Down);

        let result = QueryBuilder::with_theme(&theme)
            .with_prompt("Pick")
            .select([("First", 1), ("Second", 2)])
            .unwrap()
            .show_on(&mut terminal, &mut events);

        assert!(matches!(result, Err(Error::EndOfInput)));
        let output = String::from_utf8(terminal.into_inner()).unwrap();
        assert!(output.ends_with("\x1b[2F\x1b[J\x1b[1F\x1b[J\x1b[?25h"));
        assert_eq!(final_frame(output.as_bytes()), "");
    }

    #[test]
    fn cancelled_multi_choice_leaves_nothing() {
        let theme = presets::legacy_console();
        let mut terminal = Terminal::new(Vec::new());
        let mut events = ScriptedEvents::new().key(KeyCode::Char(' '));

        let result = QueryBuilder::with_theme(&theme)
            .with_icon("label")
            .with_prompt("Languages")
            .multi_select([("First", 'a'), ("Second", 'b'), ("Third", 'c')])
            .unwrap()
            .show_on(&mut terminal, &mut events);

        assert!(matches!(result, Err(Error::EndOfInput)));
        let output = String::from_utf8(terminal.into_inner()).unwrap();
        assert!(output.ends_with("\x1b[3F\x1b[J\x1b[1F\x1b[J\x1b[?25h"));
    }

    #[test]
    fn wrapped_prompt_rewinds_every_row() {
        let theme = presets::legacy_console();
        let mut terminal = Terminal::new(Vec::new()).with_width(10);
        let mut events = ScriptedEvents::new().key(KeyCode::Enter);

        QueryBuilder::with_theme(&theme)
            .with_icon("label")
            .with_prompt("A rather long question")
            .select([("Only", ())])
            .unwrap()
            .show_on(&mut terminal, &mut events)
            .unwrap();

        // ":label:  A rather long question:" is 32 columns, four rows at width 10.
        let output = String::from_utf8(terminal.into_inner()).unwrap();
        assert!(output.contains("\x1b[4F"));
    }
}
