use crate::{Error, Result};

/// Represents a prompt line.
///
/// A prompt is the icon and the question shown before the console
/// interaction starts. Once the prompt resolves, the same line is rewritten
/// with the answer appended.
#[derive(Debug, Clone, Copy)]
pub struct Prompt<'a> {
    pub icon: &'a str,
    pub text: &'a str,
}

/// The resolved answer written after the prompt.
pub struct Answer<'a>(pub &'a str);

/// A rejected text input, shown next to the prompt until a valid value is given.
pub struct InvalidInput<'a>(pub &'a str);

/// One row of a choice list.
pub struct ListItem<'a> {
    pub label: &'a str,
    pub is_cursor: bool,
    /// `None` in single-choice lists, otherwise whether the row is toggled on.
    pub is_selected: Option<bool>,
}

/// A label offered to the user and the value it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl<L: Into<String>, T> From<(L, T)> for Choice<T> {
    fn from((label, value): (L, T)) -> Self {
        Choice::new(label, value)
    }
}

/// Checks that a choice list is non-empty and that every value is distinct,
/// since the answer line is found by looking the value up.
pub fn validate<T: PartialEq>(choices: &[Choice<T>]) -> Result<()> {
    if choices.is_empty() {
        return Err(Error::NoChoices);
    }
    for (i, first) in choices.iter().enumerate() {
        if let Some(second) = choices[i + 1..].iter().find(|other| other.value == first.value) {
            return Err(Error::DuplicateChoice {
                first: first.label.clone(),
                second: second.label.clone(),
            });
        }
    }
    Ok(())
}

/// Finds the label shown for `value`.
pub fn label_of<'a, T: PartialEq>(choices: &'a [Choice<T>], value: &T) -> Option<&'a str> {
    choices
        .iter()
        .find(|choice| &choice.value == value)
        .map(|choice| choice.label.as_str())
}
