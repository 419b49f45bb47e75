//! Console context computed once per process

use std::{fmt::Display, io, str::FromStr};

use crate::{
    item::Choice,
    query::{Query, QueryBuilder},
    terminal::Terminal,
    theme::{select, ColorTheme, Environment, ExtendedTheme},
    Result,
};

/// The detected environment and the theme chosen for it.
///
/// Build it once at startup and pass it by reference; the theme is never
/// re-selected, even if the environment changes later.
#[derive(Debug, Clone)]
pub struct Console {
    environment: Environment,
    theme: ColorTheme,
}

impl Console {
    /// Read the process environment and select a theme
    pub fn detect() -> Self {
        Self::with_environment(Environment::from_env())
    }

    pub fn with_environment(environment: Environment) -> Self {
        let theme = select(&environment);
        Self { environment, theme }
    }

    /// Override the selected theme
    pub fn with_theme(self, theme: ColorTheme) -> Self {
        Self { theme, ..self }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn theme(&self) -> &ColorTheme {
        &self.theme
    }

    /// Start a query with this console's theme
    pub fn query(&self, icon: &str, prompt: &str) -> QueryBuilder<'_> {
        QueryBuilder::with_theme(&self.theme)
            .with_icon(icon)
            .with_prompt(prompt)
    }

    /// Ask for a value, re-asking until the input parses
    pub fn prompt<T>(&self, icon: &str, prompt: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.query(icon, prompt).input().show()
    }

    /// Ask for a secret, shown masked
    pub fn secret(&self, icon: &str, prompt: &str) -> Result<String> {
        self.query(icon, prompt).secret().show()
    }

    pub fn confirm(&self, icon: &str, prompt: &str) -> Result<bool> {
        self.query(icon, prompt).confirm().show()
    }

    pub fn choice<T, C>(
        &self,
        icon: &str,
        prompt: &str,
        choices: impl IntoIterator<Item = C>,
    ) -> Result<T>
    where
        T: PartialEq,
        C: Into<Choice<T>>,
    {
        self.query(icon, prompt).select(choices)?.show()
    }

    pub fn multi_choice<T, C>(
        &self,
        icon: &str,
        prompt: &str,
        choices: impl IntoIterator<Item = C>,
    ) -> Result<Vec<T>>
    where
        T: PartialEq,
        C: Into<Choice<T>>,
    {
        self.query(icon, prompt).multi_select(choices)?.show()
    }

    pub fn write_normal(&self, text: &str) -> io::Result<()> {
        self.theme.write_normal(&mut Terminal::stdout(), text)
    }

    pub fn write_success(&self, text: &str) -> io::Result<()> {
        self.theme.write_success(&mut Terminal::stdout(), text)
    }

    pub fn write_warning(&self, text: &str) -> io::Result<()> {
        self.theme.write_warning(&mut Terminal::stdout(), text)
    }

    pub fn write_error(&self, text: &str) -> io::Result<()> {
        self.theme.write_error(&mut Terminal::stdout(), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        theme::{presets, Backend, CiProvider},
        Error,
    };

    #[test]
    fn selects_theme_for_environment() {
        let console = Console::with_environment(Environment {
            ci: Some(CiProvider::AppVeyor),
            term: None,
        });
        assert_eq!(console.theme().name(), "appveyor");
        assert_eq!(console.environment().ci, Some(CiProvider::AppVeyor));
    }

    #[test]
    fn theme_can_be_overridden() {
        let console =
            Console::with_environment(Environment::default()).with_theme(presets::ansi_256());
        assert_eq!(console.theme().backend(), Backend::Ansi256);
    }

    #[test]
    fn detect_is_stable() {
        assert_eq!(Console::detect().theme(), Console::detect().theme());
    }

    #[test]
    fn bad_choices_fail_without_a_terminal() {
        let console = Console::with_environment(Environment::default());

        let err = console.choice("label", "Pick", [("X", 1), ("Y", 1)]).unwrap_err();
        assert!(err.is_configuration());

        let err = console
            .multi_choice("label", "Pick", Vec::<(&str, u8)>::new())
            .unwrap_err();
        assert!(matches!(err, Error::NoChoices));
    }
}
