//! Color themes mapping semantic roles to terminal styling.
//!
//! A [`ColorTheme`] is built once for a rendering [`Backend`] and read-only
//! afterwards. ANSI themes hold escape sequences, legacy console themes hold
//! named foreground/background pairs. Roles missing from a theme resolve to
//! [`StyleSpec::Plain`] and write their text unstyled.

use std::{borrow::Cow, io::Write, marker::PhantomData};

use crossterm::style::Color;

use crate::terminal::Terminal;

pub mod ansi;
pub mod console;
pub mod presets;
pub mod selector;

pub use console::ColorScope;
pub use selector::{select, CiProvider, Environment};

/// Abstract aspect of output to be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
    Text,
    SecondaryText,
    TertiaryText,
    Name,
    Invalid,
    Null,
    Number,
    String,
    Boolean,
    Scalar,
    LevelVerbose,
    LevelDebug,
    LevelInformation,
    LevelWarning,
    LevelError,
    LevelFatal,
}

impl StyleRole {
    pub const COUNT: usize = 16;

    pub const ALL: [StyleRole; StyleRole::COUNT] = [
        StyleRole::Text,
        StyleRole::SecondaryText,
        StyleRole::TertiaryText,
        StyleRole::Name,
        StyleRole::Invalid,
        StyleRole::Null,
        StyleRole::Number,
        StyleRole::String,
        StyleRole::Boolean,
        StyleRole::Scalar,
        StyleRole::LevelVerbose,
        StyleRole::LevelDebug,
        StyleRole::LevelInformation,
        StyleRole::LevelWarning,
        StyleRole::LevelError,
        StyleRole::LevelFatal,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl From<tracing::Level> for StyleRole {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => StyleRole::LevelVerbose,
            tracing::Level::DEBUG => StyleRole::LevelDebug,
            tracing::Level::INFO => StyleRole::LevelInformation,
            tracing::Level::WARN => StyleRole::LevelWarning,
            tracing::Level::ERROR => StyleRole::LevelError,
        }
    }
}

/// Terminal capability tier a theme renders for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    AnsiTrueColor,
    Ansi256,
    LegacyConsole,
}

impl Backend {
    pub fn is_ansi(self) -> bool {
        !matches!(self, Backend::LegacyConsole)
    }
}

/// The backends that render escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiTier {
    TrueColor,
    Color256,
}

impl From<AnsiTier> for Backend {
    fn from(tier: AnsiTier) -> Self {
        match tier {
            AnsiTier::TrueColor => Backend::AnsiTrueColor,
            AnsiTier::Color256 => Backend::Ansi256,
        }
    }
}

/// The sixteen named colors of a legacy system console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl From<ConsoleColor> for Color {
    fn from(color: ConsoleColor) -> Self {
        match color {
            ConsoleColor::Black => Color::Black,
            ConsoleColor::DarkBlue => Color::DarkBlue,
            ConsoleColor::DarkGreen => Color::DarkGreen,
            ConsoleColor::DarkCyan => Color::DarkCyan,
            ConsoleColor::DarkRed => Color::DarkRed,
            ConsoleColor::DarkMagenta => Color::DarkMagenta,
            ConsoleColor::DarkYellow => Color::DarkYellow,
            ConsoleColor::Gray => Color::Grey,
            ConsoleColor::DarkGray => Color::DarkGrey,
            ConsoleColor::Blue => Color::Blue,
            ConsoleColor::Green => Color::Green,
            ConsoleColor::Cyan => Color::Cyan,
            ConsoleColor::Red => Color::Red,
            ConsoleColor::Magenta => Color::Magenta,
            ConsoleColor::Yellow => Color::Yellow,
            ConsoleColor::White => Color::White,
        }
    }
}

/// Foreground/background pair for the legacy backend. `None` keeps whatever
/// the terminal currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleStyle {
    pub foreground: Option<ConsoleColor>,
    pub background: Option<ConsoleColor>,
}

impl ConsoleStyle {
    pub const fn new() -> Self {
        Self {
            foreground: None,
            background: None,
        }
    }

    pub const fn fg(color: ConsoleColor) -> Self {
        Self {
            foreground: Some(color),
            background: None,
        }
    }

    pub const fn on(self, background: ConsoleColor) -> Self {
        Self {
            background: Some(background),
            ..self
        }
    }

    /// Fills unset components from `previous`.
    pub fn or(self, previous: ConsoleStyle) -> Self {
        Self {
            foreground: self.foreground.or(previous.foreground),
            background: self.background.or(previous.background),
        }
    }
}

/// An ANSI escape sequence used as a style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiCode(pub Cow<'static, str>);

impl From<&'static str> for AnsiCode {
    fn from(code: &'static str) -> Self {
        AnsiCode(Cow::Borrowed(code))
    }
}

impl From<String> for AnsiCode {
    fn from(code: String) -> Self {
        AnsiCode(Cow::Owned(code))
    }
}

/// Concrete rendering instruction for one role under one backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StyleSpec {
    /// No styling; text is written as is.
    #[default]
    Plain,
    Ansi(Cow<'static, str>),
    Console(ConsoleStyle),
}

static PLAIN: StyleSpec = StyleSpec::Plain;

impl StyleSpec {
    pub fn is_plain(&self) -> bool {
        matches!(self, StyleSpec::Plain)
    }

    /// Writes `text` styled by this spec. Styling failures on the legacy
    /// backend degrade to unstyled output; only failures to write the text
    /// itself are returned.
    pub fn write<W: Write>(&self, terminal: &mut Terminal<W>, text: &str) -> std::io::Result<()> {
        match self {
            StyleSpec::Plain => terminal.write_all(text.as_bytes()),
            StyleSpec::Ansi(code) => ansi::write(terminal, code, text),
            StyleSpec::Console(style) => console::write(terminal, style, text),
        }
    }
}

impl From<AnsiCode> for StyleSpec {
    fn from(code: AnsiCode) -> Self {
        StyleSpec::Ansi(code.0)
    }
}

impl From<ConsoleStyle> for StyleSpec {
    fn from(style: ConsoleStyle) -> Self {
        StyleSpec::Console(style)
    }
}

/// A total mapping from [`StyleRole`] to [`StyleSpec`] for one backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTheme {
    name: Cow<'static, str>,
    backend: Backend,
    styles: [Option<StyleSpec>; StyleRole::COUNT],
    success: StyleSpec,
    emphasis: StyleSpec,
}

impl ColorTheme {
    /// Starts an ANSI theme.
    pub fn ansi(name: impl Into<Cow<'static, str>>, tier: AnsiTier) -> ThemeBuilder<AnsiCode> {
        ThemeBuilder::new(name.into(), tier.into())
    }

    /// Starts a legacy console theme.
    pub fn console(name: impl Into<Cow<'static, str>>) -> ThemeBuilder<ConsoleStyle> {
        ThemeBuilder::new(name.into(), Backend::LegacyConsole)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Returns the style for `role`, or [`StyleSpec::Plain`] if the theme has none.
    pub fn resolve(&self, role: StyleRole) -> &StyleSpec {
        self.styles[role.index()].as_ref().unwrap_or(&PLAIN)
    }

    pub fn success(&self) -> &StyleSpec {
        &self.success
    }

    /// Style of prompt questions and the focused entry of a choice list.
    pub fn emphasis(&self) -> &StyleSpec {
        &self.emphasis
    }

    /// Writes `text` with the style of `role`.
    pub fn write<W: Write>(
        &self,
        terminal: &mut Terminal<W>,
        role: StyleRole,
        text: &str,
    ) -> std::io::Result<()> {
        self.resolve(role).write(terminal, text)
    }
}

/// Builds a [`ColorTheme`] whose specs are all of kind `S`.
pub struct ThemeBuilder<S> {
    theme: ColorTheme,
    _spec: PhantomData<S>,
}

impl<S: Into<StyleSpec>> ThemeBuilder<S> {
    fn new(name: Cow<'static, str>, backend: Backend) -> Self {
        Self {
            theme: ColorTheme {
                name,
                backend,
                styles: std::array::from_fn(|_| None),
                success: StyleSpec::Plain,
                emphasis: StyleSpec::Plain,
            },
            _spec: PhantomData,
        }
    }

    pub fn success(mut self, spec: impl Into<S>) -> Self {
        self.theme.success = spec.into().into();
        self
    }

    pub fn emphasis(mut self, spec: impl Into<S>) -> Self {
        self.theme.emphasis = spec.into().into();
        self
    }

    pub fn style(mut self, role: StyleRole, spec: impl Into<S>) -> Self {
        self.theme.styles[role.index()] = Some(spec.into().into());
        self
    }

    /// Installs a spec for every role.
    pub fn styles<T: Into<S>>(self, table: impl Fn(StyleRole) -> T) -> Self {
        StyleRole::ALL
            .iter()
            .fold(self, |builder, &role| builder.style(role, table(role)))
    }

    pub fn build(self) -> ColorTheme {
        self.theme
    }
}

/// Semantic one-off status lines written outside the logging pipeline.
pub trait ExtendedTheme {
    fn resolve(&self, role: StyleRole) -> &StyleSpec;

    fn success_style(&self) -> &StyleSpec;

    /// Writes `text` with `spec` followed by a newline.
    fn write_line<W: Write>(
        &self,
        terminal: &mut Terminal<W>,
        spec: &StyleSpec,
        text: &str,
    ) -> std::io::Result<()> {
        spec.write(terminal, text)?;
        terminal.write_all(b"\n")?;
        terminal.flush()
    }

    fn write_normal<W: Write>(
        &self,
        terminal: &mut Terminal<W>,
        text: &str,
    ) -> std::io::Result<()> {
        self.write_line(terminal, self.resolve(StyleRole::LevelDebug), text)
    }

    fn write_success<W: Write>(
        &self,
        terminal: &mut Terminal<W>,
        text: &str,
    ) -> std::io::Result<()> {
        self.write_line(terminal, self.success_style(), text)
    }

    fn write_warning<W: Write>(
        &self,
        terminal: &mut Terminal<W>,
        text: &str,
    ) -> std::io::Result<()> {
        self.write_line(terminal, self.resolve(StyleRole::LevelWarning), text)
    }

    fn write_error<W: Write>(&self, terminal: &mut Terminal<W>, text: &str) -> std::io::Result<()> {
        self.write_line(terminal, self.resolve(StyleRole::LevelError), text)
    }
}

impl ExtendedTheme for ColorTheme {
    fn resolve(&self, role: StyleRole) -> &StyleSpec {
        ColorTheme::resolve(self, role)
    }

    fn success_style(&self) -> &StyleSpec {
        &self.success
    }
}
