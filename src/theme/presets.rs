//! Built-in themes. Each table is an exhaustive match so a new
//! [`StyleRole`] has to be styled everywhere before the crate builds.

use super::{
    AnsiTier, ColorTheme,
    ConsoleColor::{self, *},
    ConsoleStyle, StyleRole,
};

/// 256-color theme for xterm-like terminals, GitLab, TeamCity and GitHub Actions.
pub fn ansi_256() -> ColorTheme {
    ColorTheme::ansi("ansi-256", AnsiTier::Color256)
        .success("\x1b[92;1m")
        .emphasis("\x1b[38;5;45;1m")
        .styles(|role| match role {
            StyleRole::Text => "\x1b[39m",
            StyleRole::SecondaryText => "\x1b[38;5;247m",
            StyleRole::TertiaryText => "\x1b[38;5;247m",
            StyleRole::Name => "\x1b[39;1m",
            StyleRole::Invalid => "\x1b[38;5;207m",
            StyleRole::Null => "\x1b[38;5;45m",
            StyleRole::Number => "\x1b[38;5;45m",
            StyleRole::String => "\x1b[38;5;45m",
            StyleRole::Boolean => "\x1b[38;5;45m",
            StyleRole::Scalar => "\x1b[38;5;45m",
            StyleRole::LevelVerbose => "\x1b[90;1m",
            StyleRole::LevelDebug => "\x1b[39;1m",
            StyleRole::LevelInformation => "\x1b[38;5;50;1m",
            StyleRole::LevelWarning => "\x1b[38;5;214;1m",
            StyleRole::LevelError => "\x1b[38;5;196;1m",
            StyleRole::LevelFatal => "\x1b[38;5;231;1m\x1b[48;5;196m",
        })
        .build()
}

/// Tuned for the Azure Pipelines log viewer.
pub fn azure_pipelines() -> ColorTheme {
    ColorTheme::ansi("azure-pipelines", AnsiTier::TrueColor)
        .success("\x1b[32;1m")
        .emphasis("\x1b[36;1m")
        .styles(|role| match role {
            StyleRole::Text => "",
            StyleRole::SecondaryText => "\x1b[90m",
            StyleRole::TertiaryText => "\x1b[90m",
            StyleRole::Name => "\x1b[37;1m",
            StyleRole::Invalid => "\x1b[91;1m",
            StyleRole::Null => "\x1b[34;1m",
            StyleRole::Number => "\x1b[34;1m",
            StyleRole::String => "\x1b[34;1m",
            StyleRole::Boolean => "\x1b[34;1m",
            StyleRole::Scalar => "\x1b[34;1m",
            StyleRole::LevelVerbose => "\x1b[90m",
            StyleRole::LevelDebug => "\x1b[97m",
            StyleRole::LevelInformation => "\x1b[36;1m",
            StyleRole::LevelWarning => "\x1b[33;1m",
            StyleRole::LevelError => "\x1b[31;1m",
            StyleRole::LevelFatal => "\x1b[41;1m",
        })
        .build()
}

/// Tuned for the AppVeyor build console.
pub fn appveyor() -> ColorTheme {
    ColorTheme::ansi("appveyor", AnsiTier::TrueColor)
        .success("\x1b[92;1m")
        .emphasis("\x1b[36;1m")
        .styles(|role| match role {
            StyleRole::Text => "",
            StyleRole::SecondaryText => "\x1b[37;2m",
            // timestamp
            StyleRole::TertiaryText => "\x1b[37;2m",
            StyleRole::Name => "\x1b[37;1m",
            StyleRole::Invalid => "\x1b[95;1m",
            StyleRole::Null => "\x1b[34;1m",
            StyleRole::Number => "\x1b[34;1m",
            StyleRole::String => "\x1b[34;1m",
            StyleRole::Boolean => "\x1b[34;1m",
            StyleRole::Scalar => "\x1b[34;1m",
            StyleRole::LevelVerbose => "\x1b[37;2m",
            StyleRole::LevelDebug => "\x1b[98;1m",
            StyleRole::LevelInformation => "\x1b[36;1m",
            StyleRole::LevelWarning => "\x1b[33;1m",
            StyleRole::LevelError => "\x1b[31;1m",
            StyleRole::LevelFatal => "\x1b[41;1m",
        })
        .build()
}

/// Named-color theme for terminals without ANSI support.
pub fn legacy_console() -> ColorTheme {
    const fn fg(color: ConsoleColor) -> ConsoleStyle {
        ConsoleStyle::fg(color)
    }

    ColorTheme::console("legacy-console")
        .success(fg(Green))
        .emphasis(fg(Cyan))
        .styles(|role| match role {
            StyleRole::Text => ConsoleStyle::new(),
            StyleRole::SecondaryText => fg(Gray),
            StyleRole::TertiaryText => fg(Gray),
            StyleRole::Name => fg(Blue),
            StyleRole::Invalid => fg(DarkRed),
            StyleRole::Null => fg(Magenta),
            StyleRole::Number => fg(Magenta),
            StyleRole::String => fg(Magenta),
            StyleRole::Boolean => fg(Magenta),
            StyleRole::Scalar => fg(Magenta),
            StyleRole::LevelVerbose => fg(Gray),
            StyleRole::LevelDebug => ConsoleStyle::new(),
            StyleRole::LevelInformation => fg(Cyan),
            StyleRole::LevelWarning => fg(Yellow),
            StyleRole::LevelError => fg(Red),
            StyleRole::LevelFatal => fg(White).on(Red),
        })
        .build()
}
