//! Terminal prompts and console color themes.
//!
//! A [`Console`] picks a [`ColorTheme`] for the environment once, then asks
//! questions (text, secret, confirm, single and multiple choice) and writes
//! themed status lines with it. Every resolved prompt leaves a single line
//! behind: `:icon:  question: answer`.

pub mod context;
pub mod error;
pub mod item;
pub mod palette;
pub mod query;
pub mod style;
pub mod terminal;
pub mod theme;
pub mod util;

pub use context::Console;
pub use error::{Error, Result};
pub use item::Choice;
pub use query::{KeySource, Query, QueryBuilder, ScriptedEvents, TerminalEvents};
pub use terminal::Terminal;
pub use theme::{AnsiTier, ColorTheme, ExtendedTheme, StyleRole, StyleSpec};
