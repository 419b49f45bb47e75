//! How a theme draws the parts of a prompt.

use std::io::{self, Write};

use crate::{
    item::{Answer, InvalidInput, ListItem, Prompt},
    terminal::Terminal,
    theme::{ColorTheme, StyleRole},
    util::display_width,
};

/// Draws an item of kind `I`, returning the columns it took.
pub trait Styler<I> {
    fn style<W: Write>(&self, f: &mut Terminal<W>, item: I) -> io::Result<usize>;
}

impl<'a, 'b> Styler<&'a Prompt<'b>> for ColorTheme {
    fn style<W: Write>(&self, f: &mut Terminal<W>, prompt: &'a Prompt<'b>) -> io::Result<usize> {
        let icon = format!(":{}:  ", prompt.icon);
        f.write_all(icon.as_bytes())?;
        self.emphasis().write(f, prompt.text)?;
        f.write_all(b":")?;
        Ok(display_width(&icon) + display_width(prompt.text) + 1)
    }
}

impl<'a, 'b> Styler<&'a Answer<'b>> for ColorTheme {
    fn style<W: Write>(&self, f: &mut Terminal<W>, answer: &'a Answer<'b>) -> io::Result<usize> {
        write!(f, " {}", answer.0)?;
        Ok(1 + display_width(answer.0))
    }
}

impl<'a, 'b> Styler<&'a InvalidInput<'b>> for ColorTheme {
    fn style<W: Write>(
        &self,
        f: &mut Terminal<W>,
        invalid: &'a InvalidInput<'b>,
    ) -> io::Result<usize> {
        let hint = format!("'{}' is not valid", invalid.0);
        f.write_all(b" ")?;
        self.write(f, StyleRole::Invalid, &hint)?;
        Ok(1 + display_width(&hint))
    }
}

impl<'a, 'b> Styler<&'a ListItem<'b>> for ColorTheme {
    fn style<W: Write>(&self, f: &mut Terminal<W>, item: &'a ListItem<'b>) -> io::Result<usize> {
        let pointer = if item.is_cursor { "> " } else { "  " };
        let mark = match item.is_selected {
            None => "",
            Some(true) => "[x] ",
            Some(false) => "[ ] ",
        };
        write!(f, "{}{}", pointer, mark)?;
        if item.is_cursor {
            self.emphasis().write(f, item.label)?;
        } else {
            f.write_all(item.label.as_bytes())?;
        }
        Ok(pointer.len() + mark.len() + display_width(item.label))
    }
}
