use unicode_width::UnicodeWidthStr;

/// Columns `text` takes on screen.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Terminal rows a line of `width` columns occupies once wrapped. An empty
/// line still takes one row.
pub fn rows(width: usize, columns: u16) -> u16 {
    let columns = usize::from(columns.max(1));
    let rows = width.div_ceil(columns).max(1);
    u16::try_from(rows).unwrap_or(u16::MAX)
}
