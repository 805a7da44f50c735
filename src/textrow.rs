//! Ready-made single-line row for any `Display` item.
//!
//! `TextRow` renders the item's `Display` output on one line, truncated to a
//! maximum display width, and styles it with Lip Gloss depending on whether the
//! row is selected.
//!
//! ```rust
//! use pooled_list::row::{Callbacks, RowElement};
//! use pooled_list::textrow::TextRow;
//!
//! let mut row = RowElement::new(TextRow::new().with_width(8));
//! row.bind("a rather long name", Callbacks::new());
//! assert_eq!(row.content().text(), "a rathe…");
//! ```

use crate::row::RowView;
use lipgloss_extras::prelude::*;
use std::fmt::Display;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Styles applied by [`TextRow`].
#[derive(Debug, Clone)]
pub struct TextRowStyles {
    /// Style for rows that are not selected.
    pub normal: Style,
    /// Style for the selected row.
    pub selected: Style,
    /// Prefix drawn before a normal row.
    pub normal_prefix: String,
    /// Prefix drawn before the selected row.
    pub selected_prefix: String,
}

impl Default for TextRowStyles {
    fn default() -> Self {
        Self {
            normal: Style::new().foreground(Color::from("#dddddd")),
            selected: Style::new().foreground(Color::from("#EE6FF8")).bold(true),
            normal_prefix: "  ".to_string(),
            selected_prefix: "> ".to_string(),
        }
    }
}

/// A single-line text row.
#[derive(Debug, Clone, Default)]
pub struct TextRow {
    text: String,
    width: usize,
    /// Styles used by [`RowView::view`].
    pub styles: TextRowStyles,
}

impl TextRow {
    /// Creates a row with no width limit and default styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits rendered text to `width` display columns. Zero means unlimited.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: TextRowStyles) -> Self {
        self.styles = styles;
        self
    }

    /// The text produced by the last render, already truncated.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The width limit, zero if unlimited.
    pub fn width(&self) -> usize {
        self.width
    }
}

impl<T: Display> RowView<T> for TextRow {
    fn render_content(&mut self, item: &T) {
        self.text = truncate(&item.to_string(), self.width);
    }

    fn view(&self, selected: bool) -> String {
        if selected {
            self.styles
                .selected
                .render(&format!("{}{}", self.styles.selected_prefix, self.text))
        } else {
            self.styles
                .normal
                .render(&format!("{}{}", self.styles.normal_prefix, self.text))
        }
    }
}

// Cuts `s` to at most `width` columns, ending with an ellipsis when cut.
fn truncate(s: &str, width: usize) -> String {
    if width == 0 || s.width() <= width {
        return s.to_string();
    }

    let budget = width.saturating_sub(ELLIPSIS.width().unwrap_or(1));
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    #[test]
    fn test_renders_display_output() {
        let mut row = TextRow::new();
        RowView::<u32>::render_content(&mut row, &42);
        assert_eq!(row.text(), "42");
    }

    #[test]
    fn test_truncate_respects_width() {
        assert_eq!(truncate("hello", 0), "hello");
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello world", 6), "hello…");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // each CJK char is two columns wide
        assert_eq!(truncate("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn test_view_marks_selection() {
        let mut row = TextRow::new();
        RowView::<&str>::render_content(&mut row, &"Bob");

        assert_eq!(plain(&RowView::<&str>::view(&row, false)), "  Bob");
        assert_eq!(plain(&RowView::<&str>::view(&row, true)), "> Bob");
    }
}
