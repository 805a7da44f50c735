//! Key bindings for moving the selection and activating rows.
//!
//! - **Cursor Movement**: `↑/k` (up), `↓/j` (down)
//! - **Jump Navigation**: `g/home` (first row), `G/end` (last row)
//! - **Activation**: `enter` fires the row's data callback, `space` its element callback
//!
//! ```rust
//! use pooled_list::key::KeyMap;
//! use pooled_list::list::ListKeyMap;
//!
//! let keymap = ListKeyMap::default();
//! assert_eq!(keymap.short_help().len(), 4);
//! ```

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings handled by [`ListController::update`](super::ListController::update).
#[derive(Debug, Clone)]
pub struct ListKeyMap {
    /// Move selection up one row.
    pub cursor_up: key::Binding,
    /// Move selection down one row.
    pub cursor_down: key::Binding,
    /// Jump to the first row.
    pub go_to_start: key::Binding,
    /// Jump to the last row.
    pub go_to_end: key::Binding,
    /// Fire the selected row's data callback.
    pub send_data: key::Binding,
    /// Fire the selected row's element callback.
    pub send_element: key::Binding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            go_to_start: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "go to start"),
            go_to_end: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "go to end"),
            send_data: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "choose"),
            send_element: key::Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "open"),
        }
    }
}

impl key::KeyMap for ListKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.cursor_up,
            &self.cursor_down,
            &self.send_data,
            &self.send_element,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![
                &self.cursor_up,
                &self.cursor_down,
                &self.go_to_start,
                &self.go_to_end,
            ],
            vec![&self.send_data, &self.send_element],
        ]
    }
}
