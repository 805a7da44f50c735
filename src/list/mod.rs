//! Pooled list controller with composable filters.
//!
//! This module exposes [`ListController<T, V>`], which binds a sequence of items
//! onto a pool of reusable [`RowElement`](crate::row::RowElement)s and decides
//! which of them are visible by running a chain of filters.
//!
//! ## Fill cycle
//!
//! A call to [`ListController::fill_data`] moves through three steps:
//!
//! 1. **Filling**: every pooled row is hidden and cleared, then item `i` is bound
//!    to row `i`. The pool grows when there are more items than rows and never
//!    shrinks.
//! 2. **Filtering**: all filled rows start as candidates and each registered
//!    filter, in order, removes the rows it rejects.
//! 3. **Idle**: surviving rows are shown, the rest of the pool is hidden.
//!
//! Changing the search text or toggling filters repeats only the filtering step;
//! bound data is left alone.
//!
//! ## Name filter
//!
//! [`ListController::set_name_filter`] normalizes the query (trim, lowercase)
//! and registers the built-in name filter once the query is longer than
//! [`ListConfig::search_min_chars`]. An empty query removes it. The filter
//! compares against [`Item::filter_value`] using the configured [`MatchMode`].
//!
//! ## bubbletea-rs integration
//!
//! [`ListController::update`] accepts [`SearchChangedMsg`], [`ShowListMsg`] and
//! key messages, and [`ListController::view`] renders the visible rows. Embed a
//! controller in your own model and forward messages to it.

mod config;
mod filtering;
mod keys;
mod model;
mod types;


pub use config::{ListConfig, DEFAULT_SEARCH_MIN_CHARS};
pub use filtering::{FilterFn, FilterRegistry};
pub use keys::ListKeyMap;
pub use model::ListController;
pub use types::{FilterKey, Item, MatchMode, SearchChangedMsg, SearchState, ShowListMsg, Trigger};

use crate::row::RowView;
use bubbletea_rs::{Cmd, KeyMsg, Msg};

impl<T: Item + 'static, V: RowView<T> + Clone> ListController<T, V> {
    /// Handles a message from the host program.
    ///
    /// - [`SearchChangedMsg`]: updates the name filter
    /// - [`ShowListMsg`]: shows or hides every filled row
    /// - key messages: move the selection or activate the selected row, see
    ///   [`ListKeyMap`]
    ///
    /// Other messages are ignored. No command is ever returned; the signature
    /// matches the other components so the call can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_list::list::{ListController, SearchChangedMsg};
    /// use pooled_list::row::Callbacks;
    /// use pooled_list::textrow::TextRow;
    ///
    /// let mut list = ListController::with_template(TextRow::new());
    /// list.fill_data(vec!["Alice", "Bob", "Carol"], Callbacks::new());
    ///
    /// list.update(Box::new(SearchChangedMsg("carol".into())));
    /// assert_eq!(list.visible_items(), vec![&"Carol"]);
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(SearchChangedMsg(query)) = msg.downcast_ref::<SearchChangedMsg>() {
            self.set_name_filter(query);
            return None;
        }

        if let Some(ShowListMsg(show)) = msg.downcast_ref::<ShowListMsg>() {
            self.set_visibility(*show);
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.cursor_up.matches(key_msg) {
                self.select_prev();
            } else if self.keymap.cursor_down.matches(key_msg) {
                self.select_next();
            } else if self.keymap.go_to_start.matches(key_msg) {
                self.select_first();
            } else if self.keymap.go_to_end.matches(key_msg) {
                self.select_last();
            } else if self.keymap.send_data.matches(key_msg) {
                self.activate(self.cursor, Trigger::Data);
            } else if self.keymap.send_element.matches(key_msg) {
                self.activate(self.cursor, Trigger::Element);
            }
        }

        None
    }

    /// Renders every visible filled row, one per line, in pool order.
    ///
    /// The selected row is rendered with `selected = true`.
    pub fn view(&self) -> String {
        let selected = self.filtered.get(self.cursor).copied();
        self.filled_rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| row.is_visible())
            .map(|(i, row)| row.view(selected == Some(i)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
