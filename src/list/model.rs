//! The list controller: row pool, fill cycle, visibility and selection.

use super::config::ListConfig;
use super::filtering::FilterRegistry;
use super::keys::ListKeyMap;
use super::types::{Item, MatchMode, SearchState, Trigger};
use crate::error::ConfigError;
use crate::row::{Callbacks, RowElement, RowView};

/// A pooled, filterable list of rows.
///
/// The controller owns a pool of [`RowElement`]s that only ever grows. Each
/// [`fill_data`](Self::fill_data) binds the new items onto the pool by position,
/// creating rows from the template when the pool is too short, and then runs
/// the filters to decide which rows are shown.
///
/// Three views of the pool are maintained:
///
/// - the **pool**: every row ever created, in creation order
/// - the **filled** rows: the prefix bound by the last fill
/// - the **filtered** rows: the filled rows that pass every registered filter
///
/// # Examples
///
/// ```
/// use pooled_list::list::ListController;
/// use pooled_list::row::Callbacks;
/// use pooled_list::textrow::TextRow;
///
/// let mut list = ListController::with_template(TextRow::new());
/// list.fill_data(vec!["X", "Y"], Callbacks::new());
/// list.fill_data(vec!["A", "B", "C", "D"], Callbacks::new());
///
/// assert_eq!(list.pool_len(), 4);
/// assert_eq!(list.visible_items(), vec![&"A", &"B", &"C", &"D"]);
/// ```
#[derive(Debug)]
pub struct ListController<T, V> {
    pub(super) template: V,
    pub(super) rows: Vec<RowElement<T, V>>,
    pub(super) filled: usize,
    // Pool indices, ascending.
    pub(super) filtered: Vec<usize>,
    pub(super) filters: FilterRegistry<T>,
    pub(super) search: SearchState,
    pub(super) match_mode: MatchMode,
    pub(super) cursor: usize,
    pub(super) keymap: ListKeyMap,
}

impl<T: Item + 'static, V: RowView<T> + Clone> ListController<T, V> {
    /// Creates an empty controller that clones `template` for every new row.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` does not validate.
    pub fn new(template: V, config: ListConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(template, config))
    }

    /// Creates an empty controller with the default [`ListConfig`].
    pub fn with_template(template: V) -> Self {
        Self::from_valid_config(template, ListConfig::default())
    }

    fn from_valid_config(template: V, config: ListConfig) -> Self {
        Self {
            template,
            rows: Vec::new(),
            filled: 0,
            filtered: Vec::new(),
            filters: FilterRegistry::new(),
            search: SearchState::new(config.search_min_chars),
            match_mode: config.match_mode,
            cursor: 0,
            keymap: ListKeyMap::default(),
        }
    }

    /// Binds `items` onto the pool and re-filters.
    ///
    /// Every pooled row is hidden and cleared first. Item `i` then goes to row
    /// `i`, growing the pool when needed, with a clone of `callbacks`. Rows past
    /// the end of `items` stay hidden and unbound. An empty `items` leaves
    /// nothing visible.
    pub fn fill_data<I>(&mut self, items: I, callbacks: Callbacks<T, V>)
    where
        I: IntoIterator<Item = T>,
    {
        self.filled = 0;
        for row in &mut self.rows {
            row.clear();
            row.set_visible(false);
        }

        let pool_before = self.rows.len();
        for (i, item) in items.into_iter().enumerate() {
            if i >= self.rows.len() {
                self.rows.push(RowElement::new(self.template.clone()));
            }
            let row = &mut self.rows[i];
            row.bind(item, callbacks.clone());
            row.set_visible(true);
            self.filled = i + 1;
        }

        if self.rows.len() > pool_before {
            tracing::debug!(from = pool_before, to = self.rows.len(), "row pool grown");
        }
        tracing::debug!(filled = self.filled, pool = self.rows.len(), "list filled");

        self.apply_filters();
    }

    /// Grows the pool to at least `count` rows without binding anything.
    ///
    /// New rows start hidden and unbound. The pool never shrinks, so a smaller
    /// `count` does nothing.
    pub fn reserve_rows(&mut self, count: usize) {
        if count <= self.rows.len() {
            return;
        }
        let before = self.rows.len();
        let template = &self.template;
        self.rows
            .resize_with(count, || RowElement::new(template.clone()));
        tracing::debug!(from = before, to = count, "row pool reserved");
    }

    /// Shows or hides every filled row, ignoring filters.
    pub fn set_visibility(&mut self, show: bool) {
        for row in &mut self.rows[..self.filled] {
            row.set_visible(show);
        }
    }

    /// Fires a callback on the filtered row at `position`.
    ///
    /// Returns `false` if no filtered row exists at that position, or if that
    /// row is hidden by [`set_visibility`](Self::set_visibility).
    pub fn activate(&self, position: usize, trigger: Trigger) -> bool {
        let Some(row) = self
            .filtered
            .get(position)
            .map(|&i| &self.rows[i])
            .filter(|row| row.is_visible())
        else {
            return false;
        };
        match trigger {
            Trigger::Data => row.trigger_by_data(),
            Trigger::Element => row.trigger_by_element(),
        }
        true
    }
}

impl<T, V> ListController<T, V> {
    /// Number of rows ever created.
    pub fn pool_len(&self) -> usize {
        self.rows.len()
    }

    /// Every pooled row in creation order.
    pub fn rows(&self) -> &[RowElement<T, V>] {
        &self.rows
    }

    /// The rows bound by the last fill, in item order.
    pub fn filled_rows(&self) -> &[RowElement<T, V>] {
        &self.rows[..self.filled]
    }

    /// Number of rows bound by the last fill.
    pub fn filled_len(&self) -> usize {
        self.filled
    }

    /// Pool indices of the rows that passed the last filtering pass.
    pub fn filtered_indices(&self) -> &[usize] {
        &self.filtered
    }

    /// The rows that passed the last filtering pass, in pool order.
    pub fn filtered_rows(&self) -> impl Iterator<Item = &RowElement<T, V>> {
        self.filtered.iter().map(|&i| &self.rows[i])
    }

    /// Items of the filled rows that are currently shown.
    pub fn visible_items(&self) -> Vec<&T> {
        self.filled_rows()
            .iter()
            .filter(|row| row.is_visible())
            .filter_map(RowElement::item)
            .collect()
    }

    /// The current search state.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// How the name filter compares queries with items.
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// The template cloned for new rows.
    pub fn template(&self) -> &V {
        &self.template
    }

    /// Position of the selection among the filtered rows.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The selected filtered row, if any.
    pub fn selected_row(&self) -> Option<&RowElement<T, V>> {
        self.filtered.get(self.cursor).map(|&i| &self.rows[i])
    }

    /// The selected item, if any.
    pub fn selected_item(&self) -> Option<&T> {
        self.selected_row().and_then(RowElement::item)
    }

    /// Moves the selection down one filtered row, stopping at the last.
    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.filtered.len() {
            self.cursor += 1;
        }
    }

    /// Moves the selection up one filtered row, stopping at the first.
    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Selects the first filtered row.
    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    /// Selects the last filtered row.
    pub fn select_last(&mut self) {
        self.cursor = self.filtered.len().saturating_sub(1);
    }

    /// The key bindings used by [`update`](Self::update).
    pub fn keymap(&self) -> &ListKeyMap {
        &self.keymap
    }

    /// Mutable access to the key bindings.
    pub fn keymap_mut(&mut self) -> &mut ListKeyMap {
        &mut self.keymap
    }

    pub(super) fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.filtered.len().saturating_sub(1));
    }
}
