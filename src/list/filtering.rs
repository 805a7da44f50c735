//! Filter registry and the filtering pass.
//!
//! Filters are predicates over an item and the current [`SearchState`]. They are
//! kept in registration order under a [`FilterKey`]; a key is registered at most
//! once. A filtering pass starts from every filled row and lets each filter, in
//! order, drop the rows it rejects. Rows are then shown or hidden to match.
//!
//! The pass never touches bound data, so toggling filters is cheap and does not
//! require the caller to fill the list again.

use super::types::{FilterKey, Item, NameMatcher, SearchState};
use super::ListController;
use crate::row::{RowElement, RowView};
use std::fmt;
use std::sync::Arc;

/// A filter predicate. Returns `true` to keep the item visible.
///
/// The search state is passed at evaluation time, so predicates always see the
/// current query.
pub type FilterFn<T> = Arc<dyn Fn(&T, &SearchState) -> bool + Send + Sync>;

/// Ordered set of filters keyed by identity.
pub struct FilterRegistry<T> {
    entries: Vec<(FilterKey, FilterFn<T>)>,
}

impl<T> FilterRegistry<T> {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends `filter` under `key`.
    ///
    /// Returns `false` and leaves the registry untouched if `key` is already
    /// registered.
    pub fn register(&mut self, key: FilterKey, filter: FilterFn<T>) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.entries.push((key, filter));
        true
    }

    /// Removes the filter under `key`, keeping the order of the rest.
    ///
    /// Returns `false` if `key` was not registered.
    pub fn unregister(&mut self, key: &FilterKey) -> bool {
        match self.entries.iter().position(|(k, _)| k == key) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Returns true if a filter is registered under `key`.
    pub fn contains(&self, key: &FilterKey) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Registered keys in evaluation order.
    pub fn keys(&self) -> impl Iterator<Item = &FilterKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Number of registered filters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no filter is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Runs every filter in order over `filtered`, which holds pool indices.
    pub(super) fn retain<V>(
        &self,
        filtered: &mut Vec<usize>,
        rows: &[RowElement<T, V>],
        search: &SearchState,
    ) {
        for (key, filter) in &self.entries {
            let before = filtered.len();
            filtered.retain(|&i| {
                rows.get(i)
                    .and_then(RowElement::item)
                    .is_some_and(|item| filter(item, search))
            });
            tracing::trace!(filter = %key, before, after = filtered.len(), "filter applied");
        }
    }
}

impl<T> Default for FilterRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FilterRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}

impl<T: Item + 'static, V: RowView<T> + Clone> ListController<T, V> {
    /// Registers a filter and returns whether it was added.
    ///
    /// Registering a key that is already present is a no-op. A key built from
    /// the string `"name"` is distinct from [`FilterKey::NAME`], so it never
    /// replaces the built-in name filter. Registration does
    /// not re-filter; call [`apply_filters`](Self::apply_filters) when done
    /// toggling.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_list::list::ListController;
    /// use pooled_list::row::Callbacks;
    /// use pooled_list::textrow::TextRow;
    ///
    /// let mut list = ListController::with_template(TextRow::new());
    /// list.fill_data(vec!["ant", "bee", "cat"], Callbacks::new());
    ///
    /// list.register_filter("no-bees", |item, _| *item != "bee");
    /// list.apply_filters();
    /// assert_eq!(list.visible_items(), vec![&"ant", &"cat"]);
    /// ```
    pub fn register_filter<F>(&mut self, key: impl Into<FilterKey>, filter: F) -> bool
    where
        F: Fn(&T, &SearchState) -> bool + Send + Sync + 'static,
    {
        self.register_filter_fn(key.into(), Arc::new(filter))
    }

    /// Removes a filter and returns whether it was present.
    ///
    /// Like registration, this does not re-filter.
    pub fn unregister_filter(&mut self, key: &FilterKey) -> bool {
        let removed = self.filters.unregister(key);
        if removed {
            tracing::debug!(filter = %key, "filter unregistered");
        } else {
            tracing::trace!(filter = %key, "filter not registered, nothing to remove");
        }
        removed
    }

    /// Returns true if a filter is registered under `key`.
    pub fn is_filter_registered(&self, key: &FilterKey) -> bool {
        self.filters.contains(key)
    }

    /// The filter registry.
    pub fn filters(&self) -> &FilterRegistry<T> {
        &self.filters
    }

    /// Updates the search query and re-filters.
    ///
    /// The query is trimmed and lowercased. An empty query removes the name
    /// filter. A query longer than the configured minimum registers it. A
    /// non-empty query at or under the minimum leaves the registry as it is.
    /// A filtering pass runs in every case.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_list::list::{FilterKey, ListController};
    /// use pooled_list::row::Callbacks;
    /// use pooled_list::textrow::TextRow;
    ///
    /// let mut list = ListController::with_template(TextRow::new());
    /// list.fill_data(vec!["Alice", "Bob", "Carol"], Callbacks::new());
    ///
    /// list.set_name_filter("bo");
    /// assert!(!list.is_filter_registered(&FilterKey::NAME));
    ///
    /// list.set_name_filter(" BOB ");
    /// assert_eq!(list.visible_items(), vec![&"Bob"]);
    ///
    /// list.set_name_filter("");
    /// assert_eq!(list.visible_items().len(), 3);
    /// ```
    pub fn set_name_filter(&mut self, query: &str) {
        self.search.set_query(query);

        if self.search.query().is_empty() {
            self.unregister_filter(&FilterKey::NAME);
        } else if self.search.exceeds_threshold() && !self.filters.contains(&FilterKey::NAME) {
            let filter = self.name_filter();
            self.register_filter_fn(FilterKey::NAME, filter);
        }

        self.apply_filters();
    }

    /// Recomputes which filled rows are visible.
    ///
    /// With no filters every filled row is shown. Otherwise each filter runs in
    /// registration order and only the rows that pass all of them stay shown.
    pub fn apply_filters(&mut self) {
        self.filtered.clear();
        self.filtered.extend(0..self.filled);

        if self.filters.is_empty() {
            self.set_visibility(true);
        } else {
            self.filters
                .retain(&mut self.filtered, &self.rows, &self.search);
            self.set_visibility(false);
            for &i in &self.filtered {
                self.rows[i].set_visible(true);
            }
        }

        self.clamp_cursor();
        tracing::debug!(
            filled = self.filled,
            visible = self.filtered.len(),
            filters = self.filters.len(),
            "filters applied"
        );
    }

    fn register_filter_fn(&mut self, key: FilterKey, filter: FilterFn<T>) -> bool {
        let added = self.filters.register(key.clone(), filter);
        if added {
            tracing::debug!(filter = %key, "filter registered");
        } else {
            tracing::trace!(filter = %key, "filter already registered");
        }
        added
    }

    // The built-in name predicate. Reads the query from the search state passed
    // at evaluation time; one matcher serves every item of every pass.
    fn name_filter(&self) -> FilterFn<T> {
        let matcher = NameMatcher::new(self.match_mode);
        Arc::new(move |item: &T, search: &SearchState| {
            matcher.matches(&item.filter_value(), search.query())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always(keep: bool) -> FilterFn<u32> {
        Arc::new(move |_: &u32, _: &SearchState| keep)
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = FilterRegistry::new();
        assert!(registry.register(FilterKey::new("a"), always(true)));
        assert!(!registry.register(FilterKey::new("a"), always(false)));
        assert_eq!(registry.len(), 1);

        assert!(registry.unregister(&FilterKey::new("a")));
        assert!(!registry.contains(&FilterKey::new("a")));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_absent_is_noop() {
        let mut registry = FilterRegistry::<u32>::new();
        registry.register(FilterKey::new("a"), always(true));
        assert!(!registry.unregister(&FilterKey::new("b")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister_preserves_order() {
        let mut registry = FilterRegistry::new();
        registry.register(FilterKey::new("a"), always(true));
        registry.register(FilterKey::new("b"), always(true));
        registry.register(FilterKey::new("c"), always(true));
        registry.unregister(&FilterKey::new("b"));

        let keys: Vec<&str> = registry.keys().map(FilterKey::as_str).collect();
        assert_eq!(keys, vec!["a", "c"]);
        assert_eq!(format!("{registry:?}"), r#"[FilterKey("a"), FilterKey("c")]"#);
    }
}
