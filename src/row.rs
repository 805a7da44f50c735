//! Pooled row elements.
//!
//! A [`RowElement`] is one reusable slot of a list. It holds the item it is
//! currently bound to, the callbacks the host registered for it, and a
//! [`RowView`] that turns the item into something drawable. Rows are never
//! destroyed while their list lives: a fill cycle clears them and binds them
//! again.
//!
//! ```rust
//! use pooled_list::row::{Callbacks, RowElement};
//! use pooled_list::textrow::TextRow;
//! use std::sync::{Arc, Mutex};
//!
//! let picked = Arc::new(Mutex::new(None));
//! let sink = Arc::clone(&picked);
//!
//! let mut row = RowElement::new(TextRow::new());
//! row.bind(
//!     "Alice".to_string(),
//!     Callbacks::new().on_data(move |name: &String| {
//!         *sink.lock().unwrap() = Some(name.clone());
//!     }),
//! );
//! row.trigger_by_data();
//! assert_eq!(picked.lock().unwrap().as_deref(), Some("Alice"));
//! ```

use std::fmt;
use std::sync::Arc;

/// Callback receiving the item bound to a row.
pub type DataCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Callback receiving the row itself.
pub type ElementCallback<T, V> = Arc<dyn Fn(&RowElement<T, V>) + Send + Sync>;

/// Parameterless action fired after either callback.
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// Visual representation of a row.
///
/// Implement this for each kind of row a list shows. The list clones a template
/// value whenever its pool needs another row, so implementors are usually cheap
/// to clone.
pub trait RowView<T> {
    /// Projects `item` into the visual representation.
    ///
    /// Called on every bind. Must be idempotent: rendering the same item twice
    /// leaves the same result.
    fn render_content(&mut self, item: &T);

    /// Returns the current visual representation.
    ///
    /// After a row is cleared this still shows the last rendered item until the
    /// next bind.
    fn view(&self, selected: bool) -> String;
}

/// The callbacks a row carries between binds.
///
/// Every callback is optional. Binding a row replaces its whole callback set, so
/// anything left out here is removed from the row.
pub struct Callbacks<T, V> {
    on_data: Option<DataCallback<T>>,
    on_element: Option<ElementCallback<T, V>>,
    extra_action: Option<Action>,
}

impl<T, V> Callbacks<T, V> {
    /// An empty callback set.
    pub fn new() -> Self {
        Self {
            on_data: None,
            on_element: None,
            extra_action: None,
        }
    }

    /// Sets the callback fired by [`RowElement::trigger_by_data`].
    pub fn on_data(mut self, f: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_data = Some(Arc::new(f));
        self
    }

    /// Sets the callback fired by [`RowElement::trigger_by_element`].
    pub fn on_element(mut self, f: impl Fn(&RowElement<T, V>) + Send + Sync + 'static) -> Self {
        self.on_element = Some(Arc::new(f));
        self
    }

    /// Sets the action fired after either trigger.
    pub fn extra_action(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.extra_action = Some(Arc::new(f));
        self
    }

    /// Returns true if no callback is set.
    pub fn is_empty(&self) -> bool {
        self.on_data.is_none() && self.on_element.is_none() && self.extra_action.is_none()
    }
}

impl<T, V> Default for Callbacks<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impl: deriving would require `T: Clone` and `V: Clone`.
impl<T, V> Clone for Callbacks<T, V> {
    fn clone(&self) -> Self {
        Self {
            on_data: self.on_data.clone(),
            on_element: self.on_element.clone(),
            extra_action: self.extra_action.clone(),
        }
    }
}

impl<T, V> fmt::Debug for Callbacks<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_data", &self.on_data.is_some())
            .field("on_element", &self.on_element.is_some())
            .field("extra_action", &self.extra_action.is_some())
            .finish()
    }
}

/// One reusable slot of a pooled list.
pub struct RowElement<T, V> {
    item: Option<T>,
    callbacks: Callbacks<T, V>,
    content: V,
    visible: bool,
}

impl<T, V: RowView<T>> RowElement<T, V> {
    /// Creates an unbound, hidden row around `content`.
    pub fn new(content: V) -> Self {
        Self {
            item: None,
            callbacks: Callbacks::new(),
            content,
            visible: false,
        }
    }

    /// Binds `item` and `callbacks` to this row and re-renders it.
    ///
    /// Any previous binding is overwritten, callbacks included.
    pub fn bind(&mut self, item: T, callbacks: Callbacks<T, V>) {
        self.callbacks = callbacks;
        let item = self.item.insert(item);
        self.content.render_content(item);
    }

    /// Drops the bound item and every callback.
    ///
    /// The visual content keeps showing the last item until the next bind.
    pub fn clear(&mut self) {
        self.item = None;
        self.callbacks = Callbacks::new();
    }

    /// Fires the data callback with the bound item, then the extra action.
    ///
    /// The data callback is skipped when nothing is bound.
    pub fn trigger_by_data(&self) {
        if let (Some(on_data), Some(item)) = (&self.callbacks.on_data, &self.item) {
            on_data(item);
        }
        if let Some(action) = &self.callbacks.extra_action {
            action();
        }
    }

    /// Fires the element callback with this row, then the extra action.
    pub fn trigger_by_element(&self) {
        if let Some(on_element) = &self.callbacks.on_element {
            on_element(self);
        }
        if let Some(action) = &self.callbacks.extra_action {
            action();
        }
    }

    /// Replaces only the data callback.
    pub fn set_on_data(&mut self, f: Option<DataCallback<T>>) {
        self.callbacks.on_data = f;
    }

    /// Replaces only the element callback.
    pub fn set_on_element(&mut self, f: Option<ElementCallback<T, V>>) {
        self.callbacks.on_element = f;
    }

    /// Re-renders the bound item, if any.
    pub fn refresh(&mut self) {
        if let Some(item) = &self.item {
            self.content.render_content(item);
        }
    }

    /// Renders the row's visual content.
    pub fn view(&self, selected: bool) -> String {
        self.content.view(selected)
    }
}

impl<T, V> RowElement<T, V> {
    /// The item currently bound, or `None` after a clear.
    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    /// Returns true while an item is bound.
    pub fn is_bound(&self) -> bool {
        self.item.is_some()
    }

    /// The callbacks currently registered on this row.
    pub fn callbacks(&self) -> &Callbacks<T, V> {
        &self.callbacks
    }

    /// The row's visual content.
    pub fn content(&self) -> &V {
        &self.content
    }

    /// Whether the owning list currently shows this row.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl<T: fmt::Debug, V: fmt::Debug> fmt::Debug for RowElement<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowElement")
            .field("item", &self.item)
            .field("callbacks", &self.callbacks)
            .field("content", &self.content)
            .field("visible", &self.visible)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Debug, Clone, Default)]
    struct CountingView {
        text: String,
        renders: usize,
    }

    impl RowView<u32> for CountingView {
        fn render_content(&mut self, item: &u32) {
            self.text = item.to_string();
            self.renders += 1;
        }

        fn view(&self, _selected: bool) -> String {
            self.text.clone()
        }
    }

    fn counter() -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let c = Arc::new(AtomicUsize::new(0));
        (Arc::clone(&c), c)
    }

    #[test]
    fn test_bind_renders_item() {
        let mut row = RowElement::new(CountingView::default());
        assert!(!row.is_bound());

        row.bind(7u32, Callbacks::new());
        assert_eq!(row.item(), Some(&7));
        assert_eq!(row.view(false), "7");
        assert_eq!(row.content().renders, 1);
    }

    #[test]
    fn test_bind_replaces_callbacks() {
        let (hits, sink) = counter();
        let mut row = RowElement::new(CountingView::default());
        row.bind(
            1u32,
            Callbacks::new().on_data(move |_| {
                sink.fetch_add(1, Ordering::SeqCst);
            }),
        );
        row.bind(2u32, Callbacks::new());

        row.trigger_by_data();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(row.callbacks().is_empty());
    }

    #[test]
    fn test_trigger_by_data_passes_item_then_runs_action() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let data_log = Arc::clone(&seen);
        let action_log = Arc::clone(&seen);

        let mut row = RowElement::new(CountingView::default());
        row.bind(
            42u32,
            Callbacks::new()
                .on_data(move |item: &u32| data_log.lock().unwrap().push(format!("data {item}")))
                .extra_action(move || action_log.lock().unwrap().push("action".to_string())),
        );
        row.trigger_by_data();

        assert_eq!(*seen.lock().unwrap(), vec!["data 42", "action"]);
    }

    #[test]
    fn test_trigger_by_element_receives_row() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);

        let mut row = RowElement::new(CountingView::default());
        row.bind(
            9u32,
            Callbacks::new().on_element(move |r: &RowElement<u32, CountingView>| {
                *sink.lock().unwrap() = r.item().copied();
            }),
        );
        row.trigger_by_element();

        assert_eq!(*seen.lock().unwrap(), Some(9));
    }

    #[test]
    fn test_triggers_without_callbacks_are_noops() {
        let mut row = RowElement::new(CountingView::default());
        row.trigger_by_data();
        row.trigger_by_element();

        row.bind(3u32, Callbacks::new());
        row.trigger_by_data();
        row.trigger_by_element();
    }

    #[test]
    fn test_extra_action_runs_for_element_trigger_without_element_callback() {
        let (hits, sink) = counter();
        let mut row = RowElement::new(CountingView::default());
        row.bind(
            1u32,
            Callbacks::new().extra_action(move || {
                sink.fetch_add(1, Ordering::SeqCst);
            }),
        );
        row.trigger_by_element();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear_drops_item_and_all_callbacks() {
        let (hits, sink) = counter();
        let element_sink = Arc::clone(&sink);
        let mut row = RowElement::new(CountingView::default());
        row.bind(
            5u32,
            Callbacks::new()
                .on_data(move |_| {
                    sink.fetch_add(1, Ordering::SeqCst);
                })
                .on_element(move |_| {
                    element_sink.fetch_add(1, Ordering::SeqCst);
                }),
        );
        row.clear();

        assert!(!row.is_bound());
        assert!(row.callbacks().is_empty());
        row.trigger_by_data();
        row.trigger_by_element();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        // stale until rebound
        assert_eq!(row.view(false), "5");
    }

    #[test]
    fn test_set_on_data_keeps_binding() {
        let (hits, sink) = counter();
        let mut row = RowElement::new(CountingView::default());
        row.bind(11u32, Callbacks::new());
        row.set_on_data(Some(Arc::new(move |_: &u32| {
            sink.fetch_add(1, Ordering::SeqCst);
        })));

        row.trigger_by_data();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(row.item(), Some(&11));
    }

    #[test]
    fn test_set_on_element_keeps_binding() {
        let (hits, sink) = counter();
        let mut row = RowElement::new(CountingView::default());
        row.bind(12u32, Callbacks::new());
        row.set_on_element(Some(Arc::new(move |r: &RowElement<u32, CountingView>| {
            assert_eq!(r.item(), Some(&12));
            sink.fetch_add(1, Ordering::SeqCst);
        })));

        row.trigger_by_element();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(row.item(), Some(&12));

        row.set_on_element(None);
        row.trigger_by_element();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let mut row = RowElement::new(CountingView::default());
        row.bind(8u32, Callbacks::new());
        row.refresh();
        row.refresh();
        assert_eq!(row.view(true), "8");
        assert_eq!(row.content().renders, 3);
    }
}
