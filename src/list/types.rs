//! Core types shared by the list controller.
//!
//! - [`Item`]: what the built-in name filter matches against
//! - [`MatchMode`]: how a query is compared with an item
//! - [`SearchState`]: the normalized query and its activation threshold
//! - [`FilterKey`]: identity of a registered filter
//! - Messages the controller accepts from a bubbletea-rs program

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::borrow::Cow;
use std::fmt;

/// Items that can be matched by name.
///
/// # Examples
///
/// ```
/// use pooled_list::list::Item;
///
/// struct Contact {
///     first: String,
///     last: String,
/// }
///
/// impl Item for Contact {
///     fn filter_value(&self) -> String {
///         format!("{} {}", self.first, self.last)
///     }
/// }
/// ```
pub trait Item {
    /// Text the name filter compares against the search query.
    fn filter_value(&self) -> String;
}

impl Item for String {
    fn filter_value(&self) -> String {
        self.clone()
    }
}

impl Item for &str {
    fn filter_value(&self) -> String {
        (*self).to_string()
    }
}

/// How the built-in name filter compares a query with an item.
///
/// Every mode is case-insensitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// The item's filter value contains the query.
    #[default]
    Contains,
    /// The item's filter value equals the query.
    Exact,
    /// The query's characters appear in order, as scored by the skim matcher.
    Fuzzy,
}

impl MatchMode {
    /// Reports whether `value` matches the normalized (lowercase) `query`.
    ///
    /// Builds a fresh matcher for a one-off comparison. Filtering
    /// passes hold one matcher for every item instead.
    pub fn matches(self, value: &str, query: &str) -> bool {
        NameMatcher::new(self).matches(value, query)
    }
}

/// A [`MatchMode`] ready to compare many values against a query.
///
/// The fuzzy scorer is created once here and reused for every item.
pub(crate) struct NameMatcher {
    mode: MatchMode,
    fuzzy: Option<SkimMatcherV2>,
}

impl NameMatcher {
    pub(crate) fn new(mode: MatchMode) -> Self {
        let fuzzy = match mode {
            MatchMode::Fuzzy => Some(SkimMatcherV2::default().ignore_case()),
            MatchMode::Contains | MatchMode::Exact => None,
        };
        Self { mode, fuzzy }
    }

    pub(crate) fn matches(&self, value: &str, query: &str) -> bool {
        let value = value.to_lowercase();
        match (self.mode, &self.fuzzy) {
            (MatchMode::Contains, _) => value.contains(query),
            (MatchMode::Exact, _) => value == query,
            (MatchMode::Fuzzy, Some(matcher)) => matcher.fuzzy_match(&value, query).is_some(),
            (MatchMode::Fuzzy, None) => false,
        }
    }
}

impl fmt::Debug for NameMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameMatcher").field("mode", &self.mode).finish()
    }
}

/// The current search query and the length it must exceed to filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    min_chars: usize,
}

impl SearchState {
    pub(crate) fn new(min_chars: usize) -> Self {
        Self {
            query: String::new(),
            min_chars,
        }
    }

    /// The normalized query: trimmed and lowercased.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The exclusive length threshold for activating the name filter.
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// Returns true if the query is long enough to activate the name filter.
    pub fn exceeds_threshold(&self) -> bool {
        self.query.chars().count() > self.min_chars
    }

    pub(crate) fn set_query(&mut self, raw: &str) {
        self.query = raw.trim().to_lowercase();
    }
}

/// Identity of a filter in the registry.
///
/// Two registrations with the same key are the same filter. The built-in
/// name filter's key, [`FilterKey::NAME`], cannot be built from a string, so a
/// filter registered as `"name"` is a separate entry.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FilterKey(KeyRepr);

#[derive(Clone, PartialEq, Eq, Hash)]
enum KeyRepr {
    Builtin(&'static str),
    Named(Cow<'static, str>),
}

impl FilterKey {
    /// Key of the built-in name filter.
    pub const NAME: FilterKey = FilterKey(KeyRepr::Builtin("name"));

    /// Creates a key from a static name.
    pub const fn new(name: &'static str) -> Self {
        FilterKey(KeyRepr::Named(Cow::Borrowed(name)))
    }

    /// The key's name.
    pub fn as_str(&self) -> &str {
        match &self.0 {
            KeyRepr::Builtin(name) => name,
            KeyRepr::Named(name) => name,
        }
    }

    /// Returns true for keys owned by the controller itself.
    pub fn is_builtin(&self) -> bool {
        matches!(self.0, KeyRepr::Builtin(_))
    }
}

impl From<&'static str> for FilterKey {
    fn from(name: &'static str) -> Self {
        FilterKey::new(name)
    }
}

impl From<String> for FilterKey {
    fn from(name: String) -> Self {
        FilterKey(KeyRepr::Named(Cow::Owned(name)))
    }
}

impl fmt::Debug for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            KeyRepr::Builtin(name) => write!(f, "FilterKey(builtin {name:?})"),
            KeyRepr::Named(name) => f.debug_tuple("FilterKey").field(name).finish(),
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which callback an activation fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fire the row's data callback.
    Data,
    /// Fire the row's element callback.
    Element,
}

/// Message carrying new search text from a search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchChangedMsg(
    /// The raw search text, normalized by the controller.
    pub String,
);

/// Message showing or hiding every filled row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowListMsg(
    /// `true` to show, `false` to hide.
    pub bool,
);
