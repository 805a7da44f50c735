//! Construction-time settings for a list controller.

use super::types::MatchMode;
use crate::error::ConfigError;

/// Default exclusive length a query must exceed before the name filter applies.
pub const DEFAULT_SEARCH_MIN_CHARS: usize = 2;

/// Settings validated once when a [`ListController`](super::ListController) is built.
///
/// ```
/// use pooled_list::list::{ListConfig, MatchMode};
///
/// let config = ListConfig::new()
///     .with_search_min_chars(3)
///     .with_match_mode(MatchMode::Fuzzy);
/// assert!(config.validate().is_ok());
/// assert!(ListConfig::new().with_search_min_chars(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    /// The name filter activates once the query is longer than this.
    pub search_min_chars: usize,
    /// How the name filter compares queries with items.
    pub match_mode: MatchMode,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            search_min_chars: DEFAULT_SEARCH_MIN_CHARS,
            match_mode: MatchMode::default(),
        }
    }
}

impl ListConfig {
    /// Default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name filter threshold. Must be at least 1.
    pub fn with_search_min_chars(mut self, min_chars: usize) -> Self {
        self.search_min_chars = min_chars;
        self
    }

    /// Sets the name match mode.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Checks the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SearchMinChars`] if `search_min_chars` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_min_chars < 1 {
            return Err(ConfigError::SearchMinChars {
                value: self.search_min_chars,
            });
        }
        Ok(())
    }
}
