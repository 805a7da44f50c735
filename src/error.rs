//! Error types for list configuration.
//!
//! Every runtime operation on a list controller is total. The only thing that can
//! fail is building a controller from a [`ListConfig`](crate::list::ListConfig)
//! whose values make no sense, and that is reported once at construction.

use thiserror::Error;

/// Errors raised while validating a [`ListConfig`](crate::list::ListConfig).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The search threshold must be at least one character.
    #[error("search_min_chars must be at least 1, got {value}")]
    SearchMinChars {
        /// The rejected value.
        value: usize,
    },
}
