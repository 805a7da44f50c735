#![warn(missing_docs)]

//! # bubbletea-pooled-list
//!
//! A pooled, filterable list controller for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! A list screen usually shows the same kind of row over and over while the
//! data behind it changes. This crate keeps a pool of reusable rows, binds each
//! new batch of items onto it by position, and derives visibility from a chain
//! of filters, so searching or toggling a filter never refetches or rebinds
//! data.
//!
//! ## Components
//!
//! - **Rows**: [`row::RowElement`] holds one bound item, its callbacks, and a
//!   [`row::RowView`] that draws it. [`textrow::TextRow`] is a ready-made view
//!   for anything that implements `Display`.
//! - **Controller**: [`list::ListController`] owns the pool, runs fill and
//!   filter cycles, tracks the selection, and handles bubbletea-rs messages.
//! - **Keys**: [`key::Binding`] and [`list::ListKeyMap`] drive keyboard
//!   selection and row activation.
//!
//! ## Quick Start
//!
//! ```rust
//! use pooled_list::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let chosen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&chosen);
//!
//! let config = ListConfig::new().with_search_min_chars(2);
//! let mut list = ListController::new(TextRow::new(), config).expect("valid config");
//! list.fill_data(
//!     ["Alice", "Bob", "Carol"].map(String::from),
//!     Callbacks::new().on_data(move |name: &String| sink.lock().unwrap().push(name.clone())),
//! );
//!
//! list.set_name_filter("bob");
//! assert_eq!(list.visible_items(), vec!["Bob"]);
//!
//! list.activate(0, Trigger::Data);
//! assert_eq!(*chosen.lock().unwrap(), vec!["Bob"]);
//! ```
//!
//! ## Logging
//!
//! Pool growth, fills, filter registration and filtering passes are reported
//! through [`tracing`] at `debug` and `trace` level. Install a subscriber in your
//! application to see them.

pub mod error;
pub mod key;
pub mod list;
pub mod row;
pub mod textrow;

pub use error::ConfigError;

/// Commonly used types.
pub mod prelude {
    pub use crate::error::ConfigError;
    pub use crate::key::{Binding, KeyMap};
    pub use crate::list::{
        FilterKey, Item, ListConfig, ListController, ListKeyMap, MatchMode, SearchChangedMsg,
        SearchState, ShowListMsg, Trigger,
    };
    pub use crate::row::{Callbacks, RowElement, RowView};
    pub use crate::textrow::{TextRow, TextRowStyles};
}
