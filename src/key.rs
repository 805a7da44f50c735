//! Key bindings shared by the list components.
//!
//! A [`Binding`] maps one or more key codes to an action together with the short
//! help text a host can show in its footer. Types that own several bindings
//! implement [`KeyMap`] so hosts can render compact or full help.
//!
//! ```rust
//! use pooled_list::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! let confirm = Binding::new(vec![KeyCode::Enter]).with_help("enter", "confirm");
//! assert_eq!(confirm.help().key, "enter");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short rendering of the keys, e.g. `"↑/k"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of keys that trigger one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyCode>,
    modifiers: KeyModifiers,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding for the given key codes without modifiers.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            modifiers: KeyModifiers::NONE,
            help: Help::default(),
            disabled: false,
        }
    }

    /// Requires the given modifiers to be held for the binding to match.
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Sets the help text shown for this binding.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns whether the binding can currently match.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// The key codes of this binding.
    pub fn keys(&self) -> &[KeyCode] {
        &self.keys
    }

    /// The help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Reports whether a key message triggers this binding.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        self.enabled()
            && key_msg.modifiers.contains(self.modifiers)
            && self.keys.contains(&key_msg.key)
    }
}

/// Types exposing their key bindings for help rendering.
pub trait KeyMap {
    /// Bindings for a one-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the full help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_binding_matches_any_of_its_keys() {
        let binding = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]);
        assert!(binding.matches(&key(KeyCode::Up)));
        assert!(binding.matches(&key(KeyCode::Char('k'))));
        assert!(!binding.matches(&key(KeyCode::Down)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut binding = Binding::new(vec![KeyCode::Enter]);
        binding.set_enabled(false);
        assert!(!binding.enabled());
        assert!(!binding.matches(&key(KeyCode::Enter)));
    }

    #[test]
    fn test_modifiers_are_required() {
        let binding = Binding::new(vec![KeyCode::Char('c')]).with_modifiers(KeyModifiers::CONTROL);
        assert!(!binding.matches(&key(KeyCode::Char('c'))));
        assert!(binding.matches(&KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }));
    }
}
