//! Type-safe key bindings shared by the carousel components.
//!
//! A [`Binding`] groups the key codes that trigger one action together with the
//! short help text shown for it. Components expose their bindings through the
//! [`KeyMap`] trait so a help view can list them.
//!
//! ```rust
//! use bubbletea_carousel::key::{Binding, KeyMap};
//! use crossterm::event::KeyCode;
//!
//! let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
//!     .with_help("→/l", "next slide");
//! assert_eq!(next.help().key, "→/l");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the keys, e.g. `"←/h"`.
    pub key: String,
    /// What the binding does, e.g. `"prev slide"`.
    pub desc: String,
}

/// A set of keys bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<(KeyCode, KeyModifiers)>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates a binding from plain key codes (no modifiers).
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys: keys.into_iter().map(|k| (k, KeyModifiers::NONE)).collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    /// Creates a binding from key codes paired with required modifiers.
    pub fn with_modifiers(keys: Vec<(KeyCode, KeyModifiers)>) -> Self {
        Self {
            keys,
            help: Help::default(),
            enabled: true,
        }
    }

    /// Attaches help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns the key codes (and modifiers) this binding responds to.
    pub fn keys(&self) -> &[(KeyCode, KeyModifiers)] {
        &self.keys
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the binding is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled && !self.keys.is_empty()
    }

    /// Reports whether a key message triggers this binding.
    ///
    /// Shift is ignored for character keys so that `G` matches whether or not
    /// the terminal reports the shift modifier.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys.iter().any(|(code, mods)| {
            if *code != msg.key {
                return false;
            }
            let mut pressed = msg.modifiers;
            if matches!(code, KeyCode::Char(_)) {
                pressed.remove(KeyModifiers::SHIFT);
            }
            pressed == *mods
        })
    }
}

/// Components implement this to publish their bindings to a help view.
pub trait KeyMap {
    /// Bindings for the compact, single-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_matches_plain_key() {
        let b = Binding::new(vec![KeyCode::Left, KeyCode::Char('h')]);
        assert!(b.matches(&key(KeyCode::Left, KeyModifiers::NONE)));
        assert!(b.matches(&key(KeyCode::Char('h'), KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Right, KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Left, KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_shift_ignored_for_chars() {
        let b = Binding::new(vec![KeyCode::Char('G')]);
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_disabled_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]).with_help("enter", "select");
        b.set_enabled(false);
        assert!(!b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
        assert_eq!(b.help().desc, "select");
    }
}
