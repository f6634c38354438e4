//! Type-safe key bindings for bubbletea-autocomplete components.
//!
//! Bindings are described with human readable key strings (`"down"`,
//! `"ctrl+n"`, `"alt+backspace"`) and matched against the `KeyMsg` values
//! delivered by the bubbletea-rs runtime.
//!
//! ```rust
//! use bubbletea_autocomplete::key::{matches_binding, new_binding, with_help, with_keys_str};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let next = new_binding(vec![
//!     with_keys_str(&["down", "ctrl+n"]),
//!     with_help("↓/ctrl+n", "next suggestion"),
//! ]);
//!
//! let msg = KeyMsg { key: KeyCode::Char('n'), modifiers: KeyModifiers::CONTROL };
//! assert!(matches_binding(&msg, &next));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Creates a key press with no modifiers.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Parses a key description such as `"ctrl+n"` or `"pgdown"`.
    ///
    /// Returns `None` for descriptions that name no known key.
    pub fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = s;

        loop {
            if let Some(r) = rest.strip_prefix("ctrl+") {
                modifiers |= KeyModifiers::CONTROL;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("alt+") {
                modifiers |= KeyModifiers::ALT;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("shift+") {
                modifiers |= KeyModifiers::SHIFT;
                rest = r;
            } else {
                break;
            }
        }

        let code = match rest {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "esc" => KeyCode::Esc,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, modifiers })
    }

    /// Reports whether this key press matches the given message.
    ///
    /// Shift is ignored for character keys since terminals report it through
    /// the character's case.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT;
        match self.code {
            KeyCode::Char(_) => (msg.modifiers & relevant) == (self.modifiers & relevant),
            _ => msg.modifiers == self.modifiers,
        }
    }
}

/// Help text shown for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the keys, e.g. `"↓/ctrl+n"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of keys bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

/// A builder option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

impl Binding {
    /// Creates a binding from explicit key presses.
    pub fn new(keys: Vec<KeyPress>) -> Self {
        Self {
            keys,
            ..Self::default()
        }
    }

    /// Returns the bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the binding is enabled and has keys.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }
}

/// Creates a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Binds the keys named by the given descriptions. Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| KeyPress::parse(k)).collect();
    Box::new(move |b: &mut Binding| b.keys = parsed)
}

/// Sets the help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Reports whether `msg` matches any key of an enabled binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.enabled() && binding.keys.iter().any(|k| k.matches(msg))
}

/// Implemented by key maps so help views can list their bindings.
pub trait KeyMap {
    /// Bindings for the compact, single line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(key: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg { key, modifiers }
    }

    #[test]
    fn test_parse_named_and_modified_keys() {
        assert_eq!(KeyPress::parse("down"), Some(KeyPress::new(KeyCode::Down)));
        assert_eq!(
            KeyPress::parse("ctrl+n"),
            Some(KeyPress {
                code: KeyCode::Char('n'),
                modifiers: KeyModifiers::CONTROL,
            })
        );
        assert_eq!(
            KeyPress::parse("alt+backspace"),
            Some(KeyPress {
                code: KeyCode::Backspace,
                modifiers: KeyModifiers::ALT,
            })
        );
        assert_eq!(KeyPress::parse("nonsense"), None);
    }

    #[test]
    fn test_matches_binding() {
        let b = new_binding(vec![with_keys_str(&["up", "ctrl+p"])]);
        assert!(matches_binding(&msg(KeyCode::Up, KeyModifiers::NONE), &b));
        assert!(matches_binding(
            &msg(KeyCode::Char('p'), KeyModifiers::CONTROL),
            &b
        ));
        assert!(!matches_binding(
            &msg(KeyCode::Char('p'), KeyModifiers::NONE),
            &b
        ));
    }

    #[test]
    fn test_shift_ignored_for_chars() {
        let b = new_binding(vec![with_keys_str(&["a"])]);
        assert!(matches_binding(
            &msg(KeyCode::Char('a'), KeyModifiers::SHIFT),
            &b
        ));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = new_binding(vec![with_keys_str(&["enter"]), with_disabled()]);
        assert!(!matches_binding(&msg(KeyCode::Enter, KeyModifiers::NONE), &b));
        b.set_enabled(true);
        assert!(matches_binding(&msg(KeyCode::Enter, KeyModifiers::NONE), &b));
    }

    #[test]
    fn test_help_text() {
        let b = new_binding(vec![with_keys_str(&["tab"]), with_help("tab", "accept")]);
        assert_eq!(b.help().key, "tab");
        assert_eq!(b.help().desc, "accept");
    }
}
