#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-autocomplete/")]

//! # bubbletea-autocomplete
//!
//! An autocomplete text field for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications: a single-line input that shows a dropdown of matching
//! suggestions beneath itself.
//!
//! ## Overview
//!
//! Matching is prefix based with a Levenshtein tolerance: a candidate is
//! suggested when its first `len(query)` characters are within
//! `max_edit_distance` edits of what was typed. With a tolerance of one,
//! typing `word` also suggests `lord` and `cord`, but not `sword`.
//!
//! When the list appears, refreshes or goes away is decided by a small
//! session state machine driven by focus, edit and blur events. The session
//! never draws anything itself; it emits `Render`, `Rerender` and `Hide`
//! actions that any renderer can consume. The crate ships a lipgloss
//! renderer with borders, rounded corners, row separators and drop shadows.
//!
//! ## Components
//!
//! | Component | Description | Use Case |
//! |-----------|-------------|----------|
//! | `AutocompleteField` | Text input plus dropdown | Forms, search boxes |
//! | `Session` | Show/refresh/hide state machine | Custom renderers |
//! | `Dropdown` | Lipgloss suggestion box | Custom fields |
//! | `filter` | Prefix + edit distance matcher | Headless matching |
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_autocomplete::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     field: AutocompleteField,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut field = AutocompleteField::new();
//!         field.set_suggestions(vec!["ciao".into(), "come".into(), "stai".into()]);
//!         let cmd = field.focus();
//!         (Self { field }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(tapped) = msg.downcast_ref::<RowTappedMsg>() {
//!             let _chosen = &tapped.text;
//!             return None;
//!         }
//!         self.field.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.field.view()
//!     }
//! }
//! ```
//!
//! ## Headless matching
//!
//! ```rust
//! use bubbletea_autocomplete::autocomplete::{filter, MatchOptions};
//!
//! let pool = ["Apple", "apple", "APPLE"];
//! let found = filter(&pool, "app", &MatchOptions::new());
//! assert_eq!(found, vec!["Apple", "apple", "APPLE"]);
//! ```
//!
//! ## Logging
//!
//! Session transitions are reported through the `log` facade at `debug`
//! level and match counts at `trace` level. Install any `log` backend to
//! see them.

pub mod autocomplete;
pub mod key;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - `focus()` sets the focused state and may return a command.
/// - `blur()` clears it and releases focus-related state.
/// - `focused()` reports the current state.
///
/// ```rust
/// use bubbletea_autocomplete::prelude::*;
///
/// let mut field = AutocompleteField::new();
/// assert!(!Component::focused(&field));
///
/// let _ = Component::focus(&mut field);
/// assert!(Component::focused(&field));
///
/// Component::blur(&mut field);
/// assert!(!Component::focused(&field));
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state.
    fn focused(&self) -> bool;
}

pub use autocomplete::{
    bounded_edit_distance, edit_distance, filter, query_length, Action, AutocompleteDelegate,
    AutocompleteField, AutocompleteKeyMap, ConfigError, Corners, DismissedMsg, Dropdown,
    DropdownStyle, MatchOptions, Renderer, Row, RowTappedMsg, Session, SessionState, Shadow,
    ShadowConfig, ShadowSides,
};
pub use key::{
    matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_autocomplete::prelude::*;
///
/// let opts = MatchOptions::new().with_max_edit_distance(1);
/// assert!(opts.validate().is_ok());
/// ```
pub mod prelude {
    pub use crate::autocomplete::{
        filter, Action, AutocompleteDelegate, AutocompleteField, AutocompleteKeyMap,
        ConfigError, Corners, DismissedMsg, Dropdown, DropdownStyle, MatchOptions, Renderer,
        Row, RowTappedMsg, Session, SessionState, Shadow, ShadowConfig, ShadowSides,
    };
    pub use crate::key::{matches_binding, new_binding, with_help, with_keys_str, Binding, KeyMap};
    pub use crate::Component;
}
