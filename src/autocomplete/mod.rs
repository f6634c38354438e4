//! Autocomplete: a text field with a dropdown of matching suggestions.
//!
//! The module is split the way the pieces depend on each other:
//!
//! - [`matcher`]: the pure filter. A candidate matches when its first
//!   `len(query)` graphemes are within `max_edit_distance` Levenshtein edits
//!   of the query.
//! - [`session`]: the Idle / Focused / Showing state machine that decides,
//!   for every focus, edit or blur event, whether to run the matcher and
//!   whether the list should be rendered, refreshed or hidden.
//! - [`render`]: the `Render` / `Rerender` / `Hide` actions and the
//!   [`Renderer`] trait that receives them.
//! - [`dropdown`] and [`style`]: a lipgloss renderer and its appearance
//!   settings (borders, rounded corners, separators, shadows).
//! - [`field`]: [`AutocompleteField`], a bubbletea component tying it all
//!   together.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_autocomplete::autocomplete::{
//!     AutocompleteField, Corners, DropdownStyle, MatchOptions, Shadow,
//! };
//!
//! let mut field = AutocompleteField::new();
//! field.set_suggestions(vec!["word".into(), "lord".into(), "cord".into(), "sword".into()]);
//! field
//!     .set_options(
//!         MatchOptions::new()
//!             .with_max_edit_distance(1)
//!             .with_min_query_length(2),
//!     )
//!     .unwrap();
//! field.set_style(
//!     DropdownStyle::default()
//!         .with_corner_radius(1, Corners::BOTTOM_LEFT | Corners::BOTTOM_RIGHT)
//!         .with_shadow(Shadow::BottomRight),
//! );
//! ```
//!
//! # Driving a session directly
//!
//! Hosts with their own rendering can use [`Session`] alone and apply each
//! returned [`Action`] to any [`Renderer`].

pub mod dropdown;
pub mod field;
pub mod keymap;
pub mod matcher;
pub mod options;
pub mod render;
pub mod session;
pub mod style;
pub mod types;


pub use dropdown::Dropdown;
pub use field::AutocompleteField;
pub use keymap::{default_key_map, AutocompleteKeyMap};
pub use matcher::{bounded_edit_distance, edit_distance, filter, matches, query_length};
pub use options::{ConfigError, MatchOptions};
pub use render::{Action, Renderer, Row};
pub use session::{AutocompleteDelegate, Session, SessionState};
pub use style::{Corners, DropdownStyle, Shadow, ShadowConfig, ShadowSides};
pub use types::{DismissedMsg, RowTappedMsg};
