//! A single-line text field with a suggestion dropdown.
//!
//! [`AutocompleteField`] is the bubbletea face of the crate: it owns the
//! text and cursor, feeds focus and edit events into a [`Session`] and
//! forwards every resulting [`Action`] to its [`Dropdown`].

use super::dropdown::Dropdown;
use super::keymap::{default_key_map, AutocompleteKeyMap};
use super::options::{ConfigError, MatchOptions};
use super::render::Action;
use super::session::{AutocompleteDelegate, Session, SessionState};
use super::style::DropdownStyle;
use super::types::{emit, DismissedMsg, RowTappedMsg};
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// A text input that suggests completions from a candidate pool.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::{AutocompleteField, MatchOptions};
///
/// let mut field = AutocompleteField::new();
/// field.set_suggestions(vec!["ciao".into(), "come".into(), "stai".into()]);
/// field.set_options(MatchOptions::new().with_max_edit_distance(1)).unwrap();
///
/// drop(field.focus());
/// field.set_value("cia");
/// assert_eq!(field.suggestions(), vec!["ciao"]);
/// ```
pub struct AutocompleteField {
    /// Prompt shown before the text.
    pub prompt: String,
    /// Style for the prompt.
    pub prompt_style: Style,
    /// Style for the typed text.
    pub text_style: Style,
    /// Placeholder shown while the field is empty.
    pub placeholder: String,
    /// Style for the placeholder.
    pub placeholder_style: Style,
    /// Style for the cursor cell.
    pub cursor_style: Style,
    /// Key bindings.
    pub key_map: AutocompleteKeyMap,

    pub(super) value: Vec<char>,
    pub(super) pos: usize,
    pub(super) focus: bool,
    pub(super) width: usize,
    pub(super) session: Session,
    pub(super) dropdown: Dropdown,
}

impl AutocompleteField {
    /// Creates an unfocused, empty field with default options and style.
    pub fn new() -> Self {
        Self {
            prompt: "> ".to_string(),
            prompt_style: Style::new(),
            text_style: Style::new(),
            placeholder: String::new(),
            placeholder_style: Style::new().foreground(Color::from("240")),
            cursor_style: Style::new().reverse(true),
            key_map: default_key_map(),
            value: Vec::new(),
            pos: 0,
            focus: false,
            width: 0,
            session: Session::new(),
            dropdown: Dropdown::new(DropdownStyle::default()),
        }
    }

    /// Current text.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether the field has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Replaces the text, moves the cursor to the end and refreshes the
    /// suggestions.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        self.pos = self.value.len();
        self.text_changed();
    }

    /// Moves the cursor, clamped to the text.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Sets the placeholder.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the field width; the dropdown takes the same inner width. Zero
    /// lets both size to their content.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.dropdown.set_width(width);
    }

    /// Replaces the candidate pool.
    pub fn set_suggestions(&mut self, suggestions: Vec<String>) {
        let action = self.session.set_pool(suggestions);
        self.apply(action);
    }

    /// The pool as stored by the session.
    pub fn available_suggestions(&self) -> &[String] {
        self.session.pool()
    }

    /// Suggestions currently shown.
    pub fn suggestions(&self) -> Vec<String> {
        self.dropdown
            .rows()
            .iter()
            .map(|row| row.text.clone())
            .collect()
    }

    /// The highlighted suggestion, if any is shown.
    pub fn current_suggestion(&self) -> Option<&str> {
        self.dropdown.highlighted().map(|row| row.text.as_str())
    }

    /// Replaces the matching options.
    pub fn set_options(&mut self, options: MatchOptions) -> Result<(), ConfigError> {
        let action = self.session.set_options(options)?;
        self.apply(action);
        Ok(())
    }

    /// Enables or disables suggestions.
    pub fn set_enabled(&mut self, enabled: bool) {
        let action = self.session.set_enabled(enabled);
        self.apply(action);
    }

    /// Attaches a delegate notified of taps and dismissals.
    pub fn set_delegate<D: AutocompleteDelegate + Send + 'static>(&mut self, delegate: D) {
        self.session.set_delegate(delegate);
    }

    /// Replaces the dropdown appearance.
    pub fn set_style(&mut self, style: DropdownStyle) {
        self.dropdown.style = style;
    }

    /// Dropdown appearance.
    pub fn style(&self) -> &DropdownStyle {
        &self.dropdown.style
    }

    /// Underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Underlying dropdown.
    pub fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    /// Session state, for hosts that lay out around the dropdown.
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Focuses the field and starts a suggestion session.
    pub fn focus(&mut self) -> Cmd {
        self.focus = true;
        let action = self.session.focus_gained();
        self.apply(action);
        Box::pin(async { None })
    }

    /// Blurs the field, ending the suggestion session.
    ///
    /// A visible dropdown is hidden and the delegate's `dismissed()` is
    /// called. While suggestions are enabled the returned command yields a
    /// [`DismissedMsg`], whether or not a list was showing, so hosts without
    /// a delegate still hear about the dismissal through `update`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_autocomplete::autocomplete::AutocompleteField;
    ///
    /// let mut field = AutocompleteField::new();
    /// drop(field.focus());
    /// assert!(field.blur().is_some());
    ///
    /// field.set_enabled(false);
    /// drop(field.focus());
    /// assert!(field.blur().is_none());
    /// ```
    pub fn blur(&mut self) -> Option<Cmd> {
        self.focus = false;
        let notify = self.session.enabled();
        let action = self.session.focus_lost();
        self.apply(action);
        notify.then(|| emit(DismissedMsg))
    }

    /// Handles key messages while focused.
    ///
    /// Editing keys change the text and feed the new value to the session,
    /// which may show, refresh or hide the dropdown. Cursor keys move the
    /// cursor without re-filtering. While the dropdown is visible:
    ///
    /// - `down`/`ctrl+n` and `up`/`ctrl+p` move the highlight, wrapping at
    ///   either end.
    /// - `enter`/`tab` commit the highlighted suggestion as the field's text
    ///   and return a command yielding [`RowTappedMsg`].
    ///
    /// `esc` blurs the field in any state; see [`AutocompleteField::blur`].
    /// Unfocused fields and non-key messages are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_autocomplete::autocomplete::AutocompleteField;
    /// use bubbletea_rs::{KeyMsg, Msg};
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let key = |code| Box::new(KeyMsg { key: code, modifiers: KeyModifiers::NONE }) as Msg;
    ///
    /// let mut field = AutocompleteField::new();
    /// field.set_suggestions(vec!["ciao".into(), "come".into()]);
    /// drop(field.focus());
    ///
    /// field.update(key(KeyCode::Char('c')));
    /// assert_eq!(field.suggestions(), vec!["ciao", "come"]);
    ///
    /// field.update(key(KeyCode::Down));
    /// assert!(field.update(key(KeyCode::Enter)).is_some());
    /// assert_eq!(field.value(), "come");
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if let Some(cmd) = self.handle_suggestion_keys(key_msg) {
            return cmd;
        }

        let before = self.value.clone();
        self.handle_deletion_keys(key_msg);
        self.handle_movement_keys(key_msg);
        self.handle_character_input(key_msg);

        if self.value != before {
            self.text_changed();
        }
        None
    }

    /// Renders the field followed by the dropdown when visible.
    pub fn view(&self) -> String {
        let line = format!(
            "{}{}",
            self.prompt_style.render(&self.prompt),
            self.input_view()
        );
        let dropdown = self.dropdown.view();
        if dropdown.is_empty() {
            line
        } else {
            format!("{}\n{}", line, dropdown)
        }
    }

    fn input_view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_style.render(&self.placeholder);
        }

        let head: String = self.value[..self.pos].iter().collect();
        let mut v = self.text_style.render(&head);

        if self.focus {
            let under = self.value.get(self.pos).copied().unwrap_or(' ');
            v.push_str(&self.cursor_style.render(&under.to_string()));
            if self.pos < self.value.len() {
                let tail: String = self.value[self.pos + 1..].iter().collect();
                v.push_str(&self.text_style.render(&tail));
            }
        } else {
            let tail: String = self.value[self.pos..].iter().collect();
            v.push_str(&self.text_style.render(&tail));
        }

        let len = self.value.len() + usize::from(self.focus && self.pos == self.value.len());
        if self.width > len {
            v.push_str(&self.text_style.render(&" ".repeat(self.width - len)));
        }
        v
    }

    fn text_changed(&mut self) {
        let text = self.value();
        let action = self.session.text_changed(&text);
        self.apply(action);
    }

    fn apply(&mut self, action: Option<Action>) {
        if let Some(action) = action {
            action.apply(&mut self.dropdown);
        }
    }

    fn handle_suggestion_keys(&mut self, key_msg: &KeyMsg) -> Option<Option<Cmd>> {
        if matches_binding(key_msg, &self.key_map.accept_suggestion) {
            let index = self.dropdown.highlighted().map(|row| row.index)?;
            let row = self.session.row_tapped(index)?;
            self.set_value(&row.text);
            return Some(Some(emit(RowTappedMsg {
                text: row.text,
                index: row.index,
            })));
        }

        if matches_binding(key_msg, &self.key_map.dismiss) {
            return Some(self.blur());
        }

        if matches_binding(key_msg, &self.key_map.next_suggestion) {
            self.dropdown.next();
        } else if matches_binding(key_msg, &self.key_map.prev_suggestion) {
            self.dropdown.previous();
        } else {
            return None;
        }
        Some(None)
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if matches_binding(key_msg, &self.key_map.delete_before_cursor) {
            self.value.drain(..self.pos);
            self.pos = 0;
        } else if matches_binding(key_msg, &self.key_map.delete_after_cursor) {
            self.value.truncate(self.pos);
        }
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.character_backward) {
            self.set_cursor(self.pos.saturating_sub(1));
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            self.set_cursor(self.pos + 1);
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.set_cursor(0);
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.set_cursor(self.value.len());
        }
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        if let KeyCode::Char(ch) = key_msg.key {
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.value.insert(self.pos, ch);
                self.pos += 1;
            }
        }
    }
}

impl Default for AutocompleteField {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AutocompleteField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutocompleteField")
            .field("value", &self.value())
            .field("pos", &self.pos)
            .field("focus", &self.focus)
            .field("session", &self.session)
            .finish()
    }
}

impl Component for AutocompleteField {
    fn focus(&mut self) -> Option<Cmd> {
        Some(AutocompleteField::focus(self))
    }

    fn blur(&mut self) {
        drop(AutocompleteField::blur(self));
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl BubbleTeaModel for AutocompleteField {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        AutocompleteField::update(self, msg)
    }

    fn view(&self) -> String {
        AutocompleteField::view(self)
    }
}
