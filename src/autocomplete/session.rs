//! Focus/edit state machine deciding when suggestions are shown.
//!
//! A [`Session`] receives the host field's events one at a time and answers
//! each with at most one [`Action`] for the renderer. The gate that decides
//! whether suggestions may appear is the same for every event: the session
//! is enabled and the query is at least `min_query_length` graphemes long.
//! A gate that passes but filters down to nothing is treated like a failing
//! gate, so an empty container is never shown.
//!
//! ```rust
//! use bubbletea_autocomplete::autocomplete::{Action, Session, SessionState};
//!
//! let mut session = Session::new().with_pool(vec!["ciao".into(), "come".into(), "stai".into()]);
//! assert_eq!(session.focus_gained(), None); // empty query
//! assert!(matches!(session.text_changed("c"), Some(Action::Render(_))));
//! assert_eq!(session.state(), SessionState::Showing);
//! assert_eq!(session.focus_lost(), Some(Action::Hide));
//! ```

use super::matcher::{filter, long_enough, query_length};
use super::options::{ConfigError, MatchOptions};
use super::render::{Action, Row};
use std::fmt;

/// Where the session is in its focus lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// The field is not focused and nothing is shown.
    #[default]
    Idle,
    /// The field is focused but no list is visible.
    Focused,
    /// The field is focused and a non-empty list is visible.
    Showing,
}

/// Receives notifications from a session. Both methods default to no-ops.
pub trait AutocompleteDelegate {
    /// A visible row was chosen. `index` is the row's position in the
    /// rendered list.
    fn row_tapped(&mut self, _text: &str, _index: usize) {}

    /// The field lost focus and the session was dismissed.
    fn dismissed(&mut self) {}
}

/// One focus-to-blur autocomplete interaction plus its configuration.
pub struct Session {
    pool: Vec<String>,
    options: MatchOptions,
    enabled: bool,
    sort_pool: bool,
    query: String,
    state: SessionState,
    rows: Vec<Row>,
    delegate: Option<Box<dyn AutocompleteDelegate + Send>>,
}

impl Session {
    /// Creates an enabled, idle session with an empty pool and default
    /// options.
    pub fn new() -> Self {
        Self {
            pool: Vec::new(),
            options: MatchOptions::default(),
            enabled: true,
            sort_pool: true,
            query: String::new(),
            state: SessionState::Idle,
            rows: Vec::new(),
            delegate: None,
        }
    }

    /// Builder form of [`Session::set_pool`].
    pub fn with_pool(mut self, pool: Vec<String>) -> Self {
        self.set_pool(pool);
        self
    }

    /// Builder form of [`Session::set_options`].
    pub fn with_options(mut self, options: MatchOptions) -> Result<Self, ConfigError> {
        self.set_options(options)?;
        Ok(self)
    }

    /// Builder form of [`Session::set_delegate`].
    pub fn with_delegate<D: AutocompleteDelegate + Send + 'static>(mut self, delegate: D) -> Self {
        self.set_delegate(delegate);
        self
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Reports whether a list is currently visible.
    pub fn is_showing(&self) -> bool {
        self.state == SessionState::Showing
    }

    /// Last text received from the field.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The candidate pool, sorted unless sorting was turned off.
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// Matching options in effect.
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Whether suggestions may be shown at all.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Rows of the visible list; empty unless showing.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Attaches the notification receiver, replacing any previous one.
    pub fn set_delegate<D: AutocompleteDelegate + Send + 'static>(&mut self, delegate: D) {
        self.delegate = Some(Box::new(delegate));
    }

    /// Detaches the notification receiver.
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Controls whether assigned pools are sorted lexicographically.
    /// Takes effect on the next [`Session::set_pool`].
    pub fn set_sort_pool(&mut self, sort: bool) {
        self.sort_pool = sort;
    }

    /// Replaces the candidate pool. A focused session refreshes immediately.
    pub fn set_pool(&mut self, mut pool: Vec<String>) -> Option<Action> {
        if self.sort_pool {
            pool.sort();
        }
        self.pool = pool;
        self.refresh_if_focused()
    }

    /// Replaces all matching options after validating them.
    pub fn set_options(&mut self, options: MatchOptions) -> Result<Option<Action>, ConfigError> {
        options.validate()?;
        self.options = options;
        Ok(self.refresh_if_focused())
    }

    /// Sets case sensitivity.
    pub fn set_case_sensitive(&mut self, case_sensitive: bool) -> Option<Action> {
        self.options.case_sensitive = case_sensitive;
        self.refresh_if_focused()
    }

    /// Sets the edit distance tolerance.
    pub fn set_max_edit_distance(&mut self, distance: usize) -> Option<Action> {
        self.options.max_edit_distance = distance;
        self.refresh_if_focused()
    }

    /// Sets the minimum query length.
    pub fn set_min_query_length(&mut self, len: usize) -> Option<Action> {
        self.options.min_query_length = len;
        self.refresh_if_focused()
    }

    /// Sets the result limit. Zero is rejected.
    pub fn set_max_results(&mut self, max: usize) -> Result<Option<Action>, ConfigError> {
        self.set_options(self.options.with_max_results(max))
    }

    /// Enables or disables suggestions.
    ///
    /// Disabling a session that is showing suggestions returns
    /// [`Action::Hide`] at once and drops back to [`SessionState::Focused`].
    /// A disabled session never shows a list and never calls
    /// `dismissed()` on blur.
    ///
    /// Enabling a focused session re-evaluates the gate against the current
    /// query, so a list can reappear without another keystroke. Setting the
    /// value the session already has is not an event and returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_autocomplete::autocomplete::{Action, Session, SessionState};
    ///
    /// let mut session = Session::new().with_pool(vec!["ciao".into(), "come".into()]);
    /// session.focus_gained();
    /// session.text_changed("ci");
    ///
    /// assert_eq!(session.set_enabled(false), Some(Action::Hide));
    /// assert_eq!(session.state(), SessionState::Focused);
    /// assert_eq!(session.text_changed("c"), None);
    ///
    /// assert!(matches!(session.set_enabled(true), Some(Action::Render(_))));
    /// assert_eq!(session.set_enabled(true), None);
    /// ```
    pub fn set_enabled(&mut self, enabled: bool) -> Option<Action> {
        if self.enabled == enabled {
            return None;
        }
        self.enabled = enabled;
        log::debug!("autocomplete session enabled={}", enabled);

        match (self.state, enabled) {
            (SessionState::Idle, _) => None,
            (_, true) => self.refresh(),
            (_, false) => self.collapse(),
        }
    }

    /// The field gained focus.
    pub fn focus_gained(&mut self) -> Option<Action> {
        if self.state == SessionState::Idle {
            self.transition(SessionState::Focused);
        }
        self.refresh()
    }

    /// The field's text changed.
    ///
    /// The query is recorded in every state but only acted upon while
    /// focused. When the gate passes and the pool has matches, the session
    /// returns [`Action::Render`] if it was not yet showing and
    /// [`Action::Rerender`] if it was. When the gate fails or nothing
    /// matches, a visible list is hidden with a single [`Action::Hide`];
    /// a session with no visible list returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_autocomplete::autocomplete::{Action, Session};
    ///
    /// let mut session = Session::new().with_pool(vec!["ciao".into(), "come".into()]);
    ///
    /// // Idle: remembered for the next focus, nothing shown.
    /// assert_eq!(session.text_changed("c"), None);
    /// assert!(matches!(session.focus_gained(), Some(Action::Render(_))));
    ///
    /// assert!(matches!(session.text_changed("co"), Some(Action::Rerender(_))));
    /// assert_eq!(session.text_changed(""), Some(Action::Hide));
    /// assert_eq!(session.text_changed(""), None);
    /// ```
    pub fn text_changed(&mut self, text: &str) -> Option<Action> {
        self.query.clear();
        self.query.push_str(text);

        if self.state == SessionState::Idle {
            log::debug!("text change while idle; no suggestions evaluated");
            return None;
        }
        self.refresh()
    }

    /// The field lost focus.
    ///
    /// Returns [`Action::Hide`] when a list is visible and `None` otherwise;
    /// either way the session ends up [`SessionState::Idle`] with no rows.
    ///
    /// While the session is enabled the delegate's `dismissed()` is called
    /// on every blur, including blurs where no list was ever shown.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_autocomplete::autocomplete::{Action, Session, SessionState};
    ///
    /// let mut session = Session::new().with_pool(vec!["stai".into()]);
    /// session.focus_gained();
    /// session.text_changed("st");
    ///
    /// assert_eq!(session.focus_lost(), Some(Action::Hide));
    /// assert_eq!(session.state(), SessionState::Idle);
    ///
    /// // Nothing was showing the second time round.
    /// session.focus_gained();
    /// session.text_changed("");
    /// assert_eq!(session.focus_lost(), None);
    /// ```
    pub fn focus_lost(&mut self) -> Option<Action> {
        let action = self.is_showing().then_some(Action::Hide);
        self.rows.clear();
        self.transition(SessionState::Idle);

        if self.enabled {
            if let Some(delegate) = self.delegate.as_mut() {
                delegate.dismissed();
            }
        }
        action
    }

    /// A visible row was chosen. Returns the row when the tap was delivered
    /// to the delegate; taps outside a visible list are ignored.
    pub fn row_tapped(&mut self, index: usize) -> Option<Row> {
        if !self.is_showing() {
            log::debug!("row {} tapped while no list is showing; ignored", index);
            return None;
        }
        let row = self.rows.get(index)?.clone();

        if let Some(delegate) = self.delegate.as_mut() {
            delegate.row_tapped(&row.text, row.index);
        }
        Some(row)
    }

    fn gate_passes(&self) -> bool {
        self.enabled && long_enough(query_length(&self.query, &self.options), &self.options)
    }

    fn refresh_if_focused(&mut self) -> Option<Action> {
        match self.state {
            SessionState::Idle => None,
            _ => self.refresh(),
        }
    }

    fn refresh(&mut self) -> Option<Action> {
        let matches = if self.gate_passes() {
            filter(self.pool.as_slice(), &self.query, &self.options)
        } else {
            Vec::new()
        };

        if matches.is_empty() {
            return self.collapse();
        }

        let rows = Row::from_matches(matches);
        self.rows = rows.clone();
        let action = if self.is_showing() {
            Action::Rerender(rows)
        } else {
            Action::Render(rows)
        };
        self.transition(SessionState::Showing);
        Some(action)
    }

    /// Falls back to `Focused`, hiding the list if one is visible.
    fn collapse(&mut self) -> Option<Action> {
        self.rows.clear();
        let was_showing = self.is_showing();
        self.transition(SessionState::Focused);
        was_showing.then_some(Action::Hide)
    }

    fn transition(&mut self, next: SessionState) {
        if self.state != next {
            log::debug!("autocomplete session {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("enabled", &self.enabled)
            .field("query", &self.query)
            .field("options", &self.options)
            .field("pool_len", &self.pool.len())
            .field("rows", &self.rows)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}
