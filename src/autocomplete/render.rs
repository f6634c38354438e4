//! The contract between a session and whatever draws its suggestions.

/// One suggestion row as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Candidate text with its original casing.
    pub text: String,
    /// Position of the row in the rendered result (not in the pool).
    pub index: usize,
}

impl Row {
    pub(crate) fn from_matches(matches: Vec<String>) -> Vec<Row> {
        matches
            .into_iter()
            .enumerate()
            .map(|(index, text)| Row { text, index })
            .collect()
    }
}

/// Visibility change requested by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show the suggestion list with these rows.
    Render(Vec<Row>),
    /// Replace the rows of the already visible list.
    Rerender(Vec<Row>),
    /// Tear the list down.
    Hide,
}

impl Action {
    /// Forwards this action to a renderer.
    pub fn apply<R: Renderer + ?Sized>(self, renderer: &mut R) {
        match self {
            Action::Render(rows) => renderer.render(rows),
            Action::Rerender(rows) => renderer.rerender(rows),
            Action::Hide => renderer.hide(),
        }
    }

    /// Rows carried by the action, if any.
    pub fn rows(&self) -> Option<&[Row]> {
        match self {
            Action::Render(rows) | Action::Rerender(rows) => Some(rows),
            Action::Hide => None,
        }
    }
}

/// Draws suggestion rows. Layout and styling belong entirely to the
/// implementor.
pub trait Renderer {
    /// Shows a freshly computed list.
    fn render(&mut self, rows: Vec<Row>);

    /// Replaces the rows of a visible list. Defaults to [`Renderer::render`].
    fn rerender(&mut self, rows: Vec<Row>) {
        self.render(rows);
    }

    /// Removes the list.
    fn hide(&mut self);
}
