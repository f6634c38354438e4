//! Key bindings for the autocomplete field.

use crate::key::{new_binding, with_help, with_keys_str, Binding, KeyMap};

/// Key bindings for editing the field and driving its dropdown.
#[derive(Debug, Clone)]
pub struct AutocompleteKeyMap {
    /// Move cursor one character right.
    pub character_forward: Binding,
    /// Move cursor one character left.
    pub character_backward: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Delete from start of line to cursor.
    pub delete_before_cursor: Binding,
    /// Delete from cursor to end of line.
    pub delete_after_cursor: Binding,
    /// Move to start of line.
    pub line_start: Binding,
    /// Move to end of line.
    pub line_end: Binding,
    /// Highlight the next suggestion.
    pub next_suggestion: Binding,
    /// Highlight the previous suggestion.
    pub prev_suggestion: Binding,
    /// Choose the highlighted suggestion.
    pub accept_suggestion: Binding,
    /// Leave the field.
    pub dismiss: Binding,
}

/// The default bindings.
pub fn default_key_map() -> AutocompleteKeyMap {
    AutocompleteKeyMap {
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        delete_before_cursor: new_binding(vec![with_keys_str(&["ctrl+u"])]),
        delete_after_cursor: new_binding(vec![with_keys_str(&["ctrl+k"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
        next_suggestion: new_binding(vec![
            with_keys_str(&["down", "ctrl+n"]),
            with_help("↓/ctrl+n", "next suggestion"),
        ]),
        prev_suggestion: new_binding(vec![
            with_keys_str(&["up", "ctrl+p"]),
            with_help("↑/ctrl+p", "previous suggestion"),
        ]),
        accept_suggestion: new_binding(vec![
            with_keys_str(&["enter", "tab"]),
            with_help("enter/tab", "choose"),
        ]),
        dismiss: new_binding(vec![with_keys_str(&["esc"]), with_help("esc", "dismiss")]),
    }
}

impl Default for AutocompleteKeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl KeyMap for AutocompleteKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.next_suggestion,
            &self.prev_suggestion,
            &self.accept_suggestion,
            &self.dismiss,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![
                &self.next_suggestion,
                &self.prev_suggestion,
                &self.accept_suggestion,
                &self.dismiss,
            ],
            vec![
                &self.character_forward,
                &self.character_backward,
                &self.line_start,
                &self.line_end,
            ],
            vec![
                &self.delete_character_backward,
                &self.delete_character_forward,
                &self.delete_before_cursor,
                &self.delete_after_cursor,
            ],
        ]
    }
}
