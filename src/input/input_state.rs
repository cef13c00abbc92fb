use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::theme;

const PLACEHOLDER: &str = "Enter a condition name";

/// Search field state
///
/// The textarea holds what is displayed; `keyword` is what the user committed by typing.
/// They only differ while a suggestion's label is mirrored into the field.
pub struct InputState {
    pub textarea: TextArea<'static>,
    keyword: String,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme::input::CURSOR);
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_placeholder_style(Style::default().fg(theme::input::PLACEHOLDER));

        Self {
            textarea,
            keyword: String::new(),
        }
    }

    /// Raw text currently shown in the field
    pub fn displayed(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Last keyword committed by typing
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Apply an editing key. Typing commits the new text. Returns true if the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if is_line_break(&key) {
            return false;
        }

        let changed = self.textarea.input(key);
        if changed {
            self.commit_displayed();
        }
        changed
    }

    /// Insert pasted text at the cursor as if typed
    pub fn insert_text(&mut self, text: &str) {
        let single_line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if single_line.is_empty() {
            return;
        }
        self.textarea.insert_str(&single_line);
        self.commit_displayed();
    }

    /// Show `text` without committing it
    pub fn show(&mut self, text: &str) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }

    pub fn commit_displayed(&mut self) {
        self.keyword = self.displayed().to_string();
    }

    pub fn clear(&mut self) {
        self.keyword.clear();
        self.show("");
    }

    /// Outside auto-search the field always shows the committed keyword
    pub fn sync_display(&mut self, auto_search: bool) {
        if !auto_search && self.displayed() != self.keyword {
            let keyword = self.keyword.clone();
            self.show(&keyword);
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn is_line_break(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{key, key_with_mods};

    #[test]
    fn test_new_input_state() {
        let state = InputState::new();
        assert_eq!(state.displayed(), "");
        assert_eq!(state.keyword(), "");
    }

    #[test]
    fn test_typing_commits_keyword() {
        let mut state = InputState::new();
        assert!(state.handle_key(key(KeyCode::Char('f'))));
        assert!(state.handle_key(key(KeyCode::Char('l'))));
        assert_eq!(state.displayed(), "fl");
        assert_eq!(state.keyword(), "fl");

        assert!(state.handle_key(key(KeyCode::Backspace)));
        assert_eq!(state.keyword(), "f");
    }

    #[test]
    fn test_enter_never_breaks_line() {
        let mut state = InputState::new();
        state.handle_key(key(KeyCode::Char('a')));
        assert!(!state.handle_key(key(KeyCode::Enter)));
        assert!(!state.handle_key(key_with_mods(KeyCode::Char('m'), KeyModifiers::CONTROL)));
        assert_eq!(state.textarea.lines().len(), 1);
        assert_eq!(state.displayed(), "a");
    }

    #[test]
    fn test_show_does_not_commit() {
        let mut state = InputState::new();
        state.insert_text("flu");
        state.show("Influenza");
        assert_eq!(state.displayed(), "Influenza");
        assert_eq!(state.keyword(), "flu");
    }

    #[test]
    fn test_sync_display_restores_keyword_outside_auto_search() {
        let mut state = InputState::new();
        state.insert_text("flu");
        state.show("Influenza");

        state.sync_display(true);
        assert_eq!(state.displayed(), "Influenza");

        state.sync_display(false);
        assert_eq!(state.displayed(), "flu");
    }

    #[test]
    fn test_commit_displayed_then_typing_extends_label() {
        let mut state = InputState::new();
        state.insert_text("flu");
        state.show("Influenza");
        state.commit_displayed();
        state.handle_key(key(KeyCode::Char('e')));
        assert_eq!(state.keyword(), "Influenzae");
    }

    #[test]
    fn test_clear_empties_both() {
        let mut state = InputState::new();
        state.insert_text("flu");
        state.show("Influenza");
        state.clear();
        assert_eq!(state.displayed(), "");
        assert_eq!(state.keyword(), "");
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut state = InputState::new();
        state.insert_text("chronic\nasthma\r\n");
        assert_eq!(state.displayed(), "chronicasthma");
        assert_eq!(state.keyword(), "chronicasthma");
    }
}
