use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::NavKey;

/// Classify a terminal key for the navigation state machine
pub fn nav_key(key: &KeyEvent) -> NavKey {
    match key.code {
        KeyCode::Down => NavKey::Down,
        KeyCode::Up => NavKey::Up,
        KeyCode::Esc => NavKey::Escape,
        _ => NavKey::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{key, key_with_mods};
    use ratatui::crossterm::event::KeyModifiers;

    #[test]
    fn test_arrow_keys_and_escape() {
        assert_eq!(nav_key(&key(KeyCode::Down)), NavKey::Down);
        assert_eq!(nav_key(&key(KeyCode::Up)), NavKey::Up);
        assert_eq!(nav_key(&key(KeyCode::Esc)), NavKey::Escape);
    }

    #[test]
    fn test_everything_else_is_other() {
        assert_eq!(nav_key(&key(KeyCode::Enter)), NavKey::Other);
        assert_eq!(nav_key(&key(KeyCode::Char('a'))), NavKey::Other);
        assert_eq!(nav_key(&key(KeyCode::Backspace)), NavKey::Other);
        assert_eq!(nav_key(&key(KeyCode::Left)), NavKey::Other);
        assert_eq!(
            nav_key(&key_with_mods(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            NavKey::Other
        );
    }
}
