use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::app_state::App;
use crate::navigation::{NavGuards, NavKey, nav_key, transition};

/// Timeout for event polling; also the granularity of the debounce tick
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

impl App {
    /// Advance timers, then wait briefly for one terminal event
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.tick();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_event(key);
                }
                Event::Paste(text) => self.handle_paste_event(&text),
                Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                Event::Resize(_, _) => self.needs_render = true,
                _ => {}
            }
        }

        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.needs_render = true;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Submission reads the navigation state as it is, before any transition
        if key.code == KeyCode::Enter {
            self.submit();
            return;
        }

        if self.navigate(nav_key(&key)) {
            return;
        }

        self.input.handle_key(key);
        self.sync_search();
    }

    /// Pasted text behaves like typing a key the navigation doesn't handle
    pub fn handle_paste_event(&mut self, text: &str) {
        self.needs_render = true;

        self.navigate(NavKey::Other);
        self.input.insert_text(text);
        self.sync_search();
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            self.needs_render = true;
            self.click_recent_keyword(mouse.column, mouse.row);
        }
    }

    /// Run the navigation state machine. Returns true if it consumed the key.
    fn navigate(&mut self, key: NavKey) -> bool {
        let guards = NavGuards {
            item_count: self.search.suggestions().len(),
            // Terminals deliver composed text only, never in-progress compositions
            composing: false,
        };

        let next = transition(self.nav, key, guards);

        #[cfg(debug_assertions)]
        if next.state != self.nav {
            log::debug!("Navigation {:?} -> {:?} via {:?}", self.nav, next.state, key);
        }

        self.nav = next.state;
        self.apply_nav_effects(&next.effects);
        if next.consumed {
            self.sync_search();
        }
        next.consumed
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
