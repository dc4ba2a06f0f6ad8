use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::gallery_state::GalleryApp;

/// Timeout for event polling - allows periodic UI refresh for auto-hide
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl GalleryApp {
    /// Handle events and update gallery state
    pub fn handle_events(&mut self) -> io::Result<()> {
        // Poll with timeout so an auto-hidden notification disappears without input
        if event::poll(EVENT_POLL_TIMEOUT)? {
            // Check that it's a key press event to avoid duplicates
            if let Event::Key(key_event) = event::read()?
                && key_event.kind == KeyEventKind::Press
            {
                self.handle_key_event(key_event);
            }
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let result = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                Ok(())
            }
            KeyCode::Char('q') => {
                self.quit();
                Ok(())
            }
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => self.select_next(),
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => self.select_previous(),
            KeyCode::Enter | KeyCode::Char('r') => self.show_selected(),
            KeyCode::Esc | KeyCode::Char('x') => self.dismiss(),
            KeyCode::Char('a') => self.toggle_auto_hide(),
            _ => Ok(()),
        };

        if let Err(e) = result {
            log::error!("Key {:?} failed: {}", key.code, e);
        }
    }
}

#[cfg(test)]
#[path = "gallery_events_tests.rs"]
mod gallery_events_tests;
