//! Shared test utilities
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::config::Config;
    use crate::gallery::GalleryApp;
    use crate::notification::NotificationStore;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::thread;
    use std::time::Duration;

    /// Short auto-hide delay so timer-driven tests finish quickly
    pub const TEST_AUTO_HIDE: Duration = Duration::from_millis(100);

    /// Helper to create a gallery on the first story with a worker-thread store
    pub fn test_gallery(auto_hide: bool) -> GalleryApp {
        let store = NotificationStore::spawn_worker(TEST_AUTO_HIDE);
        GalleryApp::new(store, &Config::default(), 0, auto_hide)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Poll until the condition holds or one second passes
    pub fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
        for _ in 0..200 {
            if condition() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        false
    }
}
