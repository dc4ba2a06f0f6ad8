use crate::config::Config;
use crate::error::NotificationError;
use crate::notification::{
    DisplayRequest, MessageType, Notification, NotificationPosition, NotificationStore,
};

use super::stories::{STORIES, Story};

/// Story gallery: cycles through the stories and dispatches each into a store
pub struct GalleryApp {
    pub(super) store: NotificationStore,
    pub(super) selected: usize,
    pub(super) auto_hide: bool,
    pub(super) default_position: NotificationPosition,
    pub(super) should_quit: bool,
}

impl GalleryApp {
    pub fn new(
        store: NotificationStore,
        config: &Config,
        initial_story: usize,
        auto_hide: bool,
    ) -> Self {
        Self {
            store,
            selected: initial_story.min(STORIES.len() - 1),
            auto_hide,
            default_position: config.notifications.default_position,
            should_quit: false,
        }
    }

    pub fn selected_story(&self) -> &'static Story {
        &STORIES[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Snapshot of the notification currently shown by the store
    pub fn current_notification(&self) -> Option<Notification> {
        self.store.current()
    }

    /// Dispatch the selected story into the store
    pub fn show_selected(&self) -> Result<(), NotificationError> {
        let story = self.selected_story();
        log::debug!("showing story '{}'", story.name);
        self.store
            .display_status(story.request(self.default_position, self.auto_hide)?)
    }

    /// Surface a startup warning (e.g. invalid config) as a notification
    pub fn show_warning(&self, message: &str) -> Result<(), NotificationError> {
        let request = DisplayRequest::new(message, MessageType::Warning)?
            .with_position(self.default_position);
        self.store.display_status(request)
    }

    pub fn select_next(&mut self) -> Result<(), NotificationError> {
        self.selected = (self.selected + 1) % STORIES.len();
        self.show_selected()
    }

    pub fn select_previous(&mut self) -> Result<(), NotificationError> {
        self.selected = (self.selected + STORIES.len() - 1) % STORIES.len();
        self.show_selected()
    }

    pub fn toggle_auto_hide(&mut self) -> Result<(), NotificationError> {
        self.auto_hide = !self.auto_hide;
        self.show_selected()
    }

    pub fn dismiss(&self) -> Result<(), NotificationError> {
        self.store.dismiss()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
        self.store.shutdown();
    }
}

#[cfg(test)]
#[path = "gallery_state_tests.rs"]
mod gallery_state_tests;
