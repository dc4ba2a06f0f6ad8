//! Story definitions for the gallery
//!
//! One story per visual variant of the notification: each message type at the
//! default position, then each corner position.

use crate::error::NotificationError;
use crate::notification::{DisplayRequest, MessageType, NotificationPosition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    /// Name used on the command line
    pub name: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub message_type: MessageType,
    /// None = the configured default position
    pub position: Option<NotificationPosition>,
}

pub const STORIES: [Story; 6] = [
    Story {
        name: "error",
        title: "Error Notification",
        message: "An error occurred while processing your request.",
        message_type: MessageType::Danger,
        position: None,
    },
    Story {
        name: "success",
        title: "Success Notification",
        message: "Your changes have been saved successfully!",
        message_type: MessageType::Success,
        position: None,
    },
    Story {
        name: "warning",
        title: "Warning Notification",
        message: "Your session will expire in 5 minutes.",
        message_type: MessageType::Warning,
        position: None,
    },
    Story {
        name: "info",
        title: "Info Notification",
        message: "A new version of the platform is available.",
        message_type: MessageType::Info,
        position: None,
    },
    Story {
        name: "bottom-right",
        title: "Bottom Right Position",
        message: "This is a toast-style notification",
        message_type: MessageType::Success,
        position: Some(NotificationPosition::BottomRight),
    },
    Story {
        name: "top-right",
        title: "Top Right Position",
        message: "Top-right positioned notification",
        message_type: MessageType::Info,
        position: Some(NotificationPosition::TopRight),
    },
];

impl Story {
    pub fn resolved_position(
        &self,
        default_position: NotificationPosition,
    ) -> NotificationPosition {
        self.position.unwrap_or(default_position)
    }

    /// Build the display request this story dispatches
    pub fn request(
        &self,
        default_position: NotificationPosition,
        auto_hide: bool,
    ) -> Result<DisplayRequest, NotificationError> {
        Ok(DisplayRequest::new(self.message, self.message_type)?
            .with_position(self.resolved_position(default_position))
            .with_auto_hide(auto_hide))
    }
}

/// Index of the story with the given command-line name
pub fn find_story(name: &str) -> Option<usize> {
    STORIES.iter().position(|s| s.name == name)
}

/// clap value parser for `--story`
pub fn parse_story(name: &str) -> Result<usize, String> {
    find_story(name).ok_or_else(|| {
        let names: Vec<&str> = STORIES.iter().map(|s| s.name).collect();
        format!(
            "unknown story '{}' (expected one of: {})",
            name,
            names.join(", ")
        )
    })
}
