//! Severity and placement types for notifications

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::NotificationError;
use crate::theme;

/// Notification severity - determines style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Errors and failures (red)
    Danger,
    /// Confirmations of successful operations (green)
    Success,
    /// Potential issues (yellow)
    Warning,
    /// General information (blue)
    Info,
}

impl MessageType {
    pub const ALL: [MessageType; 4] = [
        MessageType::Danger,
        MessageType::Success,
        MessageType::Warning,
        MessageType::Info,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MessageType::Danger => "danger",
            MessageType::Success => "success",
            MessageType::Warning => "warning",
            MessageType::Info => "info",
        }
    }

    /// Get the style for this message type
    pub fn style(self) -> NotificationStyle {
        let colors = match self {
            MessageType::Danger => &theme::notification::DANGER,
            MessageType::Success => &theme::notification::SUCCESS,
            MessageType::Warning => &theme::notification::WARNING,
            MessageType::Info => &theme::notification::INFO,
        };
        NotificationStyle {
            fg: colors.fg,
            bg: colors.bg,
            border: colors.border,
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = NotificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| NotificationError::UnknownMessageType(s.to_string()))
    }
}

/// Where the notification is placed on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationPosition {
    /// Full-width banner across the top
    #[default]
    Top,
    /// Toast in the bottom-right corner
    BottomRight,
    /// Toast in the top-right corner
    TopRight,
}

impl NotificationPosition {
    pub const ALL: [NotificationPosition; 3] = [
        NotificationPosition::Top,
        NotificationPosition::BottomRight,
        NotificationPosition::TopRight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationPosition::Top => "top",
            NotificationPosition::BottomRight => "bottom-right",
            NotificationPosition::TopRight => "top-right",
        }
    }
}

impl fmt::Display for NotificationPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationPosition {
    type Err = NotificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NotificationPosition::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| NotificationError::UnknownPosition(s.to_string()))
    }
}

/// Style configuration for a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationStyle {
    pub fg: ratatui::style::Color,
    pub bg: ratatui::style::Color,
    pub border: ratatui::style::Color,
}

#[cfg(test)]
#[path = "notification_types_tests.rs"]
mod notification_types_tests;
