//! Notification state management
//!
//! Holds at most one active notification. A new display request replaces the
//! active one, together with its auto-hide deadline, so an earlier deadline can
//! never clear a later notification.

use std::time::{Duration, Instant};

use super::notification_types::{MessageType, NotificationPosition, NotificationStyle};
use crate::error::NotificationError;

/// Delay before an auto-hide notification clears itself
pub const DEFAULT_AUTO_HIDE_DELAY: Duration = Duration::from_millis(5000);

/// A validated request to display a notification
///
/// Defaults: `position = Top`, `auto_hide = true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRequest {
    message: String,
    message_type: MessageType,
    position: NotificationPosition,
    auto_hide: bool,
}

impl DisplayRequest {
    /// Create a request, rejecting blank messages
    pub fn new(
        message: impl Into<String>,
        message_type: MessageType,
    ) -> Result<Self, NotificationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(NotificationError::EmptyMessage);
        }
        Ok(Self {
            message,
            message_type,
            position: NotificationPosition::default(),
            auto_hide: true,
        })
    }

    pub fn with_position(mut self, position: NotificationPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_auto_hide(mut self, auto_hide: bool) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn position(&self) -> NotificationPosition {
        self.position
    }

    pub fn auto_hide(&self) -> bool {
        self.auto_hide
    }
}

/// The active notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub message_type: MessageType,
    pub position: NotificationPosition,
    pub auto_hide: bool,
    /// When the notification clears itself; None = stays until dismissed
    pub hide_at: Option<Instant>,
}

impl Notification {
    fn from_request(request: DisplayRequest, now: Instant, delay: Duration) -> Self {
        Self {
            hide_at: request.auto_hide.then(|| now + delay),
            message: request.message,
            message_type: request.message_type,
            position: request.position,
            auto_hide: request.auto_hide,
        }
    }

    /// Colors for this notification, always taken from its type
    pub fn style(&self) -> NotificationStyle {
        self.message_type.style()
    }

    /// Check if the auto-hide deadline has been reached
    pub fn is_expired(&self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) => now >= deadline,
            None => false,
        }
    }
}

/// Single-slot notification state machine: Hidden or Visible
#[derive(Debug)]
pub struct NotificationState {
    current: Option<Notification>,
    auto_hide_delay: Duration,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationState {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_AUTO_HIDE_DELAY)
    }

    pub fn with_delay(auto_hide_delay: Duration) -> Self {
        Self {
            current: None,
            auto_hide_delay,
        }
    }

    /// Replace the active notification, arming its deadline if auto-hide is set
    pub fn display_status(&mut self, request: DisplayRequest, now: Instant) -> &Notification {
        log::debug!(
            "display_status: type={} position={} auto_hide={}",
            request.message_type,
            request.position,
            request.auto_hide
        );
        let notification = Notification::from_request(request, now, self.auto_hide_delay);
        self.current.insert(notification)
    }

    /// Clear the active notification. Returns true if one was visible.
    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self, now: Instant) -> bool {
        if let Some(ref notif) = self.current
            && notif.is_expired(now)
        {
            log::debug!("auto-hide elapsed, clearing notification");
            self.current = None;
            return true;
        }
        false
    }

    /// Get current notification if visible
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Deadline of the pending auto-hide, if any
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.current.as_ref().and_then(|n| n.hide_at)
    }

    /// Remaining time before the pending auto-hide fires
    pub fn time_until_hide(&self, now: Instant) -> Option<Duration> {
        self.hide_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn auto_hide_delay(&self) -> Duration {
        self.auto_hide_delay
    }

    /// Get current notification message if visible (test-only)
    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
