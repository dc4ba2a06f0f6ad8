//! Notification module
//!
//! Provides a single-slot notification store that displays transient,
//! severity-classified messages. Any component in the application can hold a
//! store handle and show notifications through it.

mod notification_render;
mod notification_state;
mod notification_store;
mod notification_types;

pub use notification_render::render_notification;
pub use notification_state::{
    DEFAULT_AUTO_HIDE_DELAY, DisplayRequest, Notification, NotificationState,
};
pub use notification_store::NotificationStore;
pub use notification_types::{MessageType, NotificationPosition, NotificationStyle};
