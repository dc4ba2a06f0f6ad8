//! global-notifications library - transient notification banner store
//!
//! This library exposes the notification store, its renderer and the story
//! gallery for testing purposes.

pub mod config;
pub mod error;
pub mod gallery;
pub mod notification;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::NotificationError;
pub use notification::{
    DisplayRequest, MessageType, Notification, NotificationPosition, NotificationStore,
};
