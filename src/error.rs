use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotificationError {
    #[error("Notification message must not be empty")]
    EmptyMessage,

    #[error("Unknown message type: {0} (expected danger, success, warning or info)")]
    UnknownMessageType(String),

    #[error("Unknown notification position: {0} (expected top, bottom-right or top-right)")]
    UnknownPosition(String),

    #[error("Notification store has been shut down")]
    StoreClosed,
}
