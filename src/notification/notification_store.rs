//! Notification store
//!
//! Owns a [`NotificationState`] inside a background task. Callers hold a
//! cloneable [`NotificationStore`] handle: actions are sent over a channel and
//! the current notification is published on a watch channel.
//!
//! The auto-hide timer is a sleep future rebuilt from the current deadline on
//! every turn of the task loop. Any command ends the turn, which drops the
//! pending sleep, so a display or dismiss always cancels the outstanding timer.

use std::thread;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

use super::notification_state::{DisplayRequest, Notification, NotificationState};
use crate::error::NotificationError;

#[derive(Debug)]
enum StoreCommand {
    DisplayStatus(DisplayRequest),
    Dismiss,
}

enum StoreEvent {
    Command(StoreCommand),
    Expired,
    Stopped,
}

/// Handle to a running notification store
#[derive(Debug, Clone)]
pub struct NotificationStore {
    commands: mpsc::UnboundedSender<StoreCommand>,
    state: watch::Receiver<Option<Notification>>,
    shutdown: CancellationToken,
}

impl NotificationStore {
    /// Spawn the store task on the current tokio runtime
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn spawn(auto_hide_delay: Duration) -> Self {
        let (store, worker) = Self::pair(auto_hide_delay);
        tokio::spawn(worker.run());
        store
    }

    /// Spawn the store on its own thread with a single-threaded runtime
    ///
    /// For synchronous callers such as the terminal event loop. If the runtime
    /// cannot be created the store is closed and every action returns
    /// [`NotificationError::StoreClosed`].
    pub fn spawn_worker(auto_hide_delay: Duration) -> Self {
        let (store, worker) = Self::pair(auto_hide_delay);

        thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create notification store runtime: {}", e);
                    return;
                }
            };
            rt.block_on(worker.run());
        });

        store
    }

    fn pair(auto_hide_delay: Duration) -> (Self, StoreWorker) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(None);
        let shutdown = CancellationToken::new();

        let store = Self {
            commands: command_tx,
            state: state_rx,
            shutdown: shutdown.clone(),
        };
        let worker = StoreWorker {
            state: NotificationState::with_delay(auto_hide_delay),
            commands: command_rx,
            publisher: state_tx,
            shutdown,
        };
        (store, worker)
    }

    /// Display a notification, replacing any active one
    pub fn display_status(&self, request: DisplayRequest) -> Result<(), NotificationError> {
        self.send(StoreCommand::DisplayStatus(request))
    }

    /// Clear the active notification. Safe to call when nothing is shown.
    pub fn dismiss(&self) -> Result<(), NotificationError> {
        self.send(StoreCommand::Dismiss)
    }

    fn send(&self, command: StoreCommand) -> Result<(), NotificationError> {
        if self.shutdown.is_cancelled() {
            return Err(NotificationError::StoreClosed);
        }
        self.commands
            .send(command)
            .map_err(|_| NotificationError::StoreClosed)
    }

    /// Snapshot of the active notification
    pub fn current(&self) -> Option<Notification> {
        self.state.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Receiver that is notified whenever the active notification changes
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.state.clone()
    }

    /// Stop the store task. Pending actions are discarded.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    /// Wait until the store task has exited
    pub async fn closed(&self) {
        self.commands.closed().await;
    }
}

struct StoreWorker {
    state: NotificationState,
    commands: mpsc::UnboundedReceiver<StoreCommand>,
    publisher: watch::Sender<Option<Notification>>,
    shutdown: CancellationToken,
}

impl StoreWorker {
    async fn run(mut self) {
        log::debug!(
            "notification store started (auto-hide {:?})",
            self.state.auto_hide_delay()
        );

        loop {
            let deadline = self.state.hide_deadline().map(Instant::from_std);
            let timer = time::sleep_until(deadline.unwrap_or_else(Instant::now));

            let event = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => StoreEvent::Stopped,
                command = self.commands.recv() => match command {
                    Some(command) => StoreEvent::Command(command),
                    None => StoreEvent::Stopped,
                },
                _ = timer, if deadline.is_some() => StoreEvent::Expired,
            };

            match event {
                StoreEvent::Command(StoreCommand::DisplayStatus(request)) => {
                    self.state
                        .display_status(request, Instant::now().into_std());
                    self.publish();
                }
                StoreEvent::Command(StoreCommand::Dismiss) => {
                    if self.state.dismiss() {
                        self.publish();
                    }
                }
                StoreEvent::Expired => {
                    if self.state.clear_if_expired(Instant::now().into_std()) {
                        self.publish();
                    }
                }
                StoreEvent::Stopped => break,
            }
        }

        // Clear before closing so `closed()` never observes the old record
        self.publisher.send_replace(None);
        self.commands.close();
        log::debug!("notification store stopped");
    }

    fn publish(&self) {
        self.publisher.send_replace(self.state.current().cloned());
    }
}

#[cfg(test)]
#[path = "notification_store_tests.rs"]
mod notification_store_tests;
