//! Notification service
//!
//! The single user-visible reporting channel: a non-blocking broadcast bus
//! of notifications. The binary subscribes a drain task and publishes run
//! outcomes; the reporting core never touches this and stays pure.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Broadcast-backed notification bus. Cloning shares the same channel;
/// publishing never blocks and never fails the caller, even with no
/// subscribers listening.
#[derive(Debug, Clone)]
pub struct NotificationService {
    sender: broadcast::Sender<Notification>,
}

impl NotificationService {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    pub fn publish(&self, level: NotificationLevel, message: impl Into<String>) {
        let notification = Notification {
            level,
            message: message.into(),
        };
        debug!(level = ?notification.level, message = %notification.message, "Notification published");
        // a send error only means nobody is subscribed
        let _ = self.sender.send(notification);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.publish(NotificationLevel::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.publish(NotificationLevel::Info, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.publish(NotificationLevel::Error, message);
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_receive_notifications() {
        let bus = NotificationService::new();
        let mut rx = bus.subscribe();

        bus.success("Event created");

        let received = rx.recv().await.unwrap();
        assert_eq!(received.level, NotificationLevel::Success);
        assert_eq!(received.message, "Event created");
    }

    #[test]
    fn test_publish_without_subscribers_does_not_panic() {
        let bus = NotificationService::new();
        bus.error("nobody is listening");
    }

    #[tokio::test]
    async fn test_clones_share_one_channel() {
        let bus = NotificationService::new();
        let mut rx = bus.subscribe();

        bus.clone().info("shared");

        assert_eq!(rx.recv().await.unwrap().message, "shared");
    }
}
