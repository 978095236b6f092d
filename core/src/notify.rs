//! Notification bus for transient success and error messages.
//!
//! Senders never wait for or observe delivery. A bus whose feed has been
//! dropped silently discards messages.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::error::ErrorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(code: &ErrorCode, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: code.to_string(),
            description: message.into(),
        }
    }
}

/// One-way sink for notifications. Implementations must not panic.
pub trait Notifier {
    fn notify(&self, notification: Notification);

    fn notify_error(&self, code: &ErrorCode, message: &str) {
        self.notify(Notification::error(code, message));
    }

    fn notify_success(&self, title: &str, description: &str) {
        self.notify(Notification::success(title, description));
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Sending half of the bus. Cheap to clone and hand to any component.
#[derive(Debug, Clone)]
pub struct NotificationBus {
    tx: Sender<Notification>,
}

/// Receiving half of the bus, owned by whatever displays notifications.
#[derive(Debug)]
pub struct NotificationFeed {
    rx: Receiver<Notification>,
}

pub fn notification_bus() -> (NotificationBus, NotificationFeed) {
    let (tx, rx) = mpsc::channel();
    (NotificationBus { tx }, NotificationFeed { rx })
}

impl Notifier for NotificationBus {
    fn notify(&self, notification: Notification) {
        tracing::debug!(kind = ?notification.kind, title = %notification.title, "notification");
        if self.tx.send(notification).is_err() {
            tracing::trace!("notification feed closed, message dropped");
        }
    }
}

impl NotificationFeed {
    /// Everything published since the last drain, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.rx.try_iter().collect()
    }
}
