//! The refresh capability handed from the list view to its descendants.
//!
//! A `RefreshHandle` only enqueues a request; the list view owns the queue
//! and turns each request into a fetch when the host polls it.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::types::CustomerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshReason {
    Manual,
    Created,
    Updated(CustomerId),
    Deleted(CustomerId),
}

#[derive(Debug, Clone)]
pub struct RefreshHandle {
    tx: Sender<RefreshReason>,
}

#[derive(Debug)]
pub struct RefreshQueue {
    rx: Receiver<RefreshReason>,
}

pub fn refresh_channel() -> (RefreshHandle, RefreshQueue) {
    let (tx, rx) = mpsc::channel();
    (RefreshHandle { tx }, RefreshQueue { rx })
}

impl RefreshHandle {
    pub fn request(&self, reason: RefreshReason) {
        tracing::debug!(?reason, "refresh requested");
        if self.tx.send(reason).is_err() {
            tracing::debug!(?reason, "list view gone, refresh request dropped");
        }
    }
}

impl RefreshQueue {
    pub fn drain(&self) -> Vec<RefreshReason> {
        self.rx.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_request_is_queued() {
        let (handle, queue) = refresh_channel();
        let child = handle.clone();
        handle.request(RefreshReason::Created);
        child.request(RefreshReason::Deleted(4));

        assert_eq!(
            queue.drain(),
            vec![RefreshReason::Created, RefreshReason::Deleted(4)]
        );
        assert!(queue.drain().is_empty());
    }
}
