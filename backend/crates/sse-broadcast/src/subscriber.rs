use crate::{BroadcastError, Message, Result as BroadcastErrorResult, SubscriberId};

use std::panic::Location;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::{Context, Poll};
use std::time::Duration;

use error_location::ErrorLocation;
use futures::Stream;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::{TryRecvError, TrySendError};

/// Outcome of a single bounded enqueue attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delivery {
    Delivered,
    TimedOut,
    Disconnected,
}

/// Producer half of a subscriber: the group's view of one connected receiver.
///
/// Owned by a broadcast group after `join`. Dropping it (on `leave`, `close`,
/// or group teardown) marks the subscriber closed and ends its queue.
#[derive(Debug)]
pub struct Subscriber {
    id: SubscriberId,
    sender: mpsc::Sender<Arc<Message>>,
    open: Arc<AtomicBool>,
}

/// Consumer half of a subscriber, drained by the connection layer.
#[derive(Debug)]
pub struct SubscriberQueue {
    id: SubscriberId,
    receiver: mpsc::Receiver<Arc<Message>>,
    open: Arc<AtomicBool>,
}

impl Subscriber {
    /// Create a subscriber handle with a bounded delivery queue
    #[track_caller]
    pub fn channel(capacity: usize) -> BroadcastErrorResult<(Subscriber, SubscriberQueue)> {
        if capacity == 0 {
            return Err(BroadcastError::InvalidCapacity {
                capacity,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let id = SubscriberId::new();
        let (sender, receiver) = mpsc::channel(capacity);
        let open = Arc::new(AtomicBool::new(true));

        Ok((
            Subscriber {
                id,
                sender,
                open: Arc::clone(&open),
            },
            SubscriberQueue { id, receiver, open },
        ))
    }

    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// False once closed by the group or once the consumer dropped its queue
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst) && !self.sender.is_closed()
    }

    /// Enqueue `message`, waiting at most `deadline` for queue space.
    pub(crate) async fn deliver(&self, message: Arc<Message>, deadline: Duration) -> Delivery {
        // Fast path: no timer when there is room.
        let message = match self.sender.try_send(message) {
            Ok(()) => return Delivery::Delivered,
            Err(TrySendError::Closed(_)) => return Delivery::Disconnected,
            Err(TrySendError::Full(message)) => message,
        };

        match tokio::time::timeout(deadline, self.sender.send(message)).await {
            Ok(Ok(())) => Delivery::Delivered,
            Ok(Err(_)) => Delivery::Disconnected,
            Err(_) => Delivery::TimedOut,
        }
    }
}

impl Drop for Subscriber {
    fn drop(&mut self) {
        self.open.store(false, Ordering::SeqCst);
    }
}

impl SubscriberQueue {
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// True while the producer half is still registered with a group
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Wait for the next message. Returns `None` once the subscriber has been
    /// closed and every message enqueued before closing has been drained.
    pub async fn recv(&mut self) -> Option<Arc<Message>> {
        self.receiver.recv().await
    }

    /// Take the next message without waiting
    pub fn try_recv(&mut self) -> Option<Arc<Message>> {
        match self.receiver.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Number of messages waiting to be drained
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Closed and fully drained: no message will ever arrive again
    pub fn is_finished(&self) -> bool {
        !self.is_open() && self.receiver.is_empty()
    }
}

impl Stream for SubscriberQueue {
    type Item = Arc<Message>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}
