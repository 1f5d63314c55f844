use crate::SubscriberId;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BroadcastError {
    #[error("Delivery to subscriber {subscriber} timed out after {timeout_ms}ms {location}")]
    DeliveryTimeout {
        subscriber: SubscriberId,
        timeout_ms: u64,
        location: ErrorLocation,
    },

    #[error("Subscriber {subscriber} dropped its delivery queue {location}")]
    SubscriberGone {
        subscriber: SubscriberId,
        location: ErrorLocation,
    },

    #[error("Queue capacity must be at least 1, got {capacity} {location}")]
    InvalidCapacity {
        capacity: usize,
        location: ErrorLocation,
    },
}

impl BroadcastError {
    #[track_caller]
    pub(crate) fn delivery_timeout(subscriber: SubscriberId, timeout_ms: u64) -> Self {
        Self::DeliveryTimeout {
            subscriber,
            timeout_ms,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn subscriber_gone(subscriber: SubscriberId) -> Self {
        Self::SubscriberGone {
            subscriber,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable code for metrics labels and transport error bodies
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DeliveryTimeout { .. } => "SLOW_SUBSCRIBER",
            Self::SubscriberGone { .. } => "SUBSCRIBER_GONE",
            Self::InvalidCapacity { .. } => "INVALID_CAPACITY",
        }
    }
}

pub type Result<T> = std::result::Result<T, BroadcastError>;
