//! In-process publish/subscribe groups backing a server-push transport.
//!
//! A [`BroadcastGroup`] fans each [`Message`] out to the bounded queues of its
//! [`Subscriber`]s. A slow subscriber costs at most one delivery deadline per
//! message and never blocks delivery to the rest of the group. Groups are
//! owned by name in a [`GroupRegistry`]; delivery problems are reported through
//! a pluggable [`DiagnosticSink`].

pub mod broadcast_group;
pub mod delivery_config;
pub mod diagnostic_sink;
pub mod error;
pub mod fanout_strategy;
pub mod group_registry;
pub mod log_sink;
pub mod message;
pub mod metrics;
pub mod metrics_timer;
pub mod send_report;
pub mod subscriber;
pub mod subscriber_id;

pub use broadcast_group::BroadcastGroup;
pub use delivery_config::{DEFAULT_DELIVERY_TIMEOUT, DEFAULT_QUEUE_CAPACITY, DeliveryConfig};
pub use diagnostic_sink::{DiagnosticSink, NoopSink};
pub use error::{BroadcastError, Result};
pub use fanout_strategy::FanoutStrategy;
pub use group_registry::GroupRegistry;
pub use log_sink::LogSink;
pub use message::Message;
pub use metrics::Metrics;
pub use metrics_timer::MetricsTimer;
pub use send_report::SendReport;
pub use subscriber::{Subscriber, SubscriberQueue};
pub use subscriber_id::SubscriberId;

#[cfg(test)]
mod tests;
