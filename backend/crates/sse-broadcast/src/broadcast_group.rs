use crate::subscriber::Delivery;
use crate::{
    BroadcastError, DeliveryConfig, DiagnosticSink, FanoutStrategy, Message, Metrics,
    MetricsTimer, NoopSink, SendReport, Subscriber, SubscriberId,
};

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::future::join_all;
use tokio::sync::RwLock;

const DEFAULT_MESSAGE_TYPE: &str = "message";

/// A named topic fanning messages out to its current members.
///
/// Membership is guarded by a single read/write lock: `join`, `leave` and
/// `close` take it exclusively, `send` and `member_count` share it. A send
/// holds the shared lock for its whole fan-out, so membership changes wait
/// for in-flight sends and every send sees a frozen member set.
///
/// A registry retires a group it is about to drop. The flag only changes
/// under the membership write lock, so a retired group never gains members
/// through the registry.
pub struct BroadcastGroup {
    name: String,
    members: RwLock<HashMap<SubscriberId, Subscriber>>,
    retired: AtomicBool,
    last_event_id: RwLock<String>,
    config: DeliveryConfig,
    sink: Arc<dyn DiagnosticSink>,
    metrics: Metrics,
}

impl BroadcastGroup {
    pub fn new(
        name: impl Into<String>,
        config: DeliveryConfig,
        sink: Arc<dyn DiagnosticSink>,
        metrics: Metrics,
    ) -> Self {
        Self {
            name: name.into(),
            members: RwLock::new(HashMap::new()),
            retired: AtomicBool::new(false),
            last_event_id: RwLock::new(String::new()),
            config,
            sink,
            metrics,
        }
    }

    /// Group with default delivery settings and a discarding sink
    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self::new(
            name,
            DeliveryConfig::default(),
            Arc::new(NoopSink),
            Metrics::new(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &DeliveryConfig {
        &self.config
    }

    /// Add a subscriber; it receives every message sent after this returns.
    pub async fn join(&self, subscriber: Subscriber) {
        let id = subscriber.id();
        let count = {
            let mut members = self.members.write().await;
            members.insert(id, subscriber);
            members.len()
        };

        self.joined(id, count);
    }

    /// Join unless the group has been retired, handing the subscriber back if so
    pub(crate) async fn try_join(&self, subscriber: Subscriber) -> Result<(), Subscriber> {
        let id = subscriber.id();
        let count = {
            let mut members = self.members.write().await;
            if self.retired.load(Ordering::SeqCst) {
                return Err(subscriber);
            }
            members.insert(id, subscriber);
            members.len()
        };

        self.joined(id, count);
        Ok(())
    }

    fn joined(&self, id: SubscriberId, count: usize) {
        self.metrics.subscriber_joined();
        self.sink.debug(format_args!(
            "Subscriber {id} joined group {} ({count} members)",
            self.name
        ));
    }

    /// Remove a subscriber and close its queue.
    ///
    /// Returns `false` when `id` is not a member, which is not an error.
    pub async fn leave(&self, id: &SubscriberId) -> bool {
        let (removed, remaining) = {
            let mut members = self.members.write().await;
            let removed = members.remove(id);
            (removed, members.len())
        };

        match removed {
            Some(subscriber) => {
                // Dropping the producer half closes the queue.
                drop(subscriber);
                self.metrics.subscribers_left(1);
                self.sink.debug(format_args!(
                    "Subscriber {id} left group {} ({remaining} remaining)",
                    self.name
                ));
                true
            }
            None => false,
        }
    }

    /// Broadcast `message` to every member.
    ///
    /// The last event id is updated before any delivery is attempted, whatever
    /// the per-member outcome. A member whose queue stays full past the
    /// delivery deadline is skipped for this message only and reported to the
    /// diagnostic sink; it stays a member.
    pub async fn send(&self, message: Message) -> SendReport {
        let timer = MetricsTimer::start(&self.metrics, &self.name);
        let message = Arc::new(message);

        {
            let mut last_event_id = self.last_event_id.write().await;
            *last_event_id = message.id().to_string();
        }

        self.metrics
            .message_published(message.event().unwrap_or(DEFAULT_MESSAGE_TYPE));

        let outcomes = {
            let members = self.members.read().await;

            match self.config.fanout {
                FanoutStrategy::Concurrent => {
                    join_all(
                        members
                            .values()
                            .map(|subscriber| self.deliver_to(subscriber, Arc::clone(&message))),
                    )
                    .await
                }
                FanoutStrategy::Sequential => {
                    let mut outcomes = Vec::with_capacity(members.len());
                    for subscriber in members.values() {
                        outcomes.push(self.deliver_to(subscriber, Arc::clone(&message)).await);
                    }
                    outcomes
                }
            }
        };

        let mut report = SendReport::default();
        for outcome in outcomes {
            match outcome {
                Delivery::Delivered => report.delivered += 1,
                Delivery::TimedOut => report.timed_out += 1,
                Delivery::Disconnected => report.disconnected += 1,
            }
        }

        timer.finish(&report);

        self.sink.debug(format_args!(
            "Sent message {} to group {} ({} delivered, {} timed out, {} disconnected)",
            message.id(),
            self.name,
            report.delivered,
            report.timed_out,
            report.disconnected
        ));

        report
    }

    async fn deliver_to(&self, subscriber: &Subscriber, message: Arc<Message>) -> Delivery {
        let outcome = subscriber
            .deliver(message, self.config.delivery_timeout)
            .await;

        match outcome {
            Delivery::Delivered => {}
            Delivery::TimedOut => {
                let timeout_ms =
                    u64::try_from(self.config.delivery_timeout.as_millis()).unwrap_or(u64::MAX);
                let error = BroadcastError::delivery_timeout(subscriber.id(), timeout_ms);
                self.sink
                    .warn(format_args!("Group {}: {error}", self.name));
            }
            Delivery::Disconnected => {
                let error = BroadcastError::subscriber_gone(subscriber.id());
                self.sink.error("delivery", &error);
            }
        }

        outcome
    }

    /// Remove and close every member. The group stays usable afterwards.
    ///
    /// Returns the number of members that were closed.
    pub async fn close(&self) -> usize {
        let closed = {
            let mut members = self.members.write().await;
            std::mem::take(&mut *members)
        };

        self.closed(closed)
    }

    /// Close every member and refuse registry joins from now on
    pub(crate) async fn retire(&self) -> usize {
        let closed = {
            let mut members = self.members.write().await;
            self.retired.store(true, Ordering::SeqCst);
            std::mem::take(&mut *members)
        };

        self.closed(closed)
    }

    /// Retire the group if it has no members. Returns whether it is retired.
    pub(crate) async fn retire_if_empty(&self) -> bool {
        let members = self.members.write().await;
        if members.is_empty() {
            self.retired.store(true, Ordering::SeqCst);
        }
        self.retired.load(Ordering::SeqCst)
    }

    pub(crate) fn is_retired(&self) -> bool {
        self.retired.load(Ordering::SeqCst)
    }

    fn closed(&self, closed: HashMap<SubscriberId, Subscriber>) -> usize {
        let count = closed.len();
        drop(closed);

        if count > 0 {
            self.metrics.subscribers_left(count);
        }
        self.sink.info(format_args!(
            "Closed group {} ({count} subscribers disconnected)",
            self.name
        ));

        count
    }

    /// Current number of members; may be stale as soon as it returns
    pub async fn member_count(&self) -> usize {
        self.members.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.members.read().await.is_empty()
    }

    pub async fn is_member(&self, id: &SubscriberId) -> bool {
        self.members.read().await.contains_key(id)
    }

    /// Identifier of the most recently sent message, empty before the first send
    pub async fn last_event_id(&self) -> String {
        self.last_event_id.read().await.clone()
    }
}

impl std::fmt::Debug for BroadcastGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BroadcastGroup")
            .field("name", &self.name)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
