use crate::{
    BroadcastGroup, DeliveryConfig, DiagnosticSink, Message, Metrics, NoopSink, SendReport,
    Subscriber, SubscriberId,
};

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Owns every broadcast group of a process, keyed by name.
///
/// Groups are created lazily on first reference and removed either
/// explicitly or once their last member leaves through the registry.
/// Cloning shares the same set of groups.
///
/// The registry lock is never held while waiting on a group's membership
/// lock, so a group stuck in a slow send cannot stall lookups of any other
/// group. A group is retired before it is dropped and retired groups refuse
/// registry joins, which keeps a subscriber from landing in a dropped group.
pub struct GroupRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    config: DeliveryConfig,
    sink: Arc<dyn DiagnosticSink>,
    metrics: Metrics,
}

struct RegistryInner {
    groups: HashMap<String, Arc<BroadcastGroup>>,
}

impl GroupRegistry {
    pub fn new(config: DeliveryConfig, sink: Arc<dyn DiagnosticSink>, metrics: Metrics) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                groups: HashMap::new(),
            })),
            config,
            sink,
            metrics,
        }
    }

    pub fn config(&self) -> &DeliveryConfig {
        &self.config
    }

    /// Create a subscriber pair sized with this registry's queue capacity
    pub fn subscriber(&self) -> crate::Result<(Subscriber, crate::SubscriberQueue)> {
        Subscriber::channel(self.config.queue_capacity)
    }

    /// Look up a group, creating it on first reference
    pub async fn group(&self, name: &str) -> Arc<BroadcastGroup> {
        if let Some(group) = self.get(name).await
            && !group.is_retired()
        {
            return group;
        }

        let mut inner = self.inner.write().await;
        if let Some(group) = inner.groups.get(name) {
            if !group.is_retired() {
                return Arc::clone(group);
            }
            self.metrics.group_changed("removed");
        }

        self.metrics.group_changed("created");
        self.sink
            .info(format_args!("Created broadcast group {name}"));
        let group = Arc::new(BroadcastGroup::new(
            name,
            self.config.clone(),
            Arc::clone(&self.sink),
            self.metrics.clone(),
        ));
        inner.groups.insert(name.to_string(), Arc::clone(&group));
        group
    }

    /// Drop a retired group unless a newer group already took its name
    async fn discard(&self, name: &str, group: &Arc<BroadcastGroup>) {
        let mut inner = self.inner.write().await;
        if let Some(current) = inner.groups.get(name)
            && Arc::ptr_eq(current, group)
        {
            inner.groups.remove(name);
            self.metrics.group_changed("removed");
            self.sink
                .info(format_args!("Removed empty broadcast group {name}"));
        }
    }

    /// Look up an existing group without creating it
    pub async fn get(&self, name: &str) -> Option<Arc<BroadcastGroup>> {
        let inner = self.inner.read().await;
        inner.groups.get(name).cloned()
    }

    pub async fn contains(&self, name: &str) -> bool {
        let inner = self.inner.read().await;
        inner.groups.contains_key(name)
    }

    /// Join `subscriber` to the named group, creating the group if needed
    pub async fn join(&self, name: &str, subscriber: Subscriber) -> Arc<BroadcastGroup> {
        let mut subscriber = subscriber;
        loop {
            let group = self.group(name).await;
            match group.try_join(subscriber).await {
                Ok(()) => return group,
                // Retired while we waited for its lock; the next lookup replaces it.
                Err(returned) => subscriber = returned,
            }
        }
    }

    /// Remove a subscriber from the named group and drop the group once empty.
    ///
    /// Returns `false` when the group or the member does not exist.
    pub async fn leave(&self, name: &str, id: &SubscriberId) -> bool {
        let Some(group) = self.get(name).await else {
            return false;
        };

        let left = group.leave(id).await;

        if left && group.retire_if_empty().await {
            self.discard(name, &group).await;
        }

        left
    }

    /// Send to the named group if it exists; unknown names create nothing
    pub async fn send(&self, name: &str, message: Message) -> Option<SendReport> {
        match self.get(name).await {
            Some(group) => Some(group.send(message).await),
            None => {
                self.sink.debug(format_args!(
                    "No broadcast group {name}, dropping message {}",
                    message.id()
                ));
                None
            }
        }
    }

    /// Close and drop a group. Returns `false` if it did not exist.
    pub async fn remove(&self, name: &str) -> bool {
        let removed = {
            let mut inner = self.inner.write().await;
            inner.groups.remove(name)
        };

        match removed {
            Some(group) => {
                group.retire().await;
                self.metrics.group_changed("removed");
                self.sink
                    .info(format_args!("Removed broadcast group {name}"));
                true
            }
            None => false,
        }
    }

    /// Tear down every group, closing all members.
    ///
    /// Returns the number of subscribers that were disconnected.
    pub async fn close_all(&self) -> usize {
        let groups: Vec<Arc<BroadcastGroup>> = {
            let mut inner = self.inner.write().await;
            inner.groups.drain().map(|(_, group)| group).collect()
        };

        let mut closed = 0;
        for group in &groups {
            closed += group.retire().await;
            self.metrics.group_changed("removed");
        }

        self.sink.info(format_args!(
            "Closed {} broadcast groups ({closed} subscribers disconnected)",
            groups.len()
        ));

        closed
    }

    /// Names of all live groups
    pub async fn names(&self) -> Vec<String> {
        let inner = self.inner.read().await;
        inner.groups.keys().cloned().collect()
    }

    /// All live groups
    pub async fn groups(&self) -> Vec<Arc<BroadcastGroup>> {
        let inner = self.inner.read().await;
        inner.groups.values().cloned().collect()
    }

    pub async fn group_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.groups.len()
    }

    /// Total members across all groups
    pub async fn subscriber_count(&self) -> usize {
        let mut total = 0;
        for group in self.groups().await {
            total += group.member_count().await;
        }
        total
    }
}

impl Default for GroupRegistry {
    fn default() -> Self {
        Self::new(
            DeliveryConfig::default(),
            Arc::new(NoopSink),
            Metrics::new(),
        )
    }
}

impl Clone for GroupRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            config: self.config.clone(),
            sink: Arc::clone(&self.sink),
            metrics: self.metrics.clone(),
        }
    }
}
