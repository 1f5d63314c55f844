use log::{debug, warn};
use sse_broadcast::{GroupRegistry, SubscriberId};
use tokio::runtime::Handle;

/// Removes a subscriber from its channel when the owning stream is dropped.
///
/// Dropping happens when the client disconnects or the server ends the
/// response, so every exit path leaves the group.
pub struct MembershipGuard {
    registry: GroupRegistry,
    channel: String,
    subscriber: SubscriberId,
}

impl MembershipGuard {
    pub fn new(registry: GroupRegistry, channel: String, subscriber: SubscriberId) -> Self {
        Self {
            registry,
            channel,
            subscriber,
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

impl Drop for MembershipGuard {
    fn drop(&mut self) {
        let registry = self.registry.clone();
        let channel = std::mem::take(&mut self.channel);
        let id = self.subscriber;

        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if registry.leave(&channel, &id).await {
                        debug!("Subscriber {id} disconnected from {channel}");
                    }
                });
            }
            Err(_) => warn!("No runtime to remove subscriber {id} from {channel}"),
        }
    }
}
