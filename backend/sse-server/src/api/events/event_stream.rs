use crate::{MembershipGuard, ShutdownSignal, StreamConfig};

use std::convert::Infallible;
use std::time::Duration;

use futures::Stream;
use sse_broadcast::SubscriberQueue;
use tokio::time::{Instant, Interval, MissedTickBehavior};

/// Comment line clients ignore; keeps idle connections and proxies alive
pub const KEEP_ALIVE_FRAME: &str = ":\n\n";

struct StreamState {
    queue: SubscriberQueue,
    keep_alive: Interval,
    shutdown: ShutdownSignal,
    retry: Option<Duration>,
    _membership: MembershipGuard,
}

/// Turn a subscriber queue into `text/event-stream` frames.
///
/// Yields the retry hint first, then one frame per message, with a keep-alive
/// comment whenever the queue stays idle for the configured interval. Ends when
/// the subscriber is closed and drained or on server shutdown; dropping the
/// stream leaves the channel.
pub fn event_stream(
    queue: SubscriberQueue,
    membership: MembershipGuard,
    shutdown: ShutdownSignal,
    config: &StreamConfig,
) -> impl Stream<Item = Result<String, Infallible>> + Send + use<> {
    let mut keep_alive =
        tokio::time::interval_at(Instant::now() + config.keep_alive, config.keep_alive);
    keep_alive.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let state = StreamState {
        queue,
        keep_alive,
        shutdown,
        retry: config.retry,
        _membership: membership,
    };

    futures::stream::unfold(state, |mut state| async move {
        if let Some(retry) = state.retry.take() {
            return Some((Ok(format!("retry: {}\n\n", retry.as_millis())), state));
        }

        let frame = tokio::select! {
            biased;
            _ = state.shutdown.triggered() => None,
            message = state.queue.recv() => {
                state.keep_alive.reset();
                message.map(|message| message.to_event_stream())
            }
            _ = state.keep_alive.tick() => Some(KEEP_ALIVE_FRAME.to_string()),
        };

        frame.map(|frame| (Ok(frame), state))
    })
}
