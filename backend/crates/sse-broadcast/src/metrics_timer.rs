use crate::{Metrics, SendReport};

use std::time::Instant;

/// Measures one fan-out of a named group; `finish` records the outcome
/// and latency under that group's label.
pub struct MetricsTimer<'a> {
    metrics: &'a Metrics,
    group: &'a str,
    started: Instant,
}

impl<'a> MetricsTimer<'a> {
    pub fn start(metrics: &'a Metrics, group: &'a str) -> Self {
        Self {
            metrics,
            group,
            started: Instant::now(),
        }
    }

    pub fn finish(self, report: &SendReport) {
        self.metrics
            .send_completed(self.group, report, self.started.elapsed());
    }
}
