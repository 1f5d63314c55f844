use std::fmt::Write;
use std::time::Duration;

/// A labeled message fanned out to every member of a broadcast group.
///
/// The identifier is opaque to the group; it is only remembered as the
/// group's last event id once the message has been sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: String,
    data: String,
    event: Option<String>,
    retry: Option<Duration>,
}

impl Message {
    pub fn new(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
            event: None,
            retry: None,
        }
    }

    /// Attach a type label (`event:` field on the wire)
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Attach a reconnection hint for the receiver
    pub fn with_retry(mut self, retry: Duration) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn event(&self) -> Option<&str> {
        self.event.as_deref()
    }

    pub fn retry(&self) -> Option<Duration> {
        self.retry
    }

    /// Render this message as a single `text/event-stream` frame.
    ///
    /// Every payload line becomes its own `data:` line, where `\r\n`, `\r` and
    /// `\n` all end a line and a trailing line break yields a trailing empty
    /// `data:` line.
    /// Line breaks inside `id` and `event` are dropped so a field can never
    /// terminate the frame early.
    pub fn to_event_stream(&self) -> String {
        let mut frame = String::with_capacity(self.data.len() + self.id.len() + 32);

        if !self.id.is_empty() {
            let _ = writeln!(frame, "id: {}", single_line(&self.id));
        }

        if let Some(ref event) = self.event {
            let _ = writeln!(frame, "event: {}", single_line(event));
        }

        if let Some(retry) = self.retry {
            let _ = writeln!(frame, "retry: {}", retry.as_millis());
        }

        for line in data_lines(&self.data) {
            let _ = writeln!(frame, "data: {line}");
        }

        frame.push('\n');
        frame
    }
}

fn single_line(value: &str) -> String {
    value.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

/// Split a payload the way an event-stream parser would
fn data_lines(data: &str) -> impl Iterator<Item = &str> {
    data.split("\r\n").flat_map(|segment| segment.split(['\r', '\n']))
}
