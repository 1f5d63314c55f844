/// Aggregate outcome of one send across the group's members
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendReport {
    /// Members whose queue accepted the message
    pub delivered: usize,
    /// Members that did not free queue space before the deadline
    pub timed_out: usize,
    /// Members whose consumer had already dropped its queue
    pub disconnected: usize,
}

impl SendReport {
    /// Number of members the send was attempted for
    pub fn attempted(&self) -> usize {
        self.delivered + self.timed_out + self.disconnected
    }
}
