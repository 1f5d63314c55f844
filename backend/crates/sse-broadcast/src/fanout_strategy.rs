/// How a send walks the membership set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FanoutStrategy {
    /// Every member's delivery attempt runs at once; a send costs at most one
    /// delivery deadline no matter how many members are slow.
    #[default]
    Concurrent,
    /// Members are visited one after another; each slow member adds up to one
    /// delivery deadline to the send.
    Sequential,
}
