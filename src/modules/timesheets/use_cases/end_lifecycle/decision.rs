#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndDecision {
    End,
    AlreadyEnded,
}
