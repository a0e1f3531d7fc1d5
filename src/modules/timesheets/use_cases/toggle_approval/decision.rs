use crate::modules::timesheets::core::ports::DatePointWrite;

/// An accepted toggle: the write to commit and the flag value it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleDecision {
    pub write: DatePointWrite,
    pub approved: bool,
}
