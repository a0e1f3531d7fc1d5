use crate::modules::timesheets::core::aggregation::SummaryScope;
use crate::shared::core::primitives::YearMonth;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summarize {
    pub scope: SummaryScope,
    pub month: Option<YearMonth>,
}
