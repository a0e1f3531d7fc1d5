use crate::shared::core::primitives::DatePointId;

/// Partial content update of a time entry. Unset fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDatePoint {
    pub datepoint_id: DatePointId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub worked_date: Option<String>,
    pub worked_hours: Option<i64>,
    pub requested_at: i64,
}

impl EditDatePoint {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.worked_date.is_none()
            && self.worked_hours.is_none()
    }
}
