// Field rules for date point content.

use crate::modules::timesheets::core::errors::DecideError;
use chrono::NaiveDate;

pub const MIN_WORKED_HOURS: u8 = 1;
pub const MAX_WORKED_HOURS: u8 = 12;
pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 100;

pub fn worked_hours(hours: i64) -> Result<u8, DecideError> {
    u8::try_from(hours)
        .ok()
        .filter(|h| (MIN_WORKED_HOURS..=MAX_WORKED_HOURS).contains(h))
        .ok_or_else(|| {
            DecideError::invalid(format!(
                "worked hours must be between {MIN_WORKED_HOURS} and {MAX_WORKED_HOURS}, got {hours}"
            ))
        })
}

pub fn worked_date(raw: &str) -> Result<NaiveDate, DecideError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| DecideError::invalid(format!("malformed worked date `{raw}`")))
}

pub fn title(raw: &str) -> Result<String, DecideError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DecideError::invalid("title must not be empty"));
    }
    bounded("title", trimmed, MAX_TITLE_LEN)
}

pub fn description(raw: &str) -> Result<String, DecideError> {
    bounded("description", raw.trim(), MAX_DESCRIPTION_LEN)
}

fn bounded(field: &str, value: &str, max: usize) -> Result<String, DecideError> {
    if value.chars().count() > max {
        return Err(DecideError::invalid(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(value.to_string())
}
