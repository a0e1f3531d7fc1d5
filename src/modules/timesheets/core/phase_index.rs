// Incrementally maintained activity index of a project phase.
//
// Purpose
// - Let calendar and report views enumerate the months with activity, and the span of
//   worked dates, without scanning every date point of the phase.
//
// Invariants
// - touched_months never shrinks.
// - first/last touched only move outward once the first touch has recalibrated them.
// - Until then both report the phase creation date.
// - Recording the same date twice leaves the index unchanged.
//
// Boundaries
// - Pure data. The entity store applies record_touch in the same write as the date point.

use crate::shared::core::primitives::YearMonth;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseDateIndex {
    created_on: NaiveDate,
    first_touched: Option<NaiveDate>,
    last_touched: Option<NaiveDate>,
    touched_months: BTreeSet<YearMonth>,
}

impl PhaseDateIndex {
    pub fn new(created_on: NaiveDate) -> Self {
        Self {
            created_on,
            first_touched: None,
            last_touched: None,
            touched_months: BTreeSet::new(),
        }
    }

    /// Reconstructs the index from the complete set of worked dates of a phase.
    pub fn rebuild(created_on: NaiveDate, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        dates
            .into_iter()
            .fold(Self::new(created_on), |mut index, date| {
                index.record_touch(date);
                index
            })
    }

    pub fn record_touch(&mut self, date: NaiveDate) {
        self.first_touched = Some(self.first_touched.map_or(date, |first| first.min(date)));
        self.last_touched = Some(self.last_touched.map_or(date, |last| last.max(date)));
        self.touched_months.insert(YearMonth::of(date));
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    pub fn first_touched(&self) -> NaiveDate {
        self.first_touched.unwrap_or(self.created_on)
    }

    pub fn last_touched(&self) -> NaiveDate {
        self.last_touched.unwrap_or(self.created_on)
    }

    pub fn is_untouched(&self) -> bool {
        self.first_touched.is_none()
    }

    pub fn touched_months(&self) -> &BTreeSet<YearMonth> {
        &self.touched_months
    }

    pub fn has_activity_in(&self, month: YearMonth) -> bool {
        self.touched_months.contains(&month)
    }

    pub fn snapshot(&self) -> PhaseIndexSnapshot {
        PhaseIndexSnapshot {
            first_touched: self.first_touched(),
            last_touched: self.last_touched(),
            touched_months: self.touched_months.iter().copied().collect(),
        }
    }
}

/// Read shape handed to calendar and report views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseIndexSnapshot {
    pub first_touched: NaiveDate,
    pub last_touched: NaiveDate,
    pub touched_months: Vec<YearMonth>,
}
