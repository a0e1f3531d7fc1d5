// Shared test fixture for the CreateDatePoint command.

use crate::modules::timesheets::use_cases::create_datepoint::command::CreateDatePoint;
use crate::shared::core::primitives::{DatePointId, TaskId};
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDatePointDto {
    pub datepoint_id: String,
    pub task_id: String,
    pub title: String,
    pub description: String,
    pub worked_date: String,
    pub worked_hours: i64,
}

pub struct CreateDatePointBuilder {
    inner: CreateDatePoint,
}

impl Default for CreateDatePointBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateDatePointBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/json/create_datepoint.json").unwrap();
        let dto: CreateDatePointDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: CreateDatePoint {
                datepoint_id: DatePointId::from(dto.datepoint_id.as_str()),
                task_id: TaskId::from(dto.task_id.as_str()),
                title: dto.title,
                description: dto.description,
                worked_date: dto.worked_date,
                worked_hours: dto.worked_hours,
                requested_at: 1_710_000_000_000,
            },
        }
    }

    pub fn datepoint_id(mut self, v: &str) -> Self {
        self.inner.datepoint_id = DatePointId::from(v);
        self
    }

    pub fn task_id(mut self, v: &str) -> Self {
        self.inner.task_id = TaskId::from(v);
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn worked_date(mut self, v: impl Into<String>) -> Self {
        self.inner.worked_date = v.into();
        self
    }

    pub fn worked_hours(mut self, v: i64) -> Self {
        self.inner.worked_hours = v;
        self
    }

    pub fn requested_at(mut self, v: i64) -> Self {
        self.inner.requested_at = v;
        self
    }

    pub fn build(self) -> CreateDatePoint {
        self.inner
    }
}

#[cfg(test)]
mod create_datepoint_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CreateDatePointBuilder::default().build();
        assert_eq!(built.datepoint_id, DatePointId::from("d-new-0001"));
        assert_eq!(built.task_id, TaskId::from("t-1"));
        assert_eq!(built.worked_date, "2024-03-10");
        assert_eq!(built.worked_hours, 5);
        assert_eq!(built.requested_at, 1_710_000_000_000);
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = CreateDatePointBuilder::new()
            .datepoint_id("d-9")
            .task_id("t-3")
            .title("Piling")
            .description("")
            .worked_date("2024-04-01")
            .worked_hours(3)
            .requested_at(42)
            .build();
        assert_eq!(custom.datepoint_id, DatePointId::from("d-9"));
        assert_eq!(custom.task_id, TaskId::from("t-3"));
        assert_eq!(custom.title, "Piling");
        assert_eq!(custom.description, "");
        assert_eq!(custom.worked_date, "2024-04-01");
        assert_eq!(custom.worked_hours, 3);
        assert_eq!(custom.requested_at, 42);
    }
}
