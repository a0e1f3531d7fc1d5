// Approved-hours aggregation for billing and pay.
//
// Purpose
// - Sum the hours of entries that count toward totals, per bucket and overall, and
//   derive pay from the rate that applies to the scope.
//
// Rules
// - Only entries for which `counts_toward_total` holds are summed.
// - Task scope buckets by month, phase scope by task, project scope by phase,
//   worker scope by month.
// - Project billing uses the project's hourly rate. Worker pay uses the worker's own
//   rate. The two never substitute for each other.

use crate::modules::timesheets::core::approval::counts_toward_total;
use crate::modules::timesheets::core::hierarchy::{DatePoint, Project};
use crate::shared::core::primitives::{ActorId, PhaseId, ProjectId, TaskId, YearMonth};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryScope {
    Task {
        task_id: TaskId,
    },
    Phase {
        phase_id: PhaseId,
    },
    Project {
        project_id: ProjectId,
    },
    Worker {
        worker_id: ActorId,
        project_id: Option<ProjectId>,
    },
}

impl SummaryScope {
    pub fn includes(&self, entry: &PlacedDatePoint) -> bool {
        match self {
            SummaryScope::Task { task_id } => &entry.datepoint.task_id == task_id,
            SummaryScope::Phase { phase_id } => &entry.phase_id == phase_id,
            SummaryScope::Project { project_id } => &entry.project_id == project_id,
            SummaryScope::Worker {
                worker_id,
                project_id,
            } => {
                &entry.datepoint.worker == worker_id
                    && project_id.as_ref().is_none_or(|p| p == &entry.project_id)
            }
        }
    }

    fn bucket_of(&self, entry: &PlacedDatePoint) -> BucketKey {
        match self {
            SummaryScope::Task { .. } | SummaryScope::Worker { .. } => {
                BucketKey::Month(YearMonth::of(entry.datepoint.worked_date))
            }
            SummaryScope::Phase { .. } => BucketKey::Task(entry.datepoint.task_id.clone()),
            SummaryScope::Project { .. } => BucketKey::Phase(entry.phase_id.clone()),
        }
    }

    pub fn rate_source(&self) -> RateSource {
        match self {
            SummaryScope::Worker { .. } => RateSource::WorkerPay,
            _ => RateSource::ProjectBilling,
        }
    }
}

/// A date point together with its resolved phase and project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedDatePoint {
    pub datepoint: DatePoint,
    pub phase_id: PhaseId,
    pub project_id: ProjectId,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BucketKey {
    Task(TaskId),
    Phase(PhaseId),
    Month(YearMonth),
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKey::Task(id) => write!(f, "task:{id}"),
            BucketKey::Phase(id) => write!(f, "phase:{id}"),
            BucketKey::Month(month) => write!(f, "{month}"),
        }
    }
}

impl Serialize for BucketKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    ProjectBilling,
    WorkerPay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rate {
    pub source: RateSource,
    pub per_hour: Option<u32>,
}

impl Rate {
    pub fn project_billing(project: &Project) -> Self {
        Self {
            source: RateSource::ProjectBilling,
            per_hour: project.hourly_rate,
        }
    }

    pub fn worker_pay(per_hour: Option<u32>) -> Self {
        Self {
            source: RateSource::WorkerPay,
            per_hour,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub scope: SummaryScope,
    pub month: Option<YearMonth>,
    pub per_bucket_hours: BTreeMap<BucketKey, u32>,
    pub total_hours: u32,
    pub rate: Rate,
    pub total_pay: Option<u64>,
}

pub fn summarize<'a>(
    scope: &SummaryScope,
    month: Option<YearMonth>,
    entries: impl IntoIterator<Item = &'a PlacedDatePoint>,
    projects: &HashMap<ProjectId, Project>,
    rate: Rate,
) -> Summary {
    let mut per_bucket_hours = BTreeMap::new();
    let counted = entries
        .into_iter()
        .filter(|entry| scope.includes(entry))
        .filter(|entry| month.is_none_or(|m| m.contains(entry.datepoint.worked_date)))
        .filter(|entry| {
            projects
                .get(&entry.project_id)
                .is_some_and(|project| counts_toward_total(&entry.datepoint, project))
        });
    for entry in counted {
        *per_bucket_hours.entry(scope.bucket_of(entry)).or_insert(0u32) +=
            u32::from(entry.datepoint.worked_hours);
    }
    let total_hours = per_bucket_hours.values().sum::<u32>();
    Summary {
        scope: scope.clone(),
        month,
        per_bucket_hours,
        total_hours,
        rate,
        total_pay: rate.per_hour.map(|r| u64::from(total_hours) * u64::from(r)),
    }
}

#[cfg(test)]
mod aggregation_tests {
    use super::*;
    use crate::shared::core::primitives::DatePointId;
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    fn project(id: &str, clients: &[&str], rate: Option<u32>) -> Project {
        Project {
            id: ProjectId::from(id),
            title: id.to_string(),
            description: String::new(),
            manager: ActorId::from("m-1"),
            workers: vec![ActorId::from("w-1"), ActorId::from("w-2")],
            clients: clients.iter().map(|c| ActorId::from(*c)).collect(),
            ongoing: true,
            hourly_rate: rate,
            client_detail: None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn entry(
        id: &str,
        project: &str,
        phase: &str,
        task: &str,
        worker: &str,
        date: (i32, u32, u32),
        hours: u8,
        flags: (bool, bool),
    ) -> PlacedDatePoint {
        PlacedDatePoint {
            datepoint: DatePoint {
                id: DatePointId::from(id),
                task_id: TaskId::from(task),
                worker: ActorId::from(worker),
                title: id.to_string(),
                description: String::new(),
                worked_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
                worked_hours: hours,
                approved_by_manager: flags.0,
                approved_by_client: flags.1,
                created_at: 0,
                updated_at: 0,
            },
            phase_id: PhaseId::from(phase),
            project_id: ProjectId::from(project),
        }
    }

    #[fixture]
    fn projects() -> HashMap<ProjectId, Project> {
        [project("p-1", &[], Some(10)), project("p-2", &["c-1"], Some(20))]
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect()
    }

    #[fixture]
    fn entries() -> Vec<PlacedDatePoint> {
        vec![
            entry("d-1", "p-1", "ph-1", "t-1", "w-1", (2024, 3, 10), 5, (true, false)),
            entry("d-2", "p-1", "ph-1", "t-2", "w-1", (2024, 3, 11), 2, (false, false)),
            entry("d-3", "p-1", "ph-2", "t-3", "w-2", (2024, 4, 2), 4, (true, false)),
            entry("d-4", "p-2", "ph-3", "t-4", "w-1", (2024, 4, 1), 3, (true, false)),
            entry("d-5", "p-2", "ph-3", "t-4", "w-1", (2024, 4, 8), 6, (true, true)),
        ]
    }

    #[rstest]
    fn it_should_bill_a_project_per_phase(
        projects: HashMap<ProjectId, Project>,
        entries: Vec<PlacedDatePoint>,
    ) {
        let scope = SummaryScope::Project {
            project_id: ProjectId::from("p-1"),
        };
        let rate = Rate::project_billing(&projects[&ProjectId::from("p-1")]);
        let summary = summarize(&scope, None, &entries, &projects, rate);
        assert_eq!(summary.total_hours, 9);
        assert_eq!(summary.total_pay, Some(90));
        assert_eq!(summary.per_bucket_hours[&BucketKey::Phase(PhaseId::from("ph-1"))], 5);
        assert_eq!(summary.per_bucket_hours[&BucketKey::Phase(PhaseId::from("ph-2"))], 4);
    }

    #[rstest]
    fn it_should_require_client_approval_when_the_project_has_clients(
        projects: HashMap<ProjectId, Project>,
        entries: Vec<PlacedDatePoint>,
    ) {
        let scope = SummaryScope::Phase {
            phase_id: PhaseId::from("ph-3"),
        };
        let rate = Rate::project_billing(&projects[&ProjectId::from("p-2")]);
        let summary = summarize(&scope, None, &entries, &projects, rate);
        assert_eq!(summary.total_hours, 6);
        assert_eq!(summary.per_bucket_hours.len(), 1);
        assert_eq!(summary.total_pay, Some(120));
    }

    #[rstest]
    fn it_should_restrict_to_the_requested_month(
        projects: HashMap<ProjectId, Project>,
        entries: Vec<PlacedDatePoint>,
    ) {
        let scope = SummaryScope::Project {
            project_id: ProjectId::from("p-1"),
        };
        let rate = Rate::project_billing(&projects[&ProjectId::from("p-1")]);
        let summary = summarize(&scope, YearMonth::new(2024, 4), &entries, &projects, rate);
        assert_eq!(summary.total_hours, 4);
    }

    #[rstest]
    fn it_should_pay_workers_at_their_own_rate_by_month(
        projects: HashMap<ProjectId, Project>,
        entries: Vec<PlacedDatePoint>,
    ) {
        let scope = SummaryScope::Worker {
            worker_id: ActorId::from("w-1"),
            project_id: None,
        };
        let summary = summarize(&scope, None, &entries, &projects, Rate::worker_pay(Some(7)));
        assert_eq!(summary.total_hours, 11);
        assert_eq!(summary.total_pay, Some(77));
        assert_eq!(summary.rate.source, RateSource::WorkerPay);
        assert_eq!(
            summary.per_bucket_hours[&BucketKey::Month(YearMonth::new(2024, 3).unwrap())],
            5
        );
        assert_eq!(
            summary.per_bucket_hours[&BucketKey::Month(YearMonth::new(2024, 4).unwrap())],
            6
        );
    }

    #[rstest]
    fn it_should_leave_pay_empty_without_a_rate(
        projects: HashMap<ProjectId, Project>,
        entries: Vec<PlacedDatePoint>,
    ) {
        let scope = SummaryScope::Task {
            task_id: TaskId::from("t-1"),
        };
        let summary = summarize(&scope, None, &entries, &projects, Rate::worker_pay(None));
        assert_eq!(summary.total_hours, 5);
        assert_eq!(summary.total_pay, None);
    }

    #[rstest]
    fn it_should_render_bucket_keys_as_json_object_keys(
        projects: HashMap<ProjectId, Project>,
        entries: Vec<PlacedDatePoint>,
    ) {
        let scope = SummaryScope::Task {
            task_id: TaskId::from("t-1"),
        };
        let rate = Rate::project_billing(&projects[&ProjectId::from("p-1")]);
        let summary = summarize(&scope, None, &entries, &projects, rate);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["per_bucket_hours"]["2024-03"], 5);
        assert_eq!(json["rate"]["source"], "project_billing");
    }
}
