// JSON seed for the in memory entity store.
//
// Purpose
// - Give local runs and tests a populated hierarchy without an identity subsystem.
//
// Boundaries
// - Actors carry group names as the identity subsystem would hand them over. They are
//   resolved to a single role here.
// - Phases and projects marked as ended are closed after their date points are written,
//   so the seed may contain entries of ended phases.

use crate::modules::timesheets::core::actor::{Actor, Role};
use crate::modules::timesheets::core::hierarchy::{
    ClientDetail, DatePoint, Project, ProjectPhase, Task,
};
use crate::modules::timesheets::core::phase_index::PhaseDateIndex;
use crate::modules::timesheets::core::ports::{DatePointWrite, EntityStore, StoreError};
use crate::shared::core::primitives::{ActorId, DatePointId, PhaseId, ProjectId, TaskId};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed seed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("seed rejected by store: {0}")]
    Store(#[from] StoreError),
}

fn ongoing() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedActor {
    pub id: ActorId,
    pub display_name: String,
    #[serde(default)]
    pub groups: Vec<String>,
    pub hourly_rate: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedTask {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedPhase {
    pub id: PhaseId,
    pub title: String,
    pub created_on: NaiveDate,
    #[serde(default = "ongoing")]
    pub ongoing: bool,
    #[serde(default)]
    pub tasks: Vec<SeedTask>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedProject {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub manager: ActorId,
    #[serde(default)]
    pub workers: Vec<ActorId>,
    #[serde(default)]
    pub clients: Vec<ActorId>,
    pub hourly_rate: Option<u32>,
    pub client_detail: Option<ClientDetail>,
    #[serde(default = "ongoing")]
    pub ongoing: bool,
    #[serde(default)]
    pub phases: Vec<SeedPhase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedDatePoint {
    pub id: DatePointId,
    pub task_id: TaskId,
    pub worker: ActorId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub worked_date: NaiveDate,
    pub worked_hours: u8,
    #[serde(default)]
    pub approved_by_manager: bool,
    #[serde(default)]
    pub approved_by_client: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub actors: Vec<SeedActor>,
    #[serde(default)]
    pub projects: Vec<SeedProject>,
    #[serde(default)]
    pub datepoints: Vec<SeedDatePoint>,
}

impl Seed {
    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub async fn load_into<S>(self, store: &S) -> Result<(), SeedError>
    where
        S: EntityStore + ?Sized,
    {
        let actor_count = self.actors.len();
        let project_count = self.projects.len();
        let datepoint_count = self.datepoints.len();

        for actor in self.actors {
            let role = Role::resolve(actor.groups.iter().map(String::as_str));
            store
                .save_actor(Actor {
                    id: actor.id,
                    display_name: actor.display_name,
                    role,
                    hourly_rate: actor.hourly_rate,
                })
                .await?;
        }

        let mut ended_phases = Vec::new();
        let mut ended_projects = Vec::new();
        for project in self.projects {
            store
                .save_project(Project {
                    id: project.id.clone(),
                    title: project.title,
                    description: project.description,
                    manager: project.manager,
                    workers: project.workers,
                    clients: project.clients,
                    ongoing: true,
                    hourly_rate: project.hourly_rate,
                    client_detail: project.client_detail,
                })
                .await?;
            for phase in project.phases {
                store
                    .insert_phase(ProjectPhase {
                        id: phase.id.clone(),
                        project_id: project.id.clone(),
                        title: phase.title,
                        ongoing: true,
                        index: PhaseDateIndex::new(phase.created_on),
                    })
                    .await?;
                for task in phase.tasks {
                    store
                        .insert_task(Task {
                            id: task.id,
                            phase_id: phase.id.clone(),
                            title: task.title,
                            description: task.description,
                        })
                        .await?;
                }
                if !phase.ongoing {
                    ended_phases.push(phase.id);
                }
            }
            if !project.ongoing {
                ended_projects.push(project.id);
            }
        }

        for entry in self.datepoints {
            let at = entry
                .worked_date
                .and_time(NaiveTime::MIN)
                .and_utc()
                .timestamp_millis();
            store
                .commit_datepoint(DatePointWrite {
                    touch: Some(entry.worked_date),
                    expected_version: 0,
                    datepoint: DatePoint {
                        id: entry.id,
                        task_id: entry.task_id,
                        worker: entry.worker,
                        title: entry.title,
                        description: entry.description,
                        worked_date: entry.worked_date,
                        worked_hours: entry.worked_hours,
                        approved_by_manager: entry.approved_by_manager,
                        approved_by_client: entry.approved_by_client,
                        created_at: at,
                        updated_at: at,
                    },
                })
                .await?;
        }

        for phase_id in &ended_phases {
            store.end_phase(phase_id).await?;
        }
        for project_id in &ended_projects {
            store.end_project(project_id).await?;
        }

        tracing::info!(
            actors = actor_count,
            projects = project_count,
            datepoints = datepoint_count,
            "seed loaded"
        );
        Ok(())
    }
}
