use crate::modules::timesheets::adapters::outbound::in_memory_entity_store::InMemoryEntityStore;
use crate::modules::timesheets::core::phase_index::PhaseDateIndex;
use crate::modules::timesheets::core::ports::EntityStore;
use crate::modules::timesheets::use_cases::create_datepoint::handler::CreateDatePointHandler;
use crate::modules::timesheets::use_cases::edit_datepoint::command::EditDatePoint;
use crate::modules::timesheets::use_cases::edit_datepoint::handler::EditDatePointHandler;
use crate::modules::timesheets::use_cases::manage_hierarchy::command::{AddPhase, AddTask};
use crate::modules::timesheets::use_cases::manage_hierarchy::handler::HierarchyHandler;
use crate::modules::timesheets::use_cases::phase_index::handler::PhaseIndexHandler;
use crate::shared::core::primitives::{ActorId, DatePointId, PhaseId, ProjectId, TaskId, YearMonth};
use crate::tests::fixtures::commands::create_datepoint::CreateDatePointBuilder;
use crate::tests::fixtures::store::{MANAGER, OTHER_WORKER, PROJECT, WORKER, seeded};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::join;

fn date(raw: &str) -> NaiveDate {
    raw.parse().unwrap()
}

fn months(raw: &[&str]) -> Vec<YearMonth> {
    raw.iter().map(|m| m.parse().unwrap()).collect()
}

/// A fresh phase "ph-new" created on 2024-01-01 with one task "t-new" in p-1.
async fn fresh_phase() -> Arc<InMemoryEntityStore> {
    let store = Arc::new(seeded().await);
    let hierarchy = HierarchyHandler::new(store.clone());
    let manager = ActorId::from(MANAGER);
    hierarchy
        .add_phase(
            &manager,
            AddPhase {
                phase_id: PhaseId::from("ph-new"),
                project_id: ProjectId::from(PROJECT),
                title: "Resurfacing".into(),
                created_on: date("2024-01-01"),
            },
        )
        .await
        .unwrap();
    hierarchy
        .add_task(
            &manager,
            AddTask {
                task_id: TaskId::from("t-new"),
                phase_id: PhaseId::from("ph-new"),
                title: "Asphalt".into(),
                description: String::new(),
            },
        )
        .await
        .unwrap();
    store
}

#[tokio::test]
async fn the_index_follows_the_worked_dates_of_a_phase() {
    let store = fresh_phase().await;
    let index = PhaseIndexHandler::new(store.clone());
    let worker = ActorId::from(WORKER);
    let phase = PhaseId::from("ph-new");

    let untouched = index.handle(&worker, &phase).await.unwrap();
    assert_eq!(untouched.first_touched, date("2024-01-01"));
    assert!(untouched.touched_months.is_empty());

    let create = CreateDatePointHandler::new(store.clone());
    for (id, day) in [("d-jan", "2024-01-15"), ("d-mar", "2024-03-02")] {
        let command = CreateDatePointBuilder::new()
            .datepoint_id(id)
            .task_id("t-new")
            .worked_date(day)
            .build();
        create.handle(&worker, command).await.unwrap();
    }

    let snapshot = index.handle(&worker, &phase).await.unwrap();
    assert_eq!(snapshot.first_touched, date("2024-01-15"));
    assert_eq!(snapshot.last_touched, date("2024-03-02"));
    assert_eq!(snapshot.touched_months, months(&["2024-01", "2024-03"]));

    let rebuilt = PhaseDateIndex::rebuild(
        date("2024-01-01"),
        [date("2024-03-02"), date("2024-01-15")],
    );
    let stored = store.phase(&phase).await.unwrap().unwrap();
    assert_eq!(stored.index, rebuilt);
}

#[tokio::test]
async fn moving_an_entry_keeps_the_months_it_left() {
    let store = fresh_phase().await;
    let worker = ActorId::from(WORKER);
    let command = CreateDatePointBuilder::new()
        .datepoint_id("d-move")
        .task_id("t-new")
        .worked_date("2024-03-02")
        .build();
    CreateDatePointHandler::new(store.clone())
        .handle(&worker, command)
        .await
        .unwrap();

    EditDatePointHandler::new(store.clone())
        .handle(
            &worker,
            EditDatePoint {
                datepoint_id: DatePointId::from("d-move"),
                worked_date: Some("2024-02-10".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let snapshot = PhaseIndexHandler::new(store)
        .handle(&worker, &PhaseId::from("ph-new"))
        .await
        .unwrap();
    assert_eq!(snapshot.first_touched, date("2024-02-10"));
    assert_eq!(snapshot.last_touched, date("2024-03-02"));
    assert_eq!(snapshot.touched_months, months(&["2024-02", "2024-03"]));
}

#[tokio::test]
async fn concurrent_writers_on_one_phase_lose_no_touch() {
    let store = fresh_phase().await;
    store.set_delay_commit_ms(10);
    let create = CreateDatePointHandler::new(store.clone());
    let (first, second) = (ActorId::from(WORKER), ActorId::from(OTHER_WORKER));

    let january = CreateDatePointBuilder::new()
        .datepoint_id("d-a")
        .task_id("t-new")
        .worked_date("2024-01-20")
        .build();
    let june = CreateDatePointBuilder::new()
        .datepoint_id("d-b")
        .task_id("t-new")
        .worked_date("2024-06-05")
        .build();
    let (a, b) = join!(create.handle(&first, january), create.handle(&second, june));
    assert!(a.is_ok() && b.is_ok());

    let stored = store.phase(&PhaseId::from("ph-new")).await.unwrap().unwrap();
    let snapshot = stored.index.snapshot();
    assert_eq!(snapshot.first_touched, date("2024-01-20"));
    assert_eq!(snapshot.last_touched, date("2024-06-05"));
    assert_eq!(snapshot.touched_months, months(&["2024-01", "2024-06"]));
}
