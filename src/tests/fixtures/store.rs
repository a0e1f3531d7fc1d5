// Shared seeded store for handler and scenario tests.
//
// The hierarchy comes from json/seed.json:
// - p-1 "Bridge inspection": manager m-1, workers w-1 and w-2, no clients, rate 10,
//   phase ph-1 with tasks t-1 and t-2, one draft entry d-1 of w-1 on t-1.
// - p-2 "Harbour wall": manager m-1, worker w-1, client c-1, rate 20,
//   phase ph-2 with task t-3.
// - m-2 and w-9 belong to no project, x-1 carries no recognised group.

use crate::modules::timesheets::adapters::outbound::in_memory_entity_store::InMemoryEntityStore;
use crate::shell::seed::Seed;
use rstest::fixture;
use std::sync::Arc;

pub const MANAGER: &str = "m-1";
pub const OTHER_MANAGER: &str = "m-2";
pub const WORKER: &str = "w-1";
pub const OTHER_WORKER: &str = "w-2";
pub const OUTSIDER: &str = "w-9";
pub const CLIENT: &str = "c-1";
pub const ROLELESS: &str = "x-1";

pub const PROJECT: &str = "p-1";
pub const PHASE: &str = "ph-1";
pub const TASK: &str = "t-1";
pub const OTHER_TASK: &str = "t-2";
pub const DATEPOINT: &str = "d-1";

pub const CLIENT_PROJECT: &str = "p-2";
pub const CLIENT_PHASE: &str = "ph-2";
pub const CLIENT_TASK: &str = "t-3";

const SEED_PATH: &str = "./src/tests/fixtures/json/seed.json";

pub async fn seeded() -> InMemoryEntityStore {
    let store = InMemoryEntityStore::new();
    Seed::from_path(SEED_PATH)
        .unwrap()
        .load_into(&store)
        .await
        .unwrap();
    store
}

#[fixture]
pub async fn seeded_store() -> Arc<InMemoryEntityStore> {
    Arc::new(seeded().await)
}
