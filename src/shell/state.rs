use crate::modules::timesheets::adapters::outbound::in_memory_entity_store::InMemoryEntityStore;
use crate::modules::timesheets::use_cases::authorize::handler::AuthorizeHandler;
use crate::modules::timesheets::use_cases::create_datepoint::handler::CreateDatePointHandler;
use crate::modules::timesheets::use_cases::edit_datepoint::handler::EditDatePointHandler;
use crate::modules::timesheets::use_cases::end_lifecycle::handler::EndLifecycleHandler;
use crate::modules::timesheets::use_cases::list_datepoints::handler::ListDatePointsHandler;
use crate::modules::timesheets::use_cases::list_projects::handler::ListProjectsHandler;
use crate::modules::timesheets::use_cases::manage_hierarchy::handler::HierarchyHandler;
use crate::modules::timesheets::use_cases::phase_index::handler::PhaseIndexHandler;
use crate::modules::timesheets::use_cases::summarize::handler::SummarizeHandler;
use crate::modules::timesheets::use_cases::toggle_approval::handler::ToggleApprovalHandler;
use std::sync::Arc;

type Store = InMemoryEntityStore;

#[derive(Clone)]
pub struct AppState {
    pub create_datepoint: Arc<CreateDatePointHandler<Store>>,
    pub edit_datepoint: Arc<EditDatePointHandler<Store>>,
    pub toggle_approval: Arc<ToggleApprovalHandler<Store>>,
    pub end_lifecycle: Arc<EndLifecycleHandler<Store>>,
    pub hierarchy: Arc<HierarchyHandler<Store>>,
    pub authorize: Arc<AuthorizeHandler<Store>>,
    pub phase_index: Arc<PhaseIndexHandler<Store>>,
    pub summarize: Arc<SummarizeHandler<Store>>,
    pub list_projects: Arc<ListProjectsHandler<Store>>,
    pub list_datepoints: Arc<ListDatePointsHandler<Store>>,
}

impl AppState {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            create_datepoint: Arc::new(CreateDatePointHandler::new(store.clone())),
            edit_datepoint: Arc::new(EditDatePointHandler::new(store.clone())),
            toggle_approval: Arc::new(ToggleApprovalHandler::new(store.clone())),
            end_lifecycle: Arc::new(EndLifecycleHandler::new(store.clone())),
            hierarchy: Arc::new(HierarchyHandler::new(store.clone())),
            authorize: Arc::new(AuthorizeHandler::new(store.clone())),
            phase_index: Arc::new(PhaseIndexHandler::new(store.clone())),
            summarize: Arc::new(SummarizeHandler::new(store.clone())),
            list_projects: Arc::new(ListProjectsHandler::new(store.clone())),
            list_datepoints: Arc::new(ListDatePointsHandler::new(store)),
        }
    }
}
