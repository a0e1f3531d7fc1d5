use crate::modules::timesheets::core::access::{Capability, ensure};
use crate::modules::timesheets::core::actor::Role;
use crate::modules::timesheets::core::errors::DecideError;
use crate::modules::timesheets::use_cases::context::RequestContext;
use crate::modules::timesheets::use_cases::end_lifecycle::command::EndLifecycle;
use crate::modules::timesheets::use_cases::end_lifecycle::decision::EndDecision;

/// Only the project's manager ends things. Ending what has already ended is accepted
/// without a write.
pub fn decide_end(
    context: &RequestContext,
    command: &EndLifecycle,
) -> Result<EndDecision, DecideError> {
    let RequestContext { actor, lineage } = context;
    ensure(actor, lineage, Capability::Edit)?;
    if !actor.has_role(Role::Manager) {
        return Err(DecideError::AuthorizationDenied);
    }
    let ended = match command {
        EndLifecycle::Project(_) => !lineage.project.ongoing,
        EndLifecycle::Phase(_) => lineage.lifecycle_lock().is_some(),
    };
    Ok(if ended {
        EndDecision::AlreadyEnded
    } else {
        EndDecision::End
    })
}

#[cfg(test)]
mod end_lifecycle_decide_tests {
    use super::*;
    use crate::modules::timesheets::core::actor::Actor;
    use crate::modules::timesheets::core::hierarchy::{Lineage, Project, ProjectPhase};
    use crate::shared::core::primitives::{ActorId, ProjectId};
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    fn actor(id: &str, role: Role) -> Actor {
        Actor {
            id: ActorId::from(id),
            display_name: id.to_string(),
            role: Some(role),
            hourly_rate: None,
        }
    }

    #[fixture]
    fn lineage() -> Lineage {
        let project = Project {
            id: ProjectId::from("p-1"),
            title: "Bridge".into(),
            description: String::new(),
            manager: ActorId::from("m-1"),
            workers: vec![ActorId::from("w-1")],
            clients: vec![],
            ongoing: true,
            hourly_rate: None,
            client_detail: None,
        };
        let phase = ProjectPhase::new(
            project.id.clone(),
            "Survey",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        Lineage {
            phase: Some(phase),
            ..Lineage::of_project(project)
        }
    }

    fn end_phase(lineage: &Lineage) -> EndLifecycle {
        EndLifecycle::Phase(lineage.phase.as_ref().unwrap().id.clone())
    }

    #[rstest]
    fn it_should_end_an_ongoing_phase(lineage: Lineage) {
        let context = RequestContext {
            actor: actor("m-1", Role::Manager),
            lineage: lineage.clone(),
        };
        assert_eq!(decide_end(&context, &end_phase(&lineage)), Ok(EndDecision::End));
    }

    #[rstest]
    fn it_should_accept_a_phase_that_ended_with_its_project(mut lineage: Lineage) {
        lineage.project.ongoing = false;
        let command = end_phase(&lineage);
        let context = RequestContext {
            actor: actor("m-1", Role::Manager),
            lineage,
        };
        assert_eq!(decide_end(&context, &command), Ok(EndDecision::AlreadyEnded));
    }

    #[rstest]
    fn it_should_not_let_workers_end_a_phase(lineage: Lineage) {
        let command = end_phase(&lineage);
        let context = RequestContext {
            actor: actor("w-1", Role::Worker),
            lineage,
        };
        assert_eq!(
            decide_end(&context, &command),
            Err(DecideError::AuthorizationDenied)
        );
    }
}
