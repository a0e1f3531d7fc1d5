use crate::modules::timesheets::core::errors::{DecideError, LockReason};
use crate::modules::timesheets::core::ports::StoreError;
use crate::shared::core::primitives::ActorId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("domain rejected: {0}")]
    Rejected(#[from] DecideError),

    #[error("concurrent update: {0}")]
    Conflict(StoreError),

    #[error("store failure: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ApplicationError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::VersionMismatch { .. } => ApplicationError::Conflict(error),
            StoreError::Closed(reason) => DecideError::LifecycleLocked(reason).into(),
            StoreError::Missing(_) => DecideError::NotFound.into(),
            StoreError::Backend(_) => ApplicationError::Store(error),
        }
    }
}

impl ApplicationError {
    pub fn code(&self) -> &'static str {
        match self {
            ApplicationError::Rejected(reason) => reason.kind().code(),
            ApplicationError::Conflict(_) => "CONFLICT",
            ApplicationError::Store(_) => "STORE_FAILURE",
        }
    }

    pub fn locked(reason: LockReason) -> Self {
        DecideError::LifecycleLocked(reason).into()
    }
}

/// Logs a failed operation at the level its error deserves.
pub fn trace_failure(operation: &'static str, actor_id: &ActorId, error: &ApplicationError) {
    match error {
        ApplicationError::Rejected(reason) => {
            tracing::warn!(operation, actor_id = %actor_id, code = reason.kind().code(), "rejected: {reason}");
        }
        ApplicationError::Conflict(cause) => {
            tracing::warn!(operation, actor_id = %actor_id, "lost a concurrent update: {cause}");
        }
        ApplicationError::Store(cause) => {
            tracing::error!(operation, actor_id = %actor_id, "store failure: {cause}");
        }
    }
}
