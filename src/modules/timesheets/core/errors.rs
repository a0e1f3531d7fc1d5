// Caller-visible rejection kinds shared by every decision in the timesheets module.
//
// Each kind maps to its own response in the inbound adapters, so they must stay
// distinguishable without looking at the message text.

use serde::Serialize;
use std::fmt;

/// Which ended ancestor, or which sign-off, keeps a date point from being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LockReason {
    ProjectEnded,
    PhaseEnded,
    ClientApproved,
}

impl fmt::Display for LockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LockReason::ProjectEnded => "project has ended",
            LockReason::PhaseEnded => "phase has ended",
            LockReason::ClientApproved => "approved by client, cannot change",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    AuthorizationDenied,
    NotFound,
    LifecycleLocked,
    ValidationFailed,
    NotApplicable,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::AuthorizationDenied => "AUTHORIZATION_DENIED",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::LifecycleLocked => "LIFECYCLE_LOCKED",
            ErrorKind::ValidationFailed => "VALIDATION_FAILED",
            ErrorKind::NotApplicable => "NOT_APPLICABLE",
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DecideError {
    #[error("not allowed")]
    AuthorizationDenied,

    #[error("not found")]
    NotFound,

    #[error("locked: {0}")]
    LifecycleLocked(LockReason),

    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("not applicable: {0}")]
    NotApplicable(String),
}

impl DecideError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecideError::AuthorizationDenied => ErrorKind::AuthorizationDenied,
            DecideError::NotFound => ErrorKind::NotFound,
            DecideError::LifecycleLocked(_) => ErrorKind::LifecycleLocked,
            DecideError::ValidationFailed(_) => ErrorKind::ValidationFailed,
            DecideError::NotApplicable(_) => ErrorKind::NotApplicable,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        DecideError::ValidationFailed(message.into())
    }
}
