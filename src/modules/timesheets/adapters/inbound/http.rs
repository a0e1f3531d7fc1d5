// Shared pieces of the axum inbound adapters.
//
// Responsibilities
// - Identify the acting actor from the `x-actor-id` header. Authentication happens upstream.
// - Turn application errors into JSON responses `{ "error": ..., "code": ... }` with a
//   status per error kind.

use crate::modules::timesheets::core::errors::ErrorKind;
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::ActorId;
use axum::Json;
use axum::extract::FromRequestParts;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde_json::json;

pub const ACTOR_HEADER: &str = "x-actor-id";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error("missing {ACTOR_HEADER} header")]
    MissingActor,

    #[error("malformed request: {0}")]
    Malformed(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Malformed(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Malformed(rejection.body_text())
    }
}

fn status_of(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::AuthorizationDenied => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::LifecycleLocked => StatusCode::LOCKED,
        ErrorKind::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::NotApplicable => StatusCode::CONFLICT,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Application(ApplicationError::Rejected(reason)) => {
                (status_of(reason.kind()), reason.kind().code(), reason.to_string())
            }
            ApiError::Application(error @ ApplicationError::Conflict(_)) => {
                (StatusCode::CONFLICT, error.code(), error.to_string())
            }
            ApiError::Application(error @ ApplicationError::Store(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error.code(),
                "An internal error occurred".to_string(),
            ),
            ApiError::MissingActor => {
                (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED", self.to_string())
            }
            ApiError::Malformed(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorKind::ValidationFailed.code(),
                message.clone(),
            ),
        };

        (status, Json(json!({ "error": message, "code": code }))).into_response()
    }
}

/// The actor on whose behalf the request runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActingActor(pub ActorId);

impl<S> FromRequestParts<S> for ActingActor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| ActingActor(ActorId::from(value)))
            .ok_or(ApiError::MissingActor)
    }
}
