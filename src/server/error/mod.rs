//! Error types for the Custodian server.
//!
//! Each domain has its own `thiserror` enum with an `IntoResponse`
//! implementation mapping it to the HTTP status the failure class carries:
//! validation 400, authorization 401/403, not-found 404, conflict 409.
//! Everything else is logged and surfaced as a generic 500.

pub mod config;
pub mod policy;
pub mod validation;
pub mod workflow;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError,
        policy::AuthorizationError,
        validation::ValidationError,
        workflow::{ConflictError, NotFoundError},
    },
};

/// Main error type for the Custodian server.
///
/// Aggregates the domain error enums and external library errors into a
/// single type so handlers can return `Result<_, Error>` and rely on `?`
/// conversions via `#[from]`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Malformed or rule-violating input; never retried.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Principal lacks the role/department rights for the requested scope.
    #[error(transparent)]
    AuthorizationError(#[from] AuthorizationError),
    /// Target record is missing or no longer in the expected state.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// A concurrent transaction won the race for the target row.
    #[error(transparent)]
    ConflictError(#[from] ConflictError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::AuthorizationError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            Self::ConflictError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error for debugging but returns a generic message to the
/// client so internal details never leak across the API boundary.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
