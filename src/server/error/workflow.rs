use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Target record is missing or no longer in the state the operation expects
/// (e.g. approving a transfer that was already resolved). Idempotent retries
/// are safe; callers should treat "already handled" as success.
#[derive(Error, Debug)]
pub enum NotFoundError {
    #[error("{entity} {id} not found")]
    Record { entity: &'static str, id: i32 },
    #[error("Transfer {0} is not pending")]
    TransferNotPending(i32),
}

impl NotFoundError {
    pub fn record(entity: &'static str, id: i32) -> Self {
        Self::Record { entity, id }
    }
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// A concurrent transaction changed the target row between read and write.
/// Distinct from [`NotFoundError`] so callers can re-fetch and retry.
#[derive(Error, Debug)]
pub enum ConflictError {
    #[error("Asset {0} already has a pending transfer")]
    PendingTransferExists(i32),
    #[error("Transfer {0} was resolved by a concurrent request")]
    TransferResolvedConcurrently(i32),
}

impl IntoResponse for ConflictError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
