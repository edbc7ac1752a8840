use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Malformed or rule-violating input. Surfaced to the caller immediately;
/// retrying the same request can never succeed.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Status value {0:?} does not exist in the status catalog")]
    UnknownStatus(String),
    #[error("Status value {0:?} already exists in the catalog")]
    DuplicateStatusValue(String),
    #[error("Asset already belongs to department {0}")]
    SelfTransfer(i32),
    #[error("Unknown transfer status {0:?}")]
    UnknownTransferStatus(String),
    #[error("An edit may change the owning department or the status, never both")]
    CombinedDepartmentAndStatusEdit,
    #[error("Edit window must start before it ends")]
    InvalidWindowRange,
    #[error("{entity} {id} is still referenced by {count} record(s)")]
    StillReferenced {
        entity: &'static str,
        id: i32,
        count: u64,
    },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
