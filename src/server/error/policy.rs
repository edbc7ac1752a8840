use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Principal lacks the role or department rights for the requested scope,
/// or the edit-window restriction applies. Never retried automatically.
#[derive(Error, Debug)]
pub enum AuthorizationError {
    #[error("Request carries no authenticated principal")]
    MissingPrincipal,
    #[error("Principal ID {0} is unknown")]
    UnknownPrincipal(i32),
    #[error("Role does not permit this operation")]
    RoleForbidden,
    #[error("Resource belongs to a different department")]
    OutsideDepartment,
    #[error("Asset {asset_id} was already edited by this principal during the active audit window")]
    EditWindowExhausted { asset_id: i32 },
}

impl IntoResponse for AuthorizationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::MissingPrincipal | Self::UnknownPrincipal(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::FORBIDDEN,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
