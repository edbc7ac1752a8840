use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, window::EditWindowDto},
    server::{
        error::Error,
        model::{app::AppState, principal::Principal},
        service::window::WindowService,
    },
};

pub static WINDOW_TAG: &str = "edit-window";

/// Read the configured audit window, if any.
#[utoipa::path(
    get,
    path = "/api/edit-window",
    tag = WINDOW_TAG,
    responses(
        (status = 200, description = "The configured window", body = EditWindowDto),
        (status = 404, description = "No window configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_edit_window(
    State(state): State<AppState>,
    _principal: Principal,
) -> Result<impl IntoResponse, Error> {
    match WindowService::new(&state.db).get().await? {
        Some(window) => Ok((StatusCode::OK, Json(window)).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "No edit window configured".to_string(),
            }),
        )
            .into_response()),
    }
}

/// Set or replace the audit window (super administrator only).
#[utoipa::path(
    put,
    path = "/api/edit-window",
    tag = WINDOW_TAG,
    request_body = EditWindowDto,
    responses(
        (status = 200, description = "The stored window", body = EditWindowDto),
        (status = 400, description = "Window starts after it ends", body = ErrorDto),
        (status = 403, description = "Only super administrators set the window", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_edit_window(
    State(state): State<AppState>,
    principal: Principal,
    Json(input): Json<EditWindowDto>,
) -> Result<impl IntoResponse, Error> {
    let window = WindowService::new(&state.db).set(&principal, input).await?;

    Ok((StatusCode::OK, Json(window)))
}
