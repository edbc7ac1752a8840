use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        status::{SaveStatusValueDto, StatusValueDto},
    },
    server::{
        error::Error,
        model::{app::AppState, principal::Principal},
        service::catalog::CatalogService,
    },
};

pub static STATUS_TAG: &str = "status";

/// List the status catalog.
#[utoipa::path(
    get,
    path = "/api/statuses",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "All catalog entries", body = Vec<StatusValueDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_statuses(
    State(state): State<AppState>,
    _principal: Principal,
) -> Result<impl IntoResponse, Error> {
    let statuses = CatalogService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(statuses)))
}

/// Add a catalog entry.
#[utoipa::path(
    post,
    path = "/api/statuses",
    tag = STATUS_TAG,
    request_body = SaveStatusValueDto,
    responses(
        (status = 201, description = "Catalog entry created", body = StatusValueDto),
        (status = 400, description = "Missing fields or duplicate value", body = ErrorDto),
        (status = 403, description = "Caller may not edit the catalog", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_status(
    State(state): State<AppState>,
    principal: Principal,
    Json(input): Json<SaveStatusValueDto>,
) -> Result<impl IntoResponse, Error> {
    let status = CatalogService::new(&state.db).create(&principal, input).await?;

    Ok((StatusCode::CREATED, Json(status)))
}

/// Fetch one catalog entry.
#[utoipa::path(
    get,
    path = "/api/statuses/{id}",
    tag = STATUS_TAG,
    params(("id" = i32, Path, description = "Status ID")),
    responses(
        (status = 200, description = "The catalog entry", body = StatusValueDto),
        (status = 404, description = "Status not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let status = CatalogService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(status)))
}

/// Update a catalog entry.
#[utoipa::path(
    put,
    path = "/api/statuses/{id}",
    tag = STATUS_TAG,
    params(("id" = i32, Path, description = "Status ID")),
    request_body = SaveStatusValueDto,
    responses(
        (status = 200, description = "Updated catalog entry", body = StatusValueDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 403, description = "Caller may not edit the catalog", body = ErrorDto),
        (status = 404, description = "Status not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_status(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i32>,
    Json(input): Json<SaveStatusValueDto>,
) -> Result<impl IntoResponse, Error> {
    let status = CatalogService::new(&state.db)
        .update(&principal, id, input)
        .await?;

    Ok((StatusCode::OK, Json(status)))
}

/// Delete a catalog entry. No referential check is performed against assets
/// still using the value.
#[utoipa::path(
    delete,
    path = "/api/statuses/{id}",
    tag = STATUS_TAG,
    params(("id" = i32, Path, description = "Status ID")),
    responses(
        (status = 204, description = "Catalog entry deleted"),
        (status = 403, description = "Caller may not edit the catalog", body = ErrorDto),
        (status = 404, description = "Status not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_status(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    CatalogService::new(&state.db).delete(&principal, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
