use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        transfer::{CreateTransferDto, TransferDto, TransferListQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, principal::Principal},
        service::transfer::TransferService,
    },
};

pub static TRANSFER_TAG: &str = "transfer";

/// Request moving an asset to another department.
#[utoipa::path(
    post,
    path = "/api/transfers",
    tag = TRANSFER_TAG,
    request_body = CreateTransferDto,
    responses(
        (status = 201, description = "Pending transfer created", body = TransferDto),
        (status = 400, description = "Transfer to the asset's current department", body = ErrorDto),
        (status = 403, description = "Outside department scope or edit window exhausted", body = ErrorDto),
        (status = 404, description = "Asset or target department not found", body = ErrorDto),
        (status = 409, description = "Asset already has a pending transfer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_transfer(
    State(state): State<AppState>,
    principal: Principal,
    Json(input): Json<CreateTransferDto>,
) -> Result<impl IntoResponse, Error> {
    let transfer = TransferService::new(&state.db)
        .request(&principal, input)
        .await?;

    Ok((StatusCode::CREATED, Json(transfer)))
}

/// List transfers by direction and status, scoped to the caller's
/// department.
#[utoipa::path(
    get,
    path = "/api/transfers",
    tag = TRANSFER_TAG,
    params(TransferListQuery),
    responses(
        (status = 200, description = "Matching transfers, newest first", body = Vec<TransferDto>),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_transfers(
    State(state): State<AppState>,
    principal: Principal,
    Query(query): Query<TransferListQuery>,
) -> Result<impl IntoResponse, Error> {
    let transfers = TransferService::new(&state.db).list(&principal, query).await?;

    Ok((StatusCode::OK, Json(transfers)))
}

/// Approve a pending transfer, moving the asset to the target department.
#[utoipa::path(
    post,
    path = "/api/transfers/{id}/approve",
    tag = TRANSFER_TAG,
    params(("id" = i32, Path, description = "Transfer ID")),
    responses(
        (status = 200, description = "Transfer approved", body = TransferDto),
        (status = 403, description = "Caller may not resolve this transfer", body = ErrorDto),
        (status = 404, description = "Transfer missing or no longer pending", body = ErrorDto),
        (status = 409, description = "A concurrent request resolved the transfer first", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_transfer(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let transfer = TransferService::new(&state.db).approve(&principal, id).await?;

    Ok((StatusCode::OK, Json(transfer)))
}

/// Reject a pending transfer. The asset keeps its department.
#[utoipa::path(
    post,
    path = "/api/transfers/{id}/reject",
    tag = TRANSFER_TAG,
    params(("id" = i32, Path, description = "Transfer ID")),
    responses(
        (status = 200, description = "Transfer rejected", body = TransferDto),
        (status = 403, description = "Caller may not resolve this transfer", body = ErrorDto),
        (status = 404, description = "Transfer missing or no longer pending", body = ErrorDto),
        (status = 409, description = "A concurrent request resolved the transfer first", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_transfer(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let transfer = TransferService::new(&state.db).reject(&principal, id).await?;

    Ok((StatusCode::OK, Json(transfer)))
}

/// Full chronological transfer history of one asset, unscoped.
#[utoipa::path(
    get,
    path = "/api/assets/{id}/transfers",
    tag = TRANSFER_TAG,
    params(("id" = i32, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "The asset's transfer log, oldest first", body = Vec<TransferDto>),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn transfer_history(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let transfers = TransferService::new(&state.db).history(id).await?;

    Ok((StatusCode::OK, Json(transfers)))
}
