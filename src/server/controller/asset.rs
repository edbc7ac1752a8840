use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        asset::{AssetDto, AssetSearchQuery, CreateAssetDto, UpdateAssetDto},
    },
    server::{
        error::Error,
        model::{app::AppState, principal::Principal},
        service::asset::AssetService,
    },
};

pub static ASSET_TAG: &str = "asset";

/// List assets visible to the caller.
#[utoipa::path(
    get,
    path = "/api/assets",
    tag = ASSET_TAG,
    responses(
        (status = 200, description = "Assets within the caller's visibility scope", body = Vec<AssetDto>),
        (status = 401, description = "Unknown principal", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_assets(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<impl IntoResponse, Error> {
    let assets = AssetService::new(&state.db).list(&principal).await?;

    Ok((StatusCode::OK, Json(assets)))
}

/// Register a new asset; the owner is forced to the caller.
#[utoipa::path(
    post,
    path = "/api/assets",
    tag = ASSET_TAG,
    request_body = CreateAssetDto,
    responses(
        (status = 201, description = "Asset created", body = AssetDto),
        (status = 400, description = "Missing fields or unknown status value", body = ErrorDto),
        (status = 403, description = "Caller may not create assets in this department", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_asset(
    State(state): State<AppState>,
    principal: Principal,
    Json(input): Json<CreateAssetDto>,
) -> Result<impl IntoResponse, Error> {
    let asset = AssetService::new(&state.db).create(&principal, input).await?;

    Ok((StatusCode::CREATED, Json(asset)))
}

/// Search assets by substring across registry fields and joined names.
#[utoipa::path(
    get,
    path = "/api/assets/search",
    tag = ASSET_TAG,
    params(AssetSearchQuery),
    responses(
        (status = 200, description = "Matching assets, prefix matches first", body = Vec<AssetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_assets(
    State(state): State<AppState>,
    principal: Principal,
    Query(query): Query<AssetSearchQuery>,
) -> Result<impl IntoResponse, Error> {
    let assets = AssetService::new(&state.db)
        .search(&principal, &query.q, query.department_id)
        .await?;

    Ok((StatusCode::OK, Json(assets)))
}

/// Fetch one asset with resolved display status.
#[utoipa::path(
    get,
    path = "/api/assets/{id}",
    tag = ASSET_TAG,
    params(("id" = i32, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "The asset", body = AssetDto),
        (status = 404, description = "Asset missing or outside the caller's scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_asset(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let asset = AssetService::new(&state.db).get(&principal, id).await?;

    Ok((StatusCode::OK, Json(asset)))
}

/// Partially update an asset. A department change spawns a pending
/// transfer; a status change is written directly. One request may do one or
/// the other, never both.
#[utoipa::path(
    put,
    path = "/api/assets/{id}",
    tag = ASSET_TAG,
    params(("id" = i32, Path, description = "Asset ID")),
    request_body = UpdateAssetDto,
    responses(
        (status = 200, description = "Updated asset", body = AssetDto),
        (status = 400, description = "Validation failure (combined department+status edit, unknown status)", body = ErrorDto),
        (status = 403, description = "Outside department scope or edit window exhausted", body = ErrorDto),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 409, description = "Asset already has a pending transfer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_asset(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i32>,
    Json(input): Json<UpdateAssetDto>,
) -> Result<impl IntoResponse, Error> {
    let asset = AssetService::new(&state.db)
        .update(&principal, id, input)
        .await?;

    Ok((StatusCode::OK, Json(asset)))
}

/// Hard-delete an asset (super administrator only).
#[utoipa::path(
    delete,
    path = "/api/assets/{id}",
    tag = ASSET_TAG,
    params(("id" = i32, Path, description = "Asset ID")),
    responses(
        (status = 204, description = "Asset deleted"),
        (status = 403, description = "Only super administrators may delete assets", body = ErrorDto),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_asset(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    AssetService::new(&state.db).delete(&principal, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List one department's assets, scoped to the caller.
#[utoipa::path(
    get,
    path = "/api/departments/{id}/assets",
    tag = ASSET_TAG,
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "The department's assets; empty for callers without access", body = Vec<AssetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn department_assets(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let assets = AssetService::new(&state.db)
        .list_by_department(&principal, id)
        .await?;

    Ok((StatusCode::OK, Json(assets)))
}
