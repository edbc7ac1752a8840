use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        location::{LocationDto, SaveLocationDto},
    },
    server::{
        error::Error,
        model::{app::AppState, principal::Principal},
        service::location::LocationService,
    },
};

pub static LOCATION_TAG: &str = "location";

/// List all locations.
#[utoipa::path(
    get,
    path = "/api/locations",
    tag = LOCATION_TAG,
    responses(
        (status = 200, description = "All locations", body = Vec<LocationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_locations(
    State(state): State<AppState>,
    _principal: Principal,
) -> Result<impl IntoResponse, Error> {
    let locations = LocationService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(locations)))
}

/// Create a location.
#[utoipa::path(
    post,
    path = "/api/locations",
    tag = LOCATION_TAG,
    request_body = SaveLocationDto,
    responses(
        (status = 201, description = "Location created", body = LocationDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 403, description = "Only super administrators manage locations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_location(
    State(state): State<AppState>,
    principal: Principal,
    Json(input): Json<SaveLocationDto>,
) -> Result<impl IntoResponse, Error> {
    let location = LocationService::new(&state.db)
        .create(&principal, input)
        .await?;

    Ok((StatusCode::CREATED, Json(location)))
}

/// Fetch one location.
#[utoipa::path(
    get,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location ID")),
    responses(
        (status = 200, description = "The location", body = LocationDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_location(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let location = LocationService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(location)))
}

/// Update a location.
#[utoipa::path(
    put,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location ID")),
    request_body = SaveLocationDto,
    responses(
        (status = 200, description = "Updated location", body = LocationDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 403, description = "Only super administrators manage locations", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_location(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i32>,
    Json(input): Json<SaveLocationDto>,
) -> Result<impl IntoResponse, Error> {
    let location = LocationService::new(&state.db)
        .update(&principal, id, input)
        .await?;

    Ok((StatusCode::OK, Json(location)))
}

/// Delete a location. Refused while assets still reference it.
#[utoipa::path(
    delete,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location ID")),
    responses(
        (status = 204, description = "Location deleted"),
        (status = 400, description = "Location is still referenced", body = ErrorDto),
        (status = 403, description = "Only super administrators manage locations", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_location(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    LocationService::new(&state.db).delete(&principal, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
