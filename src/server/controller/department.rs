use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        department::{DepartmentDto, SaveDepartmentDto},
    },
    server::{
        error::Error,
        model::{app::AppState, principal::Principal},
        service::department::DepartmentService,
    },
};

pub static DEPARTMENT_TAG: &str = "department";

/// List all departments.
#[utoipa::path(
    get,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    responses(
        (status = 200, description = "All departments", body = Vec<DepartmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_departments(
    State(state): State<AppState>,
    _principal: Principal,
) -> Result<impl IntoResponse, Error> {
    let departments = DepartmentService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(departments)))
}

/// Create a department.
#[utoipa::path(
    post,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    request_body = SaveDepartmentDto,
    responses(
        (status = 201, description = "Department created", body = DepartmentDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 403, description = "Only super administrators manage departments", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_department(
    State(state): State<AppState>,
    principal: Principal,
    Json(input): Json<SaveDepartmentDto>,
) -> Result<impl IntoResponse, Error> {
    let department = DepartmentService::new(&state.db)
        .create(&principal, input)
        .await?;

    Ok((StatusCode::CREATED, Json(department)))
}

/// Fetch one department.
#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "The department", body = DepartmentDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_department(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let department = DepartmentService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(department)))
}

/// Update a department.
#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = i32, Path, description = "Department ID")),
    request_body = SaveDepartmentDto,
    responses(
        (status = 200, description = "Updated department", body = DepartmentDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 403, description = "Only super administrators manage departments", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_department(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i32>,
    Json(input): Json<SaveDepartmentDto>,
) -> Result<impl IntoResponse, Error> {
    let department = DepartmentService::new(&state.db)
        .update(&principal, id, input)
        .await?;

    Ok((StatusCode::OK, Json(department)))
}

/// Delete a department. Refused while assets or users still reference it.
#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 204, description = "Department deleted"),
        (status = 400, description = "Department is still referenced", body = ErrorDto),
        (status = 403, description = "Only super administrators manage departments", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_department(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    DepartmentService::new(&state.db).delete(&principal, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
