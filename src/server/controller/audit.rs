use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        audit::{
            AuditDto, AuditListQuery, AuditPageDto, ConfirmAuditsDto, ConfirmedDto,
            CreateAuditDto,
        },
    },
    server::{
        error::Error,
        model::{app::AppState, principal::Principal},
        service::audit::AuditService,
    },
};

pub static AUDIT_TAG: &str = "audit";

/// Record an audit assertion for an asset.
#[utoipa::path(
    post,
    path = "/api/audits",
    tag = AUDIT_TAG,
    request_body = CreateAuditDto,
    responses(
        (status = 201, description = "Unconfirmed audit recorded", body = AuditDto),
        (status = 400, description = "Unknown status value", body = ErrorDto),
        (status = 403, description = "Outside department scope or edit window exhausted", body = ErrorDto),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_audit(
    State(state): State<AppState>,
    principal: Principal,
    Json(input): Json<CreateAuditDto>,
) -> Result<impl IntoResponse, Error> {
    let audit = AuditService::new(&state.db).submit(&principal, input).await?;

    Ok((StatusCode::CREATED, Json(audit)))
}

/// Page through the audit log.
#[utoipa::path(
    get,
    path = "/api/audits",
    tag = AUDIT_TAG,
    params(AuditListQuery),
    responses(
        (status = 200, description = "A page of audit records, newest first", body = AuditPageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_audits(
    State(state): State<AppState>,
    principal: Principal,
    Query(query): Query<AuditListQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = AuditService::new(&state.db).list(&principal, query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Batch-confirm audit records. Already-confirmed rows are skipped, so the
/// call is idempotent.
#[utoipa::path(
    post,
    path = "/api/audits/confirm",
    tag = AUDIT_TAG,
    request_body = ConfirmAuditsDto,
    responses(
        (status = 200, description = "Number of rows newly confirmed", body = ConfirmedDto),
        (status = 403, description = "Caller may not confirm audits", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_audits(
    State(state): State<AppState>,
    principal: Principal,
    Json(input): Json<ConfirmAuditsDto>,
) -> Result<impl IntoResponse, Error> {
    let confirmed = AuditService::new(&state.db)
        .confirm(&principal, input.ids)
        .await?;

    Ok((StatusCode::OK, Json(ConfirmedDto { confirmed })))
}
