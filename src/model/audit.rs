use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuditDto {
    pub id: i32,
    pub asset_id: i32,
    pub user_id: i32,
    pub department_id: Option<i32>,
    pub status: String,
    pub note: Option<String>,
    pub checked_at: NaiveDateTime,
    pub confirmed: bool,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateAuditDto {
    pub asset_id: i32,
    pub status: String,
    pub note: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConfirmAuditsDto {
    pub ids: Vec<i32>,
}

/// Result of a batch confirmation; already-confirmed rows are skipped, so
/// `confirmed` may be smaller than the number of ids submitted.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConfirmedDto {
    pub confirmed: u64,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct AuditListQuery {
    pub department_id: Option<i32>,
    pub asset_id: Option<i32>,
    pub confirmed: Option<bool>,
    /// 1-based page number, defaults to 1.
    pub page: Option<u64>,
    /// Page size, defaults to 25, capped at 100.
    pub per_page: Option<u64>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuditPageDto {
    pub audits: Vec<AuditDto>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}
