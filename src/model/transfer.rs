use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TransferDto {
    pub id: i32,
    pub asset_id: i32,
    pub from_department_id: Option<i32>,
    pub to_department_id: i32,
    pub requested_by: i32,
    /// `pending`, `approved`, or `rejected`.
    pub status: String,
    pub note: Option<String>,
    pub requested_at: NaiveDateTime,
    pub approved_by: Option<i32>,
    pub approved_at: Option<NaiveDateTime>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateTransferDto {
    pub asset_id: i32,
    pub to_department_id: i32,
    pub note: Option<String>,
}

/// Direction of a transfer relative to a department.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransferDirection {
    /// Transfers moving assets into the department.
    Incoming,
    /// Transfers moving assets out of the department.
    Outgoing,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct TransferListQuery {
    pub direction: Option<TransferDirection>,
    /// Filter by transfer status (`pending`, `approved`, `rejected`).
    pub status: Option<String>,
    /// Explicit department filter; only honored for super administrators,
    /// other principals are always scoped to their own department.
    pub department_id: Option<i32>,
}
