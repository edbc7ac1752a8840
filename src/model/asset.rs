use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Asset read model: registry fields joined with department/location/owner
/// names plus the display status resolved from outstanding workflow records.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssetDto {
    pub id: i32,
    pub code: String,
    pub inventory_number: Option<String>,
    pub serial_number: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub department_id: Option<i32>,
    pub department_name: Option<String>,
    pub location_id: Option<i32>,
    pub location_name: Option<String>,
    pub room: Option<String>,
    pub owner_id: Option<i32>,
    pub owner_name: Option<String>,
    /// Authoritative lifecycle status value.
    pub status: String,
    /// Status shown to viewers; recomputed on every read, never persisted.
    pub display_status: String,
    pub status_color: Option<String>,
    pub image_ref: Option<String>,
    pub acquired_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateAssetDto {
    pub code: String,
    pub name: String,
    pub inventory_number: Option<String>,
    pub serial_number: Option<String>,
    pub description: Option<String>,
    pub department_id: Option<i32>,
    pub location_id: Option<i32>,
    pub room: Option<String>,
    /// Ignored: the owner is always the creating principal.
    pub owner_id: Option<i32>,
    pub status: Option<String>,
    pub image_ref: Option<String>,
    pub acquired_at: Option<NaiveDateTime>,
}

/// Partial update; absent fields are left untouched. A request changing both
/// `department_id` and `status` is rejected before any write.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateAssetDto {
    pub code: Option<String>,
    pub name: Option<String>,
    pub inventory_number: Option<String>,
    pub serial_number: Option<String>,
    pub description: Option<String>,
    pub department_id: Option<i32>,
    pub location_id: Option<i32>,
    pub room: Option<String>,
    /// Resolved user id; custodian reassignment is an ordinary field edit.
    pub owner_id: Option<i32>,
    pub status: Option<String>,
    pub image_ref: Option<String>,
    pub acquired_at: Option<NaiveDateTime>,
    /// Carried onto the transfer request or audit assertion the edit spawns.
    pub note: Option<String>,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct AssetSearchQuery {
    /// Case-insensitive substring matched across code, inventory number,
    /// name, description, department, location, owner, and room.
    pub q: String,
    pub department_id: Option<i32>,
}
