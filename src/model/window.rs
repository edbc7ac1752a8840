use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The globally configured audit period. While `now` falls inside the range,
/// non-superadmin principals may edit each asset at most once.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EditWindowDto {
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
}
