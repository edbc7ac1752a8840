use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatusValueDto {
    pub id: i32,
    pub value: String,
    pub label: String,
    pub color: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SaveStatusValueDto {
    pub value: String,
    pub label: String,
    /// Defaults to a neutral gray when omitted.
    pub color: Option<String>,
}
