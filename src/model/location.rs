use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LocationDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SaveLocationDto {
    pub name: String,
    pub description: Option<String>,
}
