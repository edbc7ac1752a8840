use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DepartmentDto {
    pub id: i32,
    pub name_native: String,
    pub name_alt: String,
    pub description: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SaveDepartmentDto {
    pub name_native: String,
    pub name_alt: String,
    pub description: Option<String>,
}
