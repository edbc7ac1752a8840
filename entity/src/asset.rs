use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "asset")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub code: String,
    pub inventory_number: Option<String>,
    pub serial_number: Option<String>,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub department_id: Option<i32>,
    pub location_id: Option<i32>,
    pub room: Option<String>,
    pub owner_id: Option<i32>,
    /// Authoritative lifecycle status; validated against `status_value.value`
    /// at write time, not enforced by a foreign key (the catalog may be
    /// edited without referential checks).
    pub status: String,
    pub image_ref: Option<String>,
    pub acquired_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id"
    )]
    Location,
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::OwnerId",
        to = "super::app_user::Column::Id"
    )]
    Owner,
    #[sea_orm(has_many = "super::asset_transfer::Entity")]
    AssetTransfer,
    #[sea_orm(has_many = "super::asset_audit::Entity")]
    AssetAudit,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::asset_transfer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssetTransfer.def()
    }
}

impl Related<super::asset_audit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssetAudit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
