use sea_orm::entity::prelude::*;

/// Transfer workflow state. `Pending` is the only non-terminal state;
/// `Approved` and `Rejected` are final and can never be re-opened.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TransferStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl TransferStatus {
    /// Exhaustive transition table for the transfer state machine.
    pub fn can_transition_to(&self, next: &TransferStatus) -> bool {
        matches!(
            (self, next),
            (TransferStatus::Pending, TransferStatus::Approved)
                | (TransferStatus::Pending, TransferStatus::Rejected)
        )
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "asset_transfer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub asset_id: i32,
    pub from_department_id: Option<i32>,
    pub to_department_id: i32,
    pub requested_by: i32,
    pub status: TransferStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    pub requested_at: DateTime,
    pub approved_by: Option<i32>,
    pub approved_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::asset::Entity",
        from = "Column::AssetId",
        to = "super::asset::Column::Id"
    )]
    Asset,
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::FromDepartmentId",
        to = "super::department::Column::Id"
    )]
    FromDepartment,
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::ToDepartmentId",
        to = "super::department::Column::Id"
    )]
    ToDepartment,
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::RequestedBy",
        to = "super::app_user::Column::Id"
    )]
    RequestedBy,
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::ApprovedBy",
        to = "super::app_user::Column::Id"
    )]
    ApprovedBy,
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
