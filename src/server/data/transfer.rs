use chrono::{NaiveDateTime, Utc};
use entity::asset_transfer::TransferStatus;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::transfer::TransferDirection;

pub struct TransferRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TransferRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a pending transfer request for `asset`. The originating
    /// department is frozen from the asset's current owner at request time.
    pub async fn create(
        &self,
        asset: &entity::asset::Model,
        to_department_id: i32,
        requested_by: i32,
        note: Option<String>,
    ) -> Result<entity::asset_transfer::Model, DbErr> {
        let transfer = entity::asset_transfer::ActiveModel {
            asset_id: ActiveValue::Set(asset.id),
            from_department_id: ActiveValue::Set(asset.department_id),
            to_department_id: ActiveValue::Set(to_department_id),
            requested_by: ActiveValue::Set(requested_by),
            status: ActiveValue::Set(TransferStatus::Pending),
            note: ActiveValue::Set(note),
            requested_at: ActiveValue::Set(Utc::now().naive_utc()),
            approved_by: ActiveValue::Set(None),
            approved_at: ActiveValue::Set(None),
            ..Default::default()
        };

        transfer.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::asset_transfer::Model>, DbErr> {
        entity::prelude::AssetTransfer::find_by_id(id).one(self.db).await
    }

    pub async fn find_pending_for_asset(
        &self,
        asset_id: i32,
    ) -> Result<Option<entity::asset_transfer::Model>, DbErr> {
        entity::prelude::AssetTransfer::find()
            .filter(entity::asset_transfer::Column::AssetId.eq(asset_id))
            .filter(entity::asset_transfer::Column::Status.eq(TransferStatus::Pending))
            .one(self.db)
            .await
    }

    /// Asset ids among `asset_ids` that currently have a pending transfer.
    pub async fn pending_asset_ids(&self, asset_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if asset_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::AssetTransfer::find()
            .select_only()
            .column(entity::asset_transfer::Column::AssetId)
            .filter(entity::asset_transfer::Column::AssetId.is_in(asset_ids.iter().copied()))
            .filter(entity::asset_transfer::Column::Status.eq(TransferStatus::Pending))
            .distinct()
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Conditional state transition `pending -> next`. Returns the number of
    /// rows moved; 0 means the transfer was not pending anymore when the
    /// update ran, i.e. a concurrent request resolved it first.
    pub async fn mark_resolved(
        &self,
        transfer_id: i32,
        next: TransferStatus,
        resolved_by: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::AssetTransfer::update_many()
            .col_expr(entity::asset_transfer::Column::Status, Expr::value(next))
            .col_expr(
                entity::asset_transfer::Column::ApprovedBy,
                Expr::value(resolved_by),
            )
            .col_expr(
                entity::asset_transfer::Column::ApprovedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::asset_transfer::Column::Id.eq(transfer_id))
            .filter(entity::asset_transfer::Column::Status.eq(TransferStatus::Pending))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn list(
        &self,
        department: Option<i32>,
        direction: Option<TransferDirection>,
        status: Option<TransferStatus>,
    ) -> Result<Vec<entity::asset_transfer::Model>, DbErr> {
        let mut query = entity::prelude::AssetTransfer::find();

        if let Some(department_id) = department {
            let scope = match direction {
                Some(TransferDirection::Incoming) => Condition::all().add(
                    entity::asset_transfer::Column::ToDepartmentId.eq(department_id),
                ),
                Some(TransferDirection::Outgoing) => Condition::all().add(
                    entity::asset_transfer::Column::FromDepartmentId.eq(department_id),
                ),
                None => Condition::any()
                    .add(entity::asset_transfer::Column::ToDepartmentId.eq(department_id))
                    .add(entity::asset_transfer::Column::FromDepartmentId.eq(department_id)),
            };
            query = query.filter(scope);
        }

        if let Some(status) = status {
            query = query.filter(entity::asset_transfer::Column::Status.eq(status));
        }

        query
            .order_by(entity::asset_transfer::Column::RequestedAt, Order::Desc)
            .order_by(entity::asset_transfer::Column::Id, Order::Desc)
            .all(self.db)
            .await
    }

    /// Full chronological transfer log for one asset, oldest first.
    pub async fn history(
        &self,
        asset_id: i32,
    ) -> Result<Vec<entity::asset_transfer::Model>, DbErr> {
        entity::prelude::AssetTransfer::find()
            .filter(entity::asset_transfer::Column::AssetId.eq(asset_id))
            .order_by(entity::asset_transfer::Column::RequestedAt, Order::Asc)
            .order_by(entity::asset_transfer::Column::Id, Order::Asc)
            .all(self.db)
            .await
    }

    /// Whether `user_id` requested a transfer of `asset_id` inside the given
    /// time range. Used as the edit-window once-only marker.
    pub async fn requested_in_range(
        &self,
        user_id: i32,
        asset_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::AssetTransfer::find()
            .filter(entity::asset_transfer::Column::RequestedBy.eq(user_id))
            .filter(entity::asset_transfer::Column::AssetId.eq(asset_id))
            .filter(entity::asset_transfer::Column::RequestedAt.between(start, end))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
