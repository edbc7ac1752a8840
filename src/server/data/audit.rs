use chrono::{NaiveDateTime, Utc};
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct AuditRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuditRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records an unconfirmed audit assertion against `asset`. The
    /// department is frozen from the asset's owner at submission time so the
    /// log stays meaningful after later transfers.
    pub async fn create(
        &self,
        asset: &entity::asset::Model,
        user_id: i32,
        status: String,
        note: Option<String>,
    ) -> Result<entity::asset_audit::Model, DbErr> {
        let audit = entity::asset_audit::ActiveModel {
            asset_id: ActiveValue::Set(asset.id),
            user_id: ActiveValue::Set(user_id),
            department_id: ActiveValue::Set(asset.department_id),
            status: ActiveValue::Set(status),
            note: ActiveValue::Set(note),
            checked_at: ActiveValue::Set(Utc::now().naive_utc()),
            confirmed: ActiveValue::Set(false),
            ..Default::default()
        };

        audit.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::asset_audit::Model>, DbErr> {
        entity::prelude::AssetAudit::find_by_id(id).one(self.db).await
    }

    /// Flips the listed rows to confirmed. Rows already confirmed are left
    /// untouched, which makes re-confirmation idempotent. When `department`
    /// is set, rows outside that department are skipped as well.
    pub async fn confirm_many(
        &self,
        ids: &[i32],
        department: Option<i32>,
    ) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut update = entity::prelude::AssetAudit::update_many()
            .col_expr(entity::asset_audit::Column::Confirmed, Expr::value(true))
            .filter(entity::asset_audit::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::asset_audit::Column::Confirmed.eq(false));

        if let Some(department_id) = department {
            update =
                update.filter(entity::asset_audit::Column::DepartmentId.eq(department_id));
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Asset ids among `asset_ids` that have at least one unconfirmed audit.
    pub async fn unconfirmed_asset_ids(&self, asset_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if asset_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::AssetAudit::find()
            .select_only()
            .column(entity::asset_audit::Column::AssetId)
            .filter(entity::asset_audit::Column::AssetId.is_in(asset_ids.iter().copied()))
            .filter(entity::asset_audit::Column::Confirmed.eq(false))
            .distinct()
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Filterable audit log page, newest first. The `(checked_at, id)`
    /// ordering keeps paging stable when rows share a timestamp.
    pub async fn list(
        &self,
        department: Option<i32>,
        asset: Option<i32>,
        confirmed: Option<bool>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::asset_audit::Model>, u64), DbErr> {
        let mut query = entity::prelude::AssetAudit::find();

        if let Some(department_id) = department {
            query = query.filter(entity::asset_audit::Column::DepartmentId.eq(department_id));
        }
        if let Some(asset_id) = asset {
            query = query.filter(entity::asset_audit::Column::AssetId.eq(asset_id));
        }
        if let Some(confirmed) = confirmed {
            query = query.filter(entity::asset_audit::Column::Confirmed.eq(confirmed));
        }

        let paginator = query
            .order_by(entity::asset_audit::Column::CheckedAt, Order::Desc)
            .order_by(entity::asset_audit::Column::Id, Order::Desc)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((rows, total))
    }

    /// Whether `user_id` recorded an assertion for `asset_id` inside the
    /// given time range. Used as the edit-window once-only marker.
    pub async fn checked_in_range(
        &self,
        user_id: i32,
        asset_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::AssetAudit::find()
            .filter(entity::asset_audit::Column::UserId.eq(user_id))
            .filter(entity::asset_audit::Column::AssetId.eq(asset_id))
            .filter(entity::asset_audit::Column::CheckedAt.between(start, end))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
