use chrono::{NaiveDateTime, Utc};
use migration::{CaseStatement, Expr, ExprTrait, Func};
use sea_orm::{
    sea_query::{IntoColumnRef, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, FromQueryResult, IntoActiveModel, Iterable, JoinType, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

/// Asset row joined with the display names read views need.
#[derive(Debug, Clone, FromQueryResult)]
pub struct AssetRecord {
    pub id: i32,
    pub code: String,
    pub inventory_number: Option<String>,
    pub serial_number: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub department_id: Option<i32>,
    pub location_id: Option<i32>,
    pub room: Option<String>,
    pub owner_id: Option<i32>,
    pub status: String,
    pub image_ref: Option<String>,
    pub acquired_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub department_name: Option<String>,
    pub location_name: Option<String>,
    pub owner_name: Option<String>,
}

pub struct NewAsset {
    pub code: String,
    pub name: String,
    pub inventory_number: Option<String>,
    pub serial_number: Option<String>,
    pub description: Option<String>,
    pub department_id: Option<i32>,
    pub location_id: Option<i32>,
    pub room: Option<String>,
    pub owner_id: i32,
    pub status: String,
    pub image_ref: Option<String>,
    pub acquired_at: Option<NaiveDateTime>,
}

/// Partial field update; `None` leaves the column untouched. Department
/// ownership is deliberately absent: it only ever changes through transfer
/// approval.
#[derive(Default)]
pub struct AssetChanges {
    pub code: Option<String>,
    pub name: Option<String>,
    pub inventory_number: Option<String>,
    pub serial_number: Option<String>,
    pub description: Option<String>,
    pub location_id: Option<i32>,
    pub room: Option<String>,
    pub owner_id: Option<i32>,
    pub status: Option<String>,
    pub image_ref: Option<String>,
    pub acquired_at: Option<NaiveDateTime>,
}

pub struct AssetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewAsset) -> Result<entity::asset::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let asset = entity::asset::ActiveModel {
            code: ActiveValue::Set(new.code),
            inventory_number: ActiveValue::Set(new.inventory_number),
            serial_number: ActiveValue::Set(new.serial_number),
            name: ActiveValue::Set(new.name),
            description: ActiveValue::Set(new.description),
            department_id: ActiveValue::Set(new.department_id),
            location_id: ActiveValue::Set(new.location_id),
            room: ActiveValue::Set(new.room),
            owner_id: ActiveValue::Set(Some(new.owner_id)),
            status: ActiveValue::Set(new.status),
            image_ref: ActiveValue::Set(new.image_ref),
            acquired_at: ActiveValue::Set(new.acquired_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        asset.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::asset::Model>, DbErr> {
        entity::prelude::Asset::find_by_id(id).one(self.db).await
    }

    pub async fn update(
        &self,
        asset: entity::asset::Model,
        changes: AssetChanges,
    ) -> Result<entity::asset::Model, DbErr> {
        let mut active = asset.into_active_model();

        if let Some(code) = changes.code {
            active.code = ActiveValue::Set(code);
        }
        if let Some(name) = changes.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(inventory_number) = changes.inventory_number {
            active.inventory_number = ActiveValue::Set(Some(inventory_number));
        }
        if let Some(serial_number) = changes.serial_number {
            active.serial_number = ActiveValue::Set(Some(serial_number));
        }
        if let Some(description) = changes.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(location_id) = changes.location_id {
            active.location_id = ActiveValue::Set(Some(location_id));
        }
        if let Some(room) = changes.room {
            active.room = ActiveValue::Set(Some(room));
        }
        if let Some(owner_id) = changes.owner_id {
            active.owner_id = ActiveValue::Set(Some(owner_id));
        }
        if let Some(status) = changes.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(image_ref) = changes.image_ref {
            active.image_ref = ActiveValue::Set(Some(image_ref));
        }
        if let Some(acquired_at) = changes.acquired_at {
            active.acquired_at = ActiveValue::Set(Some(acquired_at));
        }
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        active.update(self.db).await
    }

    /// Moves the asset to a new owning department. Only the transfer
    /// approval path calls this.
    pub async fn set_department(&self, asset_id: i32, department_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Asset::update_many()
            .col_expr(
                entity::asset::Column::DepartmentId,
                Expr::value(department_id),
            )
            .col_expr(
                entity::asset::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::asset::Column::Id.eq(asset_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Asset::delete_by_id(id).exec(self.db).await
    }

    pub async fn count_by_department(&self, department_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Asset::find()
            .filter(entity::asset::Column::DepartmentId.eq(department_id))
            .count(self.db)
            .await
    }

    pub async fn count_by_location(&self, location_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Asset::find()
            .filter(entity::asset::Column::LocationId.eq(location_id))
            .count(self.db)
            .await
    }

    pub async fn record_by_id(&self, id: i32) -> Result<Option<AssetRecord>, DbErr> {
        record_query()
            .filter(entity::asset::Column::Id.eq(id))
            .into_model::<AssetRecord>()
            .one(self.db)
            .await
    }

    /// All asset records, optionally restricted to one owning department.
    pub async fn records(&self, department: Option<i32>) -> Result<Vec<AssetRecord>, DbErr> {
        let mut query = record_query();

        if let Some(department_id) = department {
            query = query.filter(entity::asset::Column::DepartmentId.eq(department_id));
        }

        query
            .order_by(entity::asset::Column::Name, Order::Asc)
            .into_model::<AssetRecord>()
            .all(self.db)
            .await
    }

    /// Case-insensitive substring search across asset fields and the joined
    /// department/location/owner names. Rows whose code, inventory number,
    /// or name start with the term sort ahead of other matches.
    pub async fn search(
        &self,
        term: &str,
        department: Option<i32>,
    ) -> Result<Vec<AssetRecord>, DbErr> {
        let needle = term.trim().to_lowercase();
        let like = format!("%{needle}%");
        let prefix = format!("{needle}%");

        let matches = Condition::any()
            .add(contains_ci(
                (entity::prelude::Asset, entity::asset::Column::Code),
                &like,
            ))
            .add(contains_ci(
                (
                    entity::prelude::Asset,
                    entity::asset::Column::InventoryNumber,
                ),
                &like,
            ))
            .add(contains_ci(
                (entity::prelude::Asset, entity::asset::Column::Name),
                &like,
            ))
            .add(contains_ci(
                (entity::prelude::Asset, entity::asset::Column::Description),
                &like,
            ))
            .add(contains_ci(
                (entity::prelude::Asset, entity::asset::Column::Room),
                &like,
            ))
            .add(contains_ci(
                (
                    entity::prelude::Department,
                    entity::department::Column::NameNative,
                ),
                &like,
            ))
            .add(contains_ci(
                (
                    entity::prelude::Department,
                    entity::department::Column::NameAlt,
                ),
                &like,
            ))
            .add(contains_ci(
                (entity::prelude::Location, entity::location::Column::Name),
                &like,
            ))
            .add(contains_ci(
                (entity::prelude::AppUser, entity::app_user::Column::Name),
                &like,
            ));

        let rank = CaseStatement::new()
            .case(
                Condition::any()
                    .add(contains_ci(
                        (entity::prelude::Asset, entity::asset::Column::Code),
                        &prefix,
                    ))
                    .add(contains_ci(
                        (
                            entity::prelude::Asset,
                            entity::asset::Column::InventoryNumber,
                        ),
                        &prefix,
                    ))
                    .add(contains_ci(
                        (entity::prelude::Asset, entity::asset::Column::Name),
                        &prefix,
                    )),
                Expr::value(0),
            )
            .finally(Expr::value(1));

        let mut query = record_query().filter(matches);

        if let Some(department_id) = department {
            query = query.filter(entity::asset::Column::DepartmentId.eq(department_id));
        }

        query
            .order_by(Into::<SimpleExpr>::into(rank), Order::Asc)
            .order_by(entity::asset::Column::Name, Order::Asc)
            .into_model::<AssetRecord>()
            .all(self.db)
            .await
    }
}

fn record_query() -> Select<entity::prelude::Asset> {
    entity::prelude::Asset::find()
        .select_only()
        .columns(entity::asset::Column::iter())
        .column_as(
            entity::department::Column::NameNative,
            "department_name",
        )
        .column_as(entity::location::Column::Name, "location_name")
        .column_as(entity::app_user::Column::Name, "owner_name")
        .join(JoinType::LeftJoin, entity::asset::Relation::Department.def())
        .join(JoinType::LeftJoin, entity::asset::Relation::Location.def())
        .join(JoinType::LeftJoin, entity::asset::Relation::Owner.def())
}

/// `lower(column) LIKE pattern`, which is case-insensitive on both Postgres
/// and the SQLite backend used in tests.
fn contains_ci<T: IntoColumnRef>(column: T, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).like(pattern)
}
