use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct StatusRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StatusRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn all(&self) -> Result<Vec<entity::status_value::Model>, DbErr> {
        entity::prelude::StatusValue::find()
            .order_by_asc(entity::status_value::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::status_value::Model>, DbErr> {
        entity::prelude::StatusValue::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_value(
        &self,
        value: &str,
    ) -> Result<Option<entity::status_value::Model>, DbErr> {
        entity::prelude::StatusValue::find()
            .filter(entity::status_value::Column::Value.eq(value))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        value: &str,
        label: &str,
        color: &str,
    ) -> Result<entity::status_value::Model, DbErr> {
        let status = entity::status_value::ActiveModel {
            value: ActiveValue::Set(value.to_string()),
            label: ActiveValue::Set(label.to_string()),
            color: ActiveValue::Set(color.to_string()),
            ..Default::default()
        };

        status.insert(self.db).await
    }

    pub async fn update(
        &self,
        status: entity::status_value::Model,
        value: &str,
        label: &str,
        color: &str,
    ) -> Result<entity::status_value::Model, DbErr> {
        let mut active = status.into_active_model();
        active.value = ActiveValue::Set(value.to_string());
        active.label = ActiveValue::Set(label.to_string());
        active.color = ActiveValue::Set(color.to_string());

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::StatusValue::delete_by_id(id).exec(self.db).await
    }
}
