use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn all(&self) -> Result<Vec<entity::location::Model>, DbErr> {
        entity::prelude::Location::find()
            .order_by_asc(entity::location::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::location::Model>, DbErr> {
        entity::prelude::Location::find_by_id(id).one(self.db).await
    }

    pub async fn create(
        &self,
        name: &str,
        description: Option<String>,
    ) -> Result<entity::location::Model, DbErr> {
        let location = entity::location::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        location.insert(self.db).await
    }

    pub async fn update(
        &self,
        location: entity::location::Model,
        name: &str,
        description: Option<String>,
    ) -> Result<entity::location::Model, DbErr> {
        let mut active = location.into_active_model();
        active.name = ActiveValue::Set(name.to_string());
        active.description = ActiveValue::Set(description);

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Location::delete_by_id(id).exec(self.db).await
    }
}
