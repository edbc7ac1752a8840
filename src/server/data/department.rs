use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

pub struct DepartmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DepartmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn all(&self) -> Result<Vec<entity::department::Model>, DbErr> {
        entity::prelude::Department::find()
            .order_by_asc(entity::department::Column::NameNative)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::department::Model>, DbErr> {
        entity::prelude::Department::find_by_id(id).one(self.db).await
    }

    pub async fn create(
        &self,
        name_native: &str,
        name_alt: &str,
        description: Option<String>,
    ) -> Result<entity::department::Model, DbErr> {
        let department = entity::department::ActiveModel {
            name_native: ActiveValue::Set(name_native.to_string()),
            name_alt: ActiveValue::Set(name_alt.to_string()),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        department.insert(self.db).await
    }

    pub async fn update(
        &self,
        department: entity::department::Model,
        name_native: &str,
        name_alt: &str,
        description: Option<String>,
    ) -> Result<entity::department::Model, DbErr> {
        let mut active = department.into_active_model();
        active.name_native = ActiveValue::Set(name_native.to_string());
        active.name_alt = ActiveValue::Set(name_alt.to_string());
        active.description = ActiveValue::Set(description);

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Department::delete_by_id(id).exec(self.db).await
    }
}
