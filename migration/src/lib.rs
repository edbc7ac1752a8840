pub use sea_orm_migration::prelude::*;

mod m20260601_000001_department;
mod m20260601_000002_location;
mod m20260601_000003_app_user;
mod m20260601_000004_status_value;
mod m20260601_000005_asset;
mod m20260601_000006_asset_transfer;
mod m20260601_000007_asset_audit;
mod m20260601_000008_edit_window;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_department::Migration),
            Box::new(m20260601_000002_location::Migration),
            Box::new(m20260601_000003_app_user::Migration),
            Box::new(m20260601_000004_status_value::Migration),
            Box::new(m20260601_000005_asset::Migration),
            Box::new(m20260601_000006_asset_transfer::Migration),
            Box::new(m20260601_000007_asset_audit::Migration),
            Box::new(m20260601_000008_edit_window::Migration),
        ]
    }
}
