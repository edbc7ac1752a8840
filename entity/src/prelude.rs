pub use super::app_user::Entity as AppUser;
pub use super::asset::Entity as Asset;
pub use super::asset_audit::Entity as AssetAudit;
pub use super::asset_transfer::Entity as AssetTransfer;
pub use super::department::Entity as Department;
pub use super::edit_window::Entity as EditWindow;
pub use super::location::Entity as Location;
pub use super::status_value::Entity as StatusValue;
