//! Database entities for the Custodian asset registry.

pub mod prelude;

pub mod app_user;
pub mod asset;
pub mod asset_audit;
pub mod asset_transfer;
pub mod department;
pub mod edit_window;
pub mod location;
pub mod status_value;
