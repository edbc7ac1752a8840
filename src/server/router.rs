//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here with its utoipa annotation; the
//! collected OpenAPI document is served through Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Custodian", description = "Custodian asset registry API"), tags(
        (name = controller::asset::ASSET_TAG, description = "Asset registry routes"),
        (name = controller::transfer::TRANSFER_TAG, description = "Transfer workflow routes"),
        (name = controller::audit::AUDIT_TAG, description = "Audit workflow routes"),
        (name = controller::status::STATUS_TAG, description = "Status catalog routes"),
        (name = controller::department::DEPARTMENT_TAG, description = "Department routes"),
        (name = controller::location::LOCATION_TAG, description = "Location routes"),
        (name = controller::window::WINDOW_TAG, description = "Edit window routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::asset::list_assets,
            controller::asset::create_asset
        ))
        .routes(routes!(controller::asset::search_assets))
        .routes(routes!(
            controller::asset::get_asset,
            controller::asset::update_asset,
            controller::asset::delete_asset
        ))
        .routes(routes!(controller::asset::department_assets))
        .routes(routes!(controller::transfer::transfer_history))
        .routes(routes!(
            controller::transfer::list_transfers,
            controller::transfer::create_transfer
        ))
        .routes(routes!(controller::transfer::approve_transfer))
        .routes(routes!(controller::transfer::reject_transfer))
        .routes(routes!(
            controller::audit::list_audits,
            controller::audit::create_audit
        ))
        .routes(routes!(controller::audit::confirm_audits))
        .routes(routes!(
            controller::status::list_statuses,
            controller::status::create_status
        ))
        .routes(routes!(
            controller::status::get_status,
            controller::status::update_status,
            controller::status::delete_status
        ))
        .routes(routes!(
            controller::department::list_departments,
            controller::department::create_department
        ))
        .routes(routes!(
            controller::department::get_department,
            controller::department::update_department,
            controller::department::delete_department
        ))
        .routes(routes!(
            controller::location::list_locations,
            controller::location::create_location
        ))
        .routes(routes!(
            controller::location::get_location,
            controller::location::update_location,
            controller::location::delete_location
        ))
        .routes(routes!(
            controller::window::get_edit_window,
            controller::window::set_edit_window
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
