use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower_http::trace::TraceLayer;

use crate::server::{config::Config, error::Error, model::app::AppState, router};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Bind the listener and serve the API until shutdown.
pub async fn serve(config: &Config, db: DatabaseConnection) -> Result<(), Error> {
    let state = AppState { db };

    let app = router::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|err| panic!("Failed to bind {addr}: {err}"));

    tracing::info!("custodian listening on {addr}");

    axum::serve(listener, app)
        .await
        .expect("HTTP server terminated unexpectedly");

    Ok(())
}
