use axum_helpers::{create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_events::{EventService, MongoEventRepository};
use tracing::info;

mod api;
mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());
    let mongo_client = database::mongodb::connect_from_config(&config.mongodb).await?;
    let db = mongo_client.database(config.mongodb.database());
    info!(
        database = config.mongodb.database(),
        collection = %config.events_collection,
        "Connected to MongoDB"
    );

    let repository = MongoEventRepository::with_collection(&db, &config.events_collection)
        .with_operation_timeout(config.operation_timeout);
    let app = create_router(api::routes(EventService::new(repository)));

    let shutdown_timeout = config.shutdown_timeout;
    create_production_app(app, &config.server, shutdown_timeout, async move {
        info!("Shutting down: closing MongoDB connections");
        database::mongodb::disconnect(mongo_client, shutdown_timeout).await
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Events API shutdown complete");
    Ok(())
}
