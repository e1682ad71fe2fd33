//! Eventhub registration backend
//!
//! Composition root: loads configuration, initializes logging, connects the
//! database, runs migrations and assembles the request facade. The transport
//! that drives the facade is mounted by the deployment, not here.

use tracing::info;

use eventhub::{
    config::Settings,
    database::{connection::create_pool, run_migrations, DatabaseService, PoolConfig},
    utils::logging,
    EventhubApi, ServiceFactory,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    logging::init_logging(&settings.logging)?;

    info!("Starting Eventhub backend...");

    // Initialize database connection
    info!("Connecting to database...");
    let pool_config = PoolConfig::from_settings(&settings.database);
    let db_pool = create_pool(&pool_config).await?;

    // Run database migrations
    run_migrations(&db_pool).await?;

    // Assemble services and the facade
    let database_service = DatabaseService::new(db_pool);
    let services = ServiceFactory::new(database_service.clone(), &settings);
    let _api = EventhubApi::new(services, database_service);

    info!("Eventhub backend is ready");

    // Keep running until the deployment asks us to stop.
    tokio::signal::ctrl_c().await?;

    info!("Eventhub backend has been shut down.");

    Ok(())
}
