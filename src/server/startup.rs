use tracing_subscriber::{fmt, EnvFilter};

use crate::{config::Config, error::Error, Db};

/// Install the tracing subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}

/// Register the blog models on a facade, parents before children
pub fn register_models(db: &Db) {
    db.model()
        .register(entity::prelude::Author)
        .register(entity::prelude::Post);
}

/// Initialize the global facade and create the registered tables
pub async fn connect_to_database(config: &Config) -> Result<&'static Db, Error> {
    let db = Db::global();

    register_models(db);
    db.init_app(&config.database_url, config.engine.clone())
        .await?;
    db.create_all().await?;

    Ok(db)
}

/// Resolves when the process receives Ctrl+C
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutdown signal received");
}
