use sea_ease::{
    config::Config,
    server::{model::app::AppState, router, startup},
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", config.listen_addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting server on {}", config.listen_addr);

    let router = router::routes().with_state(AppState::from(db.clone()));
    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await
    {
        tracing::error!("Server error: {}", e);
    }

    if let Err(e) = db.close().await {
        tracing::error!("Failed to close database: {}", e);
    }
}
