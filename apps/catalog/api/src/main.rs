use axum_helpers::server::{create_production_app, create_router};
use clap::Parser;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod cli;
mod config;
mod openapi;
mod state;

use cli::{Cli, Command, ServerArgs};
use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    match Cli::parse().command() {
        Command::StartServer(args) => start_server(args).await,
    }
}

async fn start_server(args: ServerArgs) -> eyre::Result<()> {
    // Environment first, then command line flags on top
    let config = Config::from_env()?.with_overrides(args);

    init_tracing(&config.environment);
    info!(
        app = config.app.name,
        version = config.app.version,
        admin_email = %config.admin_email,
        "Configuration loaded"
    );

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    // Verified with a ping; no retry
    let mongo_client = database::mongodb::connect_from_config(&config.mongodb).await?;
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    api::products::init_indexes(&db).await?;

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    // API routes plus /health and /ready, wrapped with docs and middleware
    let router = create_router::<openapi::ApiDoc>(
        api::routes(&state),
        &state.config.cors_allowed_origins,
    )?;

    info!("Starting Catalog API with graceful shutdown (30s timeout)");

    create_production_app(
        router,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            state.mongo_client.shutdown().await;
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
