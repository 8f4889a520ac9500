//! swui Server
//!
//! Serves the Swagger UI once per specification document found in the
//! configured directory, with an index of all documents at the root.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use swui_core::AssetBundle;
use swui_server::{config::ServerConfig, mounter, web_ui};
use swui_sources::DirectorySource;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();

    info!("Starting swui server");

    let bundle = match &config.asset_dir {
        Some(dir) => {
            info!("Serving UI assets from {}", dir.display());
            AssetBundle::from_dir(dir)
                .with_context(|| format!("Failed to load UI assets from {}", dir.display()))?
        }
        None => web_ui::bundle(),
    };

    let source = DirectorySource::new(&config.spec_dir);
    let app = mounter::mount_source(&source, &config.rule(), Arc::new(bundle))?.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    info!("Server listening on http://{}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
