mod catalog;
mod config;
mod errors;
mod listing;
mod models;
mod profile;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{KeyValueStore, MemoryStore, RedisStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparseable env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Hub API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize per-user record store
    let store: Arc<dyn KeyValueStore> = match &config.redis_url {
        Some(url) => {
            let redis = RedisStore::open(url)?;
            info!("Redis store initialized");
            Arc::new(redis)
        }
        None => {
            warn!("REDIS_URL not set; preferences and drafts are kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    let catalog = Catalog::seed();
    info!(
        "Catalog loaded: {} opportunities, {} skills, {} people",
        catalog.opportunities.len(),
        catalog.skills.len(),
        catalog.people.len()
    );
    info!(
        "Profile publish threshold: {}%",
        config.scoring.publish_threshold
    );

    // Build app state
    let state = AppState {
        store,
        catalog: Arc::new(catalog),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
