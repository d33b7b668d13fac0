use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use claim_documents::api::{configure_routes, ApiState};
use claim_documents::claims::MemoryRegistry;
use claim_documents::core::AppConfig;
use claim_documents::metrics::ClaimMetrics;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    tracing::info!("Starting Claim Documents API");

    // Initialize Prometheus metrics
    let registry = prometheus::default_registry();
    registry.register(Box::new(prometheus::process_collector::ProcessCollector::for_self()))?;
    let metrics = ClaimMetrics::new()?;
    metrics.register(registry)?;

    // Load configuration
    let config = AppConfig::load()?;
    std::fs::create_dir_all(&config.output_dir)?;

    let host = config.host.clone();
    let port = config.port;

    // Initialize application state
    let state = web::Data::new(ApiState::new(&config, Arc::new(MemoryRegistry::new()), Some(metrics)));

    tracing::info!("Starting server on {}:{}", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(TracingLogger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}
