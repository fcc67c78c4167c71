//! Coffeeshop Barista - A coffee-order fulfillment engine
//!
//! This is the main entry point for the barista server.

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use coffeeshop_barista::{
    api::create_router,
    config::Config,
    shop::CoffeeShop,
    state::AppState,
    utils::{cancel_on_signal, init_tracing},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    init_tracing(config.log_level());

    config.validate()?;

    info!("Starting the barista v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, workers={}, milk={}ml, coffee={}g, speed=x{}",
          config.host, config.port, config.workers, config.milk, config.coffee, config.speed);

    // Cancelled on SIGTERM/SIGINT; drives intake, HTTP server and worker pool
    let shutdown = CancellationToken::new();
    let _signals = cancel_on_signal(shutdown.clone())?;

    let (shop, coordinator) = CoffeeShop::open(config.shop_settings()?, shutdown.clone());
    let pool = tokio::spawn(coordinator.run());

    let state = Arc::new(AppState::new(shop, config.port, config.host.clone()));
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /order  - Queue a coffee order");
    info!("  GET  /status - Inventory levels and order counters");
    info!("  GET  /health - Health check");

    // Stop taking connections on shutdown, then let the workers drain
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.clone().cancelled_owned())
        .await
    {
        tracing::error!("Server error: {}", e);
        shutdown.cancel();
    }

    info!("Waiting for workers to finish in-flight orders");
    pool.await?;

    info!("exiting...");
    Ok(())
}
