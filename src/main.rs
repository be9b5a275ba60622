//! Crescent Board - A ticker-driven page model server
//!
//! This is the main entry point for the crescent-board application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crescent_board::{
    api::create_router,
    config::Config,
    schedule::SystemClock,
    state::AppState,
    tasks::spawn_tickers,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("crescent_board={},tower_http=info", config.log_level()))
        .init();

    info!("Starting crescent-board server v{}", env!("CARGO_PKG_VERSION"));

    // Reject a bad prayer table or period before anything runs
    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Configuration: host={}, port={}, target={}, prayers={}",
          config.host, config.port, settings.countdown.target(),
          settings.prayers.windows().iter()
              .map(|w| format!("{}@{}", w.name, w.start_label()))
              .collect::<Vec<_>>()
              .join(", "));

    // Create application state and the decorative layers
    let state = Arc::new(AppState::new(
        settings,
        Arc::new(SystemClock),
        config.port,
        config.host.clone(),
    ));
    state.decorate(&mut rand::rng()).map_err(anyhow::Error::msg)?;

    // Start the countdown and prayer tickers
    let tickers = spawn_tickers(Arc::clone(&state));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /board                - Page model snapshot");
    info!("  GET  /countdown            - Time left until the target");
    info!("  GET  /prayers              - Prayer table and active window");
    info!("  POST /pointer              - Parallax pointer position");
    info!("  POST /cards/:id/pointer    - Card hover glow");
    info!("  POST /cards/:id/visible    - Card scroll reveal");
    info!("  POST /elements/:id/key     - Keyboard activation");
    info!("  POST /elements/:id/click   - Element click");
    info!("  GET  /status               - Service status and last ticks");
    info!("  GET  /health               - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    tickers.stop().await;

    info!("Server shutdown complete");
    Ok(())
}
