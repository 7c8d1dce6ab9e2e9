//! Sample Timer - A reactive tenths-of-a-second timer
//!
//! This is the main entry point for the sample-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use sample_timer::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::display_logger_task,
    utils::shutdown_signal,
};

// All timer inputs and ticks run on one thread, like a UI main loop
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("sample_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting sample-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, tick={}ms",
          config.host, config.port, config.tick_ms);

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), config.tick_period()));

    // Follow the timer outputs in the background
    tokio::spawn(display_logger_task(state.timer.outputs()));

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start   - Start the timer");
    info!("  POST /pause   - Pause the timer");
    info!("  POST /running - Set running from {{\"running\": bool}}");
    info!("  POST /reset   - Reset elapsed time");
    info!("  GET  /status  - Current timer outputs");
    info!("  GET  /events  - Output changes as server-sent events");
    info!("  GET  /health  - Health check");

    // Setup shutdown; open event streams are dropped rather than drained
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

    info!("Server shutdown complete");
    Ok(())
}
