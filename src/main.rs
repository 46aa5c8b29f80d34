use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use pharmaguard::config;
use pharmaguard::web::router::dashboard_router;
use pharmaguard::web::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let state = Arc::new(AppState::from_env());
    tracing::info!(
        analysis_url = %state.client.base_url(),
        "Analysis service configured"
    );

    let app = dashboard_router(state);
    let addr = config::bind_addr();

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind dashboard server");
            std::process::exit(1);
        }
    };
    tracing::info!("Dashboard available at http://{addr}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Dashboard server error");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
