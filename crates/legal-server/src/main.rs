//! legal-docs HTTP Server

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use legal_server::{AppState, ServerConfig, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();

    let state = AppState::from_config(&config)?;
    tracing::info!(delay_ms = %config.payment_delay.as_millis(), "✓ Simulated payments enabled");

    if config.callback_secret.is_some() {
        tracing::info!("✓ Signed payment callbacks enabled");
    } else {
        tracing::warn!("⚠ PAYMENT_WEBHOOK_SECRET not set - /api/payment-callback disabled");
    }

    let app = router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("legal-docs server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /api/health            - Health check");
    tracing::info!("  GET  /api/documents         - Document kinds and fields");
    tracing::info!("  POST /api/generate-preview  - Watermarked preview PDF");
    tracing::info!("  POST /api/simulate-payment  - Simulated payment");
    tracing::info!("  POST /api/download-final    - Final PDF (paid sessions)");
    tracing::info!("  POST /api/payment-callback  - Signed payment notification");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
