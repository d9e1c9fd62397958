//! # anomaly-server
//!
//! Binary entry point: configuration, tracing, and the listener.

use anomaly::ThresholdAnomalyDetector;
use anomaly_server::{build_router, AppState, ServerArgs};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "anomaly_server=info,anomaly_core=info,tower_http=info".into()),
        )
        .init();

    let args = ServerArgs::parse();
    let detector = ThresholdAnomalyDetector::from_config(args.detector_config())?;
    tracing::info!(
        multiplier = detector.multiplier(),
        min_history = detector.config().min_history,
        "detector configured"
    );

    let app = build_router(AppState::new(detector));

    let addr = args.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "anomaly-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;
    Ok(())
}
