//! ppg-sa (Speech Analysis) - Pronunciation practice game backend
//!
//! Serves the practice vocabulary and pronunciation analysis API for the
//! game frontend. Runs entirely in demo mode: no model files required.

use anyhow::Result;
use clap::Parser;
use ppg_sa::analysis::MockAnalyzer;
use ppg_sa::{build_router, AppState};
use tracing::info;

/// Speech analysis service for the pronunciation practice game
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Listen port (overrides PPG_SA_PORT and the config file)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting PPG Speech Analysis (ppg-sa) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let port = ppg_common::config::resolve_port(
        args.port,
        "PPG_SA_PORT",
        ppg_common::config::DEFAULT_PORT,
    );

    let state = AppState::new(MockAnalyzer::new());
    info!("Analyzer initialized in demo mode");

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("ppg-sa listening on http://0.0.0.0:{}", port);
    info!("Health check: http://127.0.0.1:{}/health", port);

    axum::serve(listener, app).await?;

    Ok(())
}
