//! Coinsplit API Server
//!
//! Main entry point for the 70/30 split service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{Span, info, info_span};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coinsplit_api::{AppState, SplitHandler, create_router};
use coinsplit_core::rates::HttpRateSource;
use coinsplit_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = AppConfig::load()?;

    let client = reqwest::Client::builder()
        .user_agent(concat!("coinsplit/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let rate_source = Arc::new(HttpRateSource::with_client(
        client,
        config.upstream.rates_url.clone(),
    ));
    info!(rates_url = %config.upstream.rates_url, "Upstream price API configured");

    let handler = SplitHandler::new(rate_source, split_span());
    let app = create_router(AppState::new(handler));

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Installs the global subscriber. `LOG_FORMAT=json` selects JSON lines.
fn init_tracing() {
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coinsplit=debug,tower_http=debug".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();
}

/// Span the split handler logs under.
fn split_span() -> Span {
    info_span!("split")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
