//! Trip Planner server binary.
//!
//! Loads configuration, installs the tracing subscriber, wires the Gemini
//! provider and renderers into the axum router, and serves until Ctrl+C or
//! SIGTERM.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use trip_planner::adapters::ai::{GeminiConfig, GeminiProvider};
use trip_planner::adapters::http::{app_router, PlannerAppState};
use trip_planner::adapters::markdown::PulldownMarkdownRenderer;
use trip_planner::adapters::templates::HandlebarsPageRenderer;
use trip_planner::config::{AppConfig, LogFormat, ServerConfig, ValidationError, GOOGLE_API_KEY_VAR};
use trip_planner::ports::AIProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);

    if let Err(err) = config.validate() {
        tracing::error!(error = %err, "Invalid configuration");
        return Err(err.into());
    }
    tracing::debug!(?config, "Configuration loaded");

    let addr = config.server.socket_addr()?;
    let gemini = GeminiConfig::from_app_config(&config.ai)
        .ok_or(ValidationError::MissingRequired(GOOGLE_API_KEY_VAR))?;
    let provider = Arc::new(GeminiProvider::new(gemini)?);
    let info = provider.provider_info();

    let state = PlannerAppState::new(
        provider,
        Arc::new(PulldownMarkdownRenderer::from_config(&config.markdown)),
        Arc::new(HandlebarsPageRenderer::new()?),
        config.ai.timeout(),
    );
    let app = app_router(state, &config.server);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        address = %addr,
        provider = %info.name,
        model = %info.model,
        environment = ?config.server.environment,
        "Trip planner listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// `RUST_LOG` wins over `server.log_level`.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match server.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
