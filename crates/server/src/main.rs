//! Service entry point
//!
//! Startup order matters: settings, logging, metrics recorder, then the
//! sentiment model. A model load failure aborts the process before the
//! listener binds, so the service never accepts traffic it cannot serve.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use sentiment_classifier::SentimentAnalyzer;
use sentiment_config::Settings;
use sentiment_server::{app, AppState};
use sentiment_translation::{GoogleTranslateClient, HeuristicDetector, TranslationGateway};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let settings = Settings::from_env().context("invalid environment configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let metrics_handle = PrometheusBuilder::new()
        .install_recorder()
        .context("failed to install metrics recorder")?;

    info!(
        service = %settings.api_title,
        version = %settings.api_version,
        "starting cross-lingual sentiment service"
    );

    // Model load can take a while; do it up front and fail hard.
    info!(model = %settings.sentiment_model, "loading sentiment model (this may take a moment)");
    let analyzer = {
        let repo_id = settings.sentiment_model.clone();
        tokio::task::spawn_blocking(move || SentimentAnalyzer::from_pretrained(&repo_id))
            .await
            .context("model load task panicked")?
            .context("failed to load sentiment model")?
    };

    let provider = GoogleTranslateClient::new(
        settings.google_translate_api_key.clone(),
        Duration::from_secs(settings.translation_timeout_secs),
    )
    .context("failed to build translation client")?;
    let gateway = TranslationGateway::new(Arc::new(provider), Arc::new(HeuristicDetector::new()));

    let state = AppState::new(
        Arc::new(settings.clone()),
        Arc::new(gateway),
        Arc::new(analyzer),
        Some(metrics_handle),
    );

    let listener = tokio::net::TcpListener::bind(settings.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr()))?;
    info!(addr = %listener.local_addr()?, "service started, accepting requests");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down cleanly");
    Ok(())
}

/// Resolves on SIGTERM or ctrl-c.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, draining connections");
}
