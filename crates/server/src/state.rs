//! Shared application state
//!
//! Everything here is constructed once during the startup phase, before
//! the listener binds, and is read-only afterwards. That replaces the
//! lazy per-first-caller initialization with an explicit one, so no
//! initialization race exists.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use sentiment_classifier::SentimentAnalyzer;
use sentiment_config::Settings;
use sentiment_translation::TranslationGateway;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub gateway: Arc<TranslationGateway>,
    pub analyzer: Arc<SentimentAnalyzer>,
    /// Present when the Prometheus recorder is installed (the binary);
    /// absent in tests.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        settings: Arc<Settings>,
        gateway: Arc<TranslationGateway>,
        analyzer: Arc<SentimentAnalyzer>,
        metrics: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            settings,
            gateway,
            analyzer,
            metrics,
        }
    }
}
