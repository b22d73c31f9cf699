//! Wire models for the HTTP surface

use serde::{Deserialize, Serialize};

use crate::{SentimentLabel, SentimentScores};

fn default_language() -> String {
    crate::AUTO_LANGUAGE.to_string()
}

/// Request body for `POST /analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    /// Text to analyze for sentiment. Must be non-empty.
    pub text: String,
    /// ISO-639-1 code (e.g. `fr`, `es`) or `auto` for detection.
    #[serde(default = "default_language")]
    pub language: String,
}

/// Response body for `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Predicted sentiment class.
    pub sentiment: SentimentLabel,
    /// Top-class score, in [0, 1].
    pub confidence: f64,
    /// Normalized per-class scores.
    pub scores: SentimentScores,
    /// The input text, verbatim.
    pub original_text: String,
    /// English text the classifier ran on; present only when translation
    /// actually occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    /// Human-readable source language name (e.g. "French").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<String>,
    pub was_translated: bool,
}

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
