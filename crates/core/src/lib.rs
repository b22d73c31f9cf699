//! Shared domain types for the cross-lingual sentiment service
//!
//! Holds the wire models, the sentiment label vocabulary, the per-class
//! score schema, and the static language table. No I/O lives here.

mod label;
mod language;
mod models;
mod scores;

pub use label::SentimentLabel;
pub use language::{is_english, language_name, supported_languages, AUTO_LANGUAGE};
pub use models::{AnalysisRequest, AnalysisResponse, HealthResponse};
pub use scores::SentimentScores;
