//! Language detection and translation gateway
//!
//! The detector is a deliberate keyword heuristic, not statistical
//! language identification; it sits behind [`LanguageDetector`] so a
//! proper detector can be substituted without touching the gateway.
//! The gateway decides whether translation is needed, calls the external
//! provider, and falls back to the original text on any provider failure.

mod detect;
mod gateway;
mod provider;

pub use detect::{Detection, HeuristicDetector, LanguageDetector};
pub use gateway::{TranslationGateway, TranslationOutcome};
pub use provider::{GoogleTranslateClient, TranslationProvider};

use thiserror::Error;

/// Errors from the external translation provider. The gateway recovers
/// from all of these; they never reach the HTTP caller.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("translation provider returned {status}: {body}")]
    Provider {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unexpected provider response: {0}")]
    Malformed(String),
}
