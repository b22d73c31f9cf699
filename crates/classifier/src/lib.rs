//! Sentiment classification
//!
//! Wraps a pre-trained 3-class sequence-classification checkpoint loaded
//! once at process start. The model is an opaque dependency behind the
//! [`SentimentModel`] trait; [`SentimentAnalyzer`] owns label
//! normalization, score re-keying, and the fixed-split fallback.

mod analyzer;
mod model;
mod modernbert;

pub use analyzer::{Analysis, SentimentAnalyzer};
pub use model::{select_device, RawPrediction, SentimentModel};
pub use modernbert::ModernBertSentimentModel;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("failed to download '{filename}' from '{repo}': {message}")]
    Download {
        repo: String,
        filename: String,
        message: String,
    },

    #[error("failed to load model: {0}")]
    ModelLoad(String),

    #[error("tokenization failed: {0}")]
    Tokenization(String),

    #[error("inference failed: {0}")]
    Inference(#[from] candle_core::Error),

    #[error("predicted label id {0} not present in id2label")]
    UnknownLabelId(u32),
}
