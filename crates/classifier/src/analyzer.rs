//! Sentiment analysis over a loaded model
//!
//! Normalizes the checkpoint's label vocabulary into the fixed 3-class
//! schema and guarantees the returned scores sum to 1.0.

use sentiment_core::{SentimentLabel, SentimentScores};

use crate::{ClassifierError, ModernBertSentimentModel, RawPrediction, SentimentModel};

/// Result of classifying one text.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub sentiment: SentimentLabel,
    /// The top-class score as the model reported it.
    pub confidence: f64,
    /// Normalized per-class distribution.
    pub scores: SentimentScores,
}

/// Classifier facade the request pipeline talks to.
pub struct SentimentAnalyzer {
    model: Box<dyn SentimentModel>,
}

impl SentimentAnalyzer {
    pub fn new(model: Box<dyn SentimentModel>) -> Self {
        Self { model }
    }

    /// Load the configured checkpoint, preferring an available
    /// accelerator. Called once during startup; a failure here is fatal
    /// to the process.
    pub fn from_pretrained(repo_id: &str) -> Result<Self, ClassifierError> {
        let device = crate::select_device();
        let model = ModernBertSentimentModel::load(repo_id, device)?;
        Ok(Self::new(Box::new(model)))
    }

    /// Classify `text` (expected to already be English).
    ///
    /// The base inference failure propagates; a per-class pass failure
    /// degrades to the fixed-split distribution.
    pub fn analyze(&self, text: &str) -> Result<Analysis, ClassifierError> {
        let top = self.model.predict(text)?;
        let sentiment = SentimentLabel::from_raw(&top.label);

        let scores = match self.model.predict_scores(text) {
            Ok(pairs) => rekey_and_normalize(&pairs),
            Err(error) => {
                tracing::warn!(%error, "per-class scores unavailable, using fixed split");
                SentimentScores::fixed_split(&sentiment, top.score)
            }
        };

        Ok(Analysis {
            sentiment,
            confidence: top.score,
            scores,
        })
    }
}

fn rekey_and_normalize(pairs: &[RawPrediction]) -> SentimentScores {
    let normalized: Vec<(SentimentLabel, f64)> = pairs
        .iter()
        .map(|p| (SentimentLabel::from_raw(&p.label), p.score))
        .collect();
    SentimentScores::from_pairs(normalized.iter().map(|(l, s)| (l, *s))).normalized()
}
