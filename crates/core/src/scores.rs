//! Per-class sentiment scores

use serde::{Deserialize, Serialize};

use crate::SentimentLabel;

/// Probability mass per sentiment class.
///
/// After [`SentimentScores::normalized`] the three values sum to 1.0
/// (within floating-point tolerance) and each lies in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl SentimentScores {
    /// Build from raw (label, score) pairs. Unknown labels are dropped,
    /// absent classes default to 0.0.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a SentimentLabel, f64)>) -> Self {
        let mut scores = SentimentScores::default();
        for (label, score) in pairs {
            match label {
                SentimentLabel::Positive => scores.positive = score,
                SentimentLabel::Negative => scores.negative = score,
                SentimentLabel::Neutral => scores.neutral = score,
                SentimentLabel::Unknown(_) => {}
            }
        }
        scores
    }

    /// Fixed split used when only the top (label, score) pair is
    /// available: the predicted class keeps its confidence and the
    /// remaining mass is divided evenly across the other two classes.
    ///
    /// An unknown predicted label cannot be represented in the closed
    /// 3-key schema, so it degrades to a uniform distribution.
    pub fn fixed_split(predicted: &SentimentLabel, confidence: f64) -> Self {
        let remaining = (1.0 - confidence) / 2.0;
        match predicted {
            SentimentLabel::Positive => SentimentScores {
                positive: confidence,
                negative: remaining,
                neutral: remaining,
            },
            SentimentLabel::Negative => SentimentScores {
                positive: remaining,
                negative: confidence,
                neutral: remaining,
            },
            SentimentLabel::Neutral => SentimentScores {
                positive: remaining,
                negative: remaining,
                neutral: confidence,
            },
            SentimentLabel::Unknown(_) => SentimentScores {
                positive: 1.0 / 3.0,
                negative: 1.0 / 3.0,
                neutral: 1.0 / 3.0,
            },
        }
    }

    /// Rescale so the three values sum to 1.0. A zero-sum input is
    /// returned unchanged.
    pub fn normalized(self) -> Self {
        let total = self.positive + self.negative + self.neutral;
        if total > 0.0 {
            SentimentScores {
                positive: self.positive / total,
                negative: self.negative / total,
                neutral: self.neutral / total,
            }
        } else {
            self
        }
    }

    pub fn sum(&self) -> f64 {
        self.positive + self.negative + self.neutral
    }
}
