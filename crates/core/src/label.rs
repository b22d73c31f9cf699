//! Sentiment label vocabulary
//!
//! Classifier checkpoints disagree on label naming: some emit
//! `POSITIVE`/`NEGATIVE`/`NEUTRAL`, index-labelled checkpoints emit
//! `LABEL_0`/`LABEL_1`/`LABEL_2`. Both vocabularies normalize into this
//! enum; anything else is carried as `Unknown` rather than silently
//! widening the 3-class schema.

use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize, Serializer};

/// Normalized sentiment class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    /// Label the model emitted that we do not recognize, lower-cased.
    Unknown(String),
}

impl Serialize for SentimentLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SentimentLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Err(D::Error::custom("sentiment label must be non-empty"));
        }
        Ok(SentimentLabel::from_raw(&raw))
    }
}

impl SentimentLabel {
    /// Normalize a raw model label into the fixed vocabulary.
    ///
    /// `LABEL_0`/`LABEL_1`/`LABEL_2` follow the index convention of
    /// 3-class sentiment checkpoints: 0 = negative, 1 = neutral,
    /// 2 = positive.
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "POSITIVE" | "LABEL_2" => SentimentLabel::Positive,
            "NEGATIVE" | "LABEL_0" => SentimentLabel::Negative,
            "NEUTRAL" | "LABEL_1" => SentimentLabel::Neutral,
            _ => SentimentLabel::Unknown(raw.to_lowercase()),
        }
    }

    /// Wire representation: `positive`, `negative`, `neutral`, or the
    /// lower-cased raw label for unknowns.
    pub fn as_str(&self) -> &str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Unknown(raw) => raw,
        }
    }

    /// True for the three classes of the closed schema.
    pub fn is_known(&self) -> bool {
        !matches!(self, SentimentLabel::Unknown(_))
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_labels_normalize() {
        assert_eq!(SentimentLabel::from_raw("POSITIVE"), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_raw("negative"), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_raw("Neutral"), SentimentLabel::Neutral);
    }

    #[test]
    fn test_index_labels_normalize() {
        assert_eq!(SentimentLabel::from_raw("LABEL_0"), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_raw("LABEL_1"), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_raw("LABEL_2"), SentimentLabel::Positive);
    }

    #[test]
    fn test_unknown_label_passthrough() {
        let label = SentimentLabel::from_raw("Very_Positive");
        assert_eq!(label, SentimentLabel::Unknown("very_positive".to_string()));
        assert_eq!(label.as_str(), "very_positive");
        assert!(!label.is_known());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
        let json = serde_json::to_string(&SentimentLabel::Unknown("mixed".into())).unwrap();
        assert_eq!(json, "\"mixed\"");
    }
}
