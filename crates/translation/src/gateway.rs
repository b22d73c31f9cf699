//! Translation gateway
//!
//! Decides whether an input needs translation, invokes the provider, and
//! normalizes the result. Provider failures are recovered here: the
//! caller always gets an outcome, never an error.

use std::sync::Arc;

use sentiment_core::{is_english, language_name, AUTO_LANGUAGE};

use crate::{LanguageDetector, TranslationProvider};

/// Result of a translate-to-English decision.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationOutcome {
    /// Text the classifier should run on (provider output, or the
    /// original on any non-translation path).
    pub text: String,
    /// Human-readable source language name, e.g. "French".
    pub language: String,
    pub was_translated: bool,
}

impl TranslationOutcome {
    fn untranslated(text: &str) -> Self {
        Self {
            text: text.to_string(),
            language: "English".to_string(),
            was_translated: false,
        }
    }
}

/// Orchestrates detection and provider invocation.
pub struct TranslationGateway {
    provider: Arc<dyn TranslationProvider>,
    detector: Arc<dyn LanguageDetector>,
}

impl TranslationGateway {
    pub fn new(provider: Arc<dyn TranslationProvider>, detector: Arc<dyn LanguageDetector>) -> Self {
        Self { provider, detector }
    }

    /// Translate `text` to English unless it already is English.
    ///
    /// `source_language` is the caller-supplied code; `None`, the empty
    /// string, and the `auto` sentinel all trigger heuristic detection.
    /// The provider is
    /// called with whatever the detection resolves to, including `auto`,
    /// in which case the provider performs its own detection.
    pub async fn translate_to_english(
        &self,
        text: &str,
        source_language: Option<&str>,
    ) -> TranslationOutcome {
        // Explicit English source short-circuits everything.
        if let Some(source) = source_language {
            if source != AUTO_LANGUAGE && is_english(source) {
                return TranslationOutcome::untranslated(text);
            }
        }

        let resolved = match source_language {
            Some(source) if !source.is_empty() && source != AUTO_LANGUAGE => source.to_string(),
            _ => self.detector.detect(text).code,
        };

        if is_english(&resolved) {
            return TranslationOutcome::untranslated(text);
        }

        let translated = match self.provider.translate(text, &resolved, "en").await {
            Ok(translated) => translated,
            Err(error) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    %error,
                    "translation failed, falling back to original text"
                );
                metrics::counter!("translation_fallbacks_total").increment(1);
                return TranslationOutcome::untranslated(text);
            }
        };

        // Idempotence guard: a provider echo (or empty result) means the
        // text was effectively already English, whatever we detected.
        let was_translated = !translated.is_empty()
            && translated.trim().to_lowercase() != text.trim().to_lowercase();

        if was_translated {
            tracing::info!(
                source = %resolved,
                original = %truncate(text, 50),
                translated = %truncate(&translated, 50),
                "translated to English"
            );
            TranslationOutcome {
                text: translated,
                language: language_name(&resolved),
                was_translated: true,
            }
        } else {
            tracing::info!("text already in English or translation unchanged");
            TranslationOutcome {
                text: translated,
                language: "English".to_string(),
                was_translated: false,
            }
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Detection, HeuristicDetector, TranslationError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider double: records calls and replays a canned response.
    struct MockProvider {
        response: Result<String, ()>,
        calls: AtomicUsize,
        last_source: std::sync::Mutex<Option<String>>,
    }

    impl MockProvider {
        fn returning(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_source: std::sync::Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(()),
                calls: AtomicUsize::new(0),
                last_source: std::sync::Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl TranslationProvider for MockProvider {
        async fn translate(
            &self,
            _text: &str,
            source: &str,
            _target: &str,
        ) -> Result<String, TranslationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_source.lock().unwrap() = Some(source.to_string());
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(TranslationError::Malformed("mock failure".to_string())),
            }
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    fn gateway_with(provider: Arc<MockProvider>) -> TranslationGateway {
        TranslationGateway::new(provider, Arc::new(HeuristicDetector::new()))
    }

    #[tokio::test]
    async fn test_explicit_english_is_identity() {
        let provider = Arc::new(MockProvider::returning("unused"));
        let gateway = gateway_with(provider.clone());

        let outcome = gateway.translate_to_english("any text at all", Some("en")).await;

        assert_eq!(outcome.text, "any text at all");
        assert_eq!(outcome.language, "English");
        assert!(!outcome.was_translated);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_english_variant_codes_are_identity() {
        let provider = Arc::new(MockProvider::returning("unused"));
        let gateway = gateway_with(provider.clone());

        for code in ["EN-US", "en-gb", "en-CA", "en-au"] {
            let outcome = gateway.translate_to_english("hello", Some(code)).await;
            assert!(!outcome.was_translated, "{code} should be identity");
        }
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_detected_english_skips_provider() {
        let provider = Arc::new(MockProvider::returning("unused"));
        let gateway = gateway_with(provider.clone());

        let outcome = gateway
            .translate_to_english("plain ascii sentence without markers", None)
            .await;

        assert!(!outcome.was_translated);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_french_text_is_translated() {
        let provider = Arc::new(MockProvider::returning("I am very happy today"));
        let gateway = gateway_with(provider.clone());

        let outcome = gateway
            .translate_to_english("Je suis très heureux aujourd'hui", Some(AUTO_LANGUAGE))
            .await;

        assert!(outcome.was_translated);
        assert_eq!(outcome.text, "I am very happy today");
        assert_eq!(outcome.language, "French");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(provider.last_source.lock().unwrap().as_deref(), Some("fr"));
    }

    #[tokio::test]
    async fn test_empty_source_triggers_detection() {
        // An empty code must never reach the provider as the source.
        let provider = Arc::new(MockProvider::returning("I am very happy today"));
        let gateway = gateway_with(provider.clone());

        let outcome = gateway
            .translate_to_english("Je suis très heureux aujourd'hui", Some(""))
            .await;

        assert!(outcome.was_translated);
        assert_eq!(outcome.language, "French");
        assert_eq!(provider.last_source.lock().unwrap().as_deref(), Some("fr"));
    }

    #[tokio::test]
    async fn test_explicit_source_bypasses_detection() {
        let provider = Arc::new(MockProvider::returning("good morning"));
        let gateway = gateway_with(provider.clone());

        let outcome = gateway.translate_to_english("guten Morgen", Some("de")).await;

        assert!(outcome.was_translated);
        assert_eq!(outcome.language, "German");
        assert_eq!(provider.last_source.lock().unwrap().as_deref(), Some("de"));
    }

    #[tokio::test]
    async fn test_idempotence_guard_on_echo() {
        let provider = Arc::new(MockProvider::returning("Je suis très heureux aujourd'hui"));
        let gateway = gateway_with(provider);

        let outcome = gateway
            .translate_to_english("Je suis très heureux aujourd'hui", None)
            .await;

        assert!(!outcome.was_translated);
        assert_eq!(outcome.language, "English");
    }

    #[tokio::test]
    async fn test_idempotence_guard_ignores_case_and_whitespace() {
        let provider = Arc::new(MockProvider::returning("  JE SUIS TRÈS HEUREUX AUJOURD'HUI "));
        let gateway = gateway_with(provider);

        let outcome = gateway
            .translate_to_english("je suis très heureux aujourd'hui", None)
            .await;

        assert!(!outcome.was_translated);
        assert_eq!(outcome.language, "English");
    }

    #[tokio::test]
    async fn test_empty_translation_is_not_a_translation() {
        let provider = Arc::new(MockProvider::returning(""));
        let gateway = gateway_with(provider);

        let outcome = gateway
            .translate_to_english("Je suis très heureux aujourd'hui", None)
            .await;

        assert!(!outcome.was_translated);
        assert_eq!(outcome.language, "English");
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back_to_original() {
        let provider = Arc::new(MockProvider::failing());
        let gateway = gateway_with(provider.clone());

        let original = "Je suis très heureux aujourd'hui";
        let outcome = gateway.translate_to_english(original, None).await;

        assert_eq!(outcome.text, original);
        assert_eq!(outcome.language, "English");
        assert!(!outcome.was_translated);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_auto_sentinel_reaches_provider_for_unknown_scripts() {
        // Non-ASCII text with no keyword hits resolves to the sentinel,
        // which is handed to the provider as-is.
        let provider = Arc::new(MockProvider::returning("hello"));
        let gateway = gateway_with(provider.clone());

        let outcome = gateway.translate_to_english("こんにちは", None).await;

        assert!(outcome.was_translated);
        assert_eq!(
            provider.last_source.lock().unwrap().as_deref(),
            Some(AUTO_LANGUAGE)
        );
        // "auto" is not in the language table; the label falls back to a
        // title-cased copy of the raw code.
        assert_eq!(outcome.language, "Auto");
    }
}
