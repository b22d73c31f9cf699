//! Heuristic language detection
//!
//! Keyword-list matching over a small fixed set of languages, with a
//! non-ASCII escape hatch. Coarse by design: the provider performs real
//! detection when we hand it the `auto` sentinel.

use sentiment_core::AUTO_LANGUAGE;

/// Marker tokens per language, checked as substrings of the lower-cased
/// input. Enumeration order breaks ties: the first language listed wins.
const INDICATORS: [(&str, [&str; 10]); 5] = [
    (
        "fr",
        ["je", "tu", "il", "elle", "nous", "vous", "être", "avoir", "très", "aujourd'hui"],
    ),
    (
        "es",
        ["yo", "tú", "él", "ella", "nosotros", "vosotros", "ser", "estar", "muy", "hoy"],
    ),
    (
        "de",
        ["ich", "du", "er", "sie", "wir", "ihr", "sein", "haben", "sehr", "heute"],
    ),
    (
        "it",
        ["io", "tu", "lui", "lei", "noi", "voi", "essere", "avere", "molto", "oggi"],
    ),
    (
        "pt",
        ["eu", "tu", "ele", "ela", "nós", "vós", "ser", "estar", "muito", "hoje"],
    ),
];

/// A detected language code with a fixed confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// ISO code, or the `auto` sentinel when the heuristic cannot decide.
    pub code: String,
    /// 0.7 on a concrete guess, 0.5 for the `auto` sentinel.
    pub confidence: f64,
}

/// Replaceable detection seam for the gateway.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> Detection;
}

/// Keyword-table detector.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicDetector;

impl HeuristicDetector {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetector for HeuristicDetector {
    fn detect(&self, text: &str) -> Detection {
        let text_lower = text.to_lowercase();

        let mut best: Option<(&str, usize)> = None;
        for (code, words) in INDICATORS.iter() {
            let count = words.iter().filter(|w| text_lower.contains(*w)).count();
            if count > 0 && best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((code, count));
            }
        }

        if let Some((code, count)) = best {
            tracing::debug!(code, hits = count, "detected language via keyword heuristic");
            return Detection {
                code: code.to_string(),
                confidence: 0.7,
            };
        }

        // Non-ASCII text with no keyword hits could be any language; let
        // the provider decide.
        if text.chars().any(|c| !c.is_ascii()) {
            return Detection {
                code: AUTO_LANGUAGE.to_string(),
                confidence: 0.5,
            };
        }

        Detection {
            code: "en".to_string(),
            confidence: 0.7,
        }
    }
}
