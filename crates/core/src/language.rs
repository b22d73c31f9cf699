//! Static language table
//!
//! ISO-639-1 codes mapped to display names for the languages the
//! translation provider commonly supports. Read-only for the process
//! lifetime.

use once_cell::sync::Lazy;

/// Sentinel meaning "caller did not specify a language; detect it".
pub const AUTO_LANGUAGE: &str = "auto";

/// Codes treated as English variants; these never trigger translation.
const ENGLISH_VARIANTS: [&str; 5] = ["en", "en-us", "en-gb", "en-ca", "en-au"];

static LANGUAGE_TABLE: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("en", "English"),
        ("es", "Spanish"),
        ("fr", "French"),
        ("de", "German"),
        ("it", "Italian"),
        ("pt", "Portuguese"),
        ("ru", "Russian"),
        ("ja", "Japanese"),
        ("ko", "Korean"),
        ("zh", "Chinese"),
        ("ar", "Arabic"),
        ("hi", "Hindi"),
        ("nl", "Dutch"),
        ("pl", "Polish"),
        ("tr", "Turkish"),
        ("sv", "Swedish"),
        ("da", "Danish"),
        ("fi", "Finnish"),
        ("no", "Norwegian"),
        ("cs", "Czech"),
        ("hu", "Hungarian"),
        ("ro", "Romanian"),
        ("el", "Greek"),
        ("th", "Thai"),
        ("vi", "Vietnamese"),
        ("id", "Indonesian"),
        ("he", "Hebrew"),
        ("uk", "Ukrainian"),
    ]
});

/// The full code → display-name table, in enumeration order.
pub fn supported_languages() -> &'static [(&'static str, &'static str)] {
    &LANGUAGE_TABLE
}

/// True when the code names an English variant. The `auto` sentinel is
/// never English.
pub fn is_english(code: &str) -> bool {
    let lower = code.to_lowercase();
    ENGLISH_VARIANTS.contains(&lower.as_str())
}

/// Resolve a language code to its display name.
///
/// English variants all resolve to "English"; unknown codes fall back to
/// a title-cased copy of the raw code; an empty code is "Unknown".
pub fn language_name(code: &str) -> String {
    if code.is_empty() {
        return "Unknown".to_string();
    }

    let lower = code.to_lowercase();
    if ENGLISH_VARIANTS.contains(&lower.as_str()) {
        return "English".to_string();
    }

    LANGUAGE_TABLE
        .iter()
        .find(|(c, _)| *c == lower)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| title_case(code))
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str().to_lowercase().as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_28_entries() {
        assert_eq!(supported_languages().len(), 28);
    }

    #[test]
    fn test_every_name_is_non_empty() {
        for (code, name) in supported_languages() {
            assert!(!code.is_empty());
            assert!(!name.is_empty());
        }
    }

    #[test]
    fn test_english_variants() {
        assert!(is_english("en"));
        assert!(is_english("EN-US"));
        assert!(is_english("en-gb"));
        assert!(!is_english("fr"));
        assert!(!is_english(AUTO_LANGUAGE));
    }

    #[test]
    fn test_language_name_lookup() {
        assert_eq!(language_name("fr"), "French");
        assert_eq!(language_name("DE"), "German");
        assert_eq!(language_name("en-ca"), "English");
    }

    #[test]
    fn test_unknown_code_is_title_cased() {
        assert_eq!(language_name("xx"), "Xx");
        assert_eq!(language_name(""), "Unknown");
    }
}
