//! Translation quality validation module.
//!
//! Checks that a provider result kept the parts of marketplace text that must
//! survive translation untouched: @mentions in chat, URLs, and numbers
//! (prices, weights, quantities). Findings are advisory; the coordinator logs
//! them and still merges the translation.

use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical errors that indicate translation issues
    pub errors: Vec<String>,

    /// Non-critical warnings about potential issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Validator for translation quality.
#[derive(Debug)]
pub struct TranslationValidator;

// Regex patterns for extraction (cached for performance)
static MENTION_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Texts shorter than this are allowed to come back unchanged (brand names, SKUs).
const UNCHANGED_TEXT_MIN_CHARS: usize = 12;

impl TranslationValidator {
    /// Validate that a translation preserves important elements from the original.
    ///
    /// # Arguments
    /// * `original` - The source text sent to the provider
    /// * `translated` - The provider result
    pub fn validate(original: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        if translated.trim().is_empty() {
            report
                .errors
                .push("Translation is empty".to_string());
            return report;
        }

        let orig_mentions = Self::extract_mentions(original);
        let trans_mentions = Self::extract_mentions(translated);
        if orig_mentions != trans_mentions {
            report.warnings.push(format!(
                "Mention mismatch: original has {:?}, translation has {:?}",
                orig_mentions, trans_mentions
            ));
        }

        let orig_urls = Self::extract_urls(original);
        let trans_urls = Self::extract_urls(translated);
        if orig_urls != trans_urls {
            report.warnings.push(format!(
                "URL mismatch: original has {} URLs, translation has {} URLs",
                orig_urls.len(),
                trans_urls.len()
            ));
        }

        // Word order changes between languages, so compare as sorted multisets
        let mut orig_numbers = Self::extract_numbers(original);
        let mut trans_numbers = Self::extract_numbers(translated);
        orig_numbers.sort();
        trans_numbers.sort();
        if orig_numbers != trans_numbers {
            report.warnings.push(format!(
                "Number mismatch: original has {:?}, translation has {:?}",
                orig_numbers, trans_numbers
            ));
        }

        if original.trim() == translated.trim()
            && original.chars().count() >= UNCHANGED_TEXT_MIN_CHARS
        {
            report
                .warnings
                .push("Translation is identical to the original".to_string());
        }

        report
    }

    /// Extract all @mentions from text
    fn extract_mentions(text: &str) -> Vec<String> {
        let regex = MENTION_REGEX
            .get_or_init(|| Regex::new(r"@([a-zA-Z0-9_]+)").expect("valid mention regex"));

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(0).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Extract all URLs from text
    fn extract_urls(text: &str) -> Vec<String> {
        let regex =
            URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").expect("valid URL regex"));

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Extract ASCII numbers (e.g. "40", "2.5", "1,200") from text
    fn extract_numbers(text: &str) -> Vec<String> {
        let regex = NUMBER_REGEX.get_or_init(|| {
            Regex::new(r"[0-9]+(?:[.,][0-9]+)*").expect("valid number regex")
        });

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Extraction Tests ====================

    #[test]
    fn test_extract_mentions() {
        let text = "Hi @ravi_farms, is @anita123 still selling?";
        let mentions = TranslationValidator::extract_mentions(text);
        assert_eq!(mentions, vec!["@ravi_farms", "@anita123"]);
    }

    #[test]
    fn test_extract_mentions_none() {
        assert!(TranslationValidator::extract_mentions("No mentions here").is_empty());
    }

    #[test]
    fn test_extract_urls() {
        let text = "Photos at https://shop.example.com/p/42 and http://img.example.org";
        let urls = TranslationValidator::extract_urls(text);
        assert_eq!(
            urls,
            vec!["https://shop.example.com/p/42", "http://img.example.org"]
        );
    }

    #[test]
    fn test_extract_numbers() {
        let text = "₹40/kg, minimum 2.5 kg, stock 1,200";
        let numbers = TranslationValidator::extract_numbers(text);
        assert_eq!(numbers, vec!["40", "2.5", "1,200"]);
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_clean_translation() {
        let original = "Fresh tomatoes ₹40/kg, ask @ravi_farms";
        let translated = "ताज़े टमाटर ₹40/kg, @ravi_farms से पूछें";

        let report = TranslationValidator::validate(original, translated);
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_reordered_numbers_are_fine() {
        let original = "Pack of 6 for 250";
        let translated = "250 में 6 का पैक";

        assert!(TranslationValidator::validate(original, translated).is_clean());
    }

    #[test]
    fn test_validate_changed_price() {
        let original = "Onions ₹30/kg";
        let translated = "प्याज़ ₹३०/kg";

        let report = TranslationValidator::validate(original, translated);
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("Number mismatch"));
    }

    #[test]
    fn test_validate_missing_mention() {
        let report = TranslationValidator::validate("Ask @ravi", "रवि से पूछें");
        assert!(report.warnings[0].contains("Mention mismatch"));
    }

    #[test]
    fn test_validate_missing_url() {
        let report =
            TranslationValidator::validate("Details at https://example.com", "विवरण यहाँ");
        assert!(report.warnings[0].contains("URL mismatch"));
    }

    #[test]
    fn test_validate_unchanged_long_text_warns() {
        let text = "Organic basmati rice, aged two years";
        let report = TranslationValidator::validate(text, text);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("identical to the original")));
    }

    #[test]
    fn test_validate_unchanged_short_text_is_fine() {
        let report = TranslationValidator::validate("Amul", "Amul");
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_empty_translation_is_error() {
        let report = TranslationValidator::validate("Rice", "  ");
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_flags() {
        let mut report = ValidationReport::new();
        assert!(report.is_clean());

        report.warnings.push("Test warning".to_string());
        assert!(!report.is_clean());
        assert!(report.has_warnings());
        assert!(!report.has_errors());
    }
}
