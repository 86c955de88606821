//! What a display surface shows for one content value.
//!
//! Wraps the resolver with the localized signals around it: a fallback notice
//! when the original stands in for a missing translation, a badge on machine
//! translations, and the translate action when one can be offered.

use crate::content::{MultilingualContent, Provenance};
use crate::coordinator::TranslationCoordinator;
use crate::error::TranslationError;
use crate::i18n::{LanguageCode, LanguageStrings};
use crate::resolver::{resolve_detailed, ResolutionSource};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayText<'a> {
    pub text: &'a str,
    pub source: ResolutionSource,

    /// Localized notice shown only on the fallback path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_notice: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_translated_badge: Option<&'static str>,

    /// Label of the translate action, when it should be offered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_action: Option<&'static str>,
}

/// Present `content` to a reader whose UI language is `display_language`.
pub fn present<'a>(
    content: &'a MultilingualContent,
    display_language: LanguageCode,
    coordinator: &TranslationCoordinator,
) -> DisplayText<'a> {
    let translatable = coordinator.is_translatable(display_language)
        && !coordinator.is_discarded(content.id());
    present_with(content, display_language, translatable)
}

/// Same as [`present`] for surfaces that decide translatability themselves.
pub fn present_with(
    content: &MultilingualContent,
    display_language: LanguageCode,
    translatable: bool,
) -> DisplayText<'_> {
    let strings = LanguageStrings::for_language(display_language);
    let resolution = resolve_detailed(content, display_language);

    let (fallback_notice, translate_action) = if resolution.is_fallback() {
        (
            Some(strings.fallback_notice_for(content.original_language())),
            translatable.then_some(strings.translate_action),
        )
    } else {
        (None, None)
    };

    let auto_translated_badge = (resolution.source == ResolutionSource::Translation
        && content.provenance(display_language) == Some(Provenance::Machine))
    .then_some(strings.auto_translated_badge);

    DisplayText {
        text: resolution.text,
        source: resolution.source,
        fallback_notice,
        auto_translated_badge,
        translate_action,
    }
}

/// Localized message for a failed translation, if one should be shown.
pub fn failure_message(
    display_language: LanguageCode,
    error: &TranslationError,
) -> Option<&'static str> {
    LanguageStrings::for_language(display_language).error_message(error)
}
