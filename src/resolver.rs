//! Resolution of multilingual content to display text.
//!
//! Resolution is a pure function of its arguments; it never fails and never
//! performs I/O. Whether the caller should offer a translation is decided by
//! looking at [`ResolutionSource::Fallback`].

use crate::content::MultilingualContent;
use crate::i18n::LanguageCode;
use serde::Serialize;

/// How a display string was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionSource {
    /// The requested language is the original language
    Original,
    /// An explicit translation exists for the requested language
    Translation,
    /// No translation exists; the original text stands in
    Fallback,
}

/// Display text together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub text: &'a str,
    pub source: ResolutionSource,
}

impl Resolution<'_> {
    pub fn is_fallback(&self) -> bool {
        self.source == ResolutionSource::Fallback
    }
}

/// Resolve `content` for display in `target`.
pub fn resolve(content: &MultilingualContent, target: LanguageCode) -> &str {
    resolve_detailed(content, target).text
}

/// Resolve `content` for display in `target`, reporting which path was taken.
pub fn resolve_detailed(content: &MultilingualContent, target: LanguageCode) -> Resolution<'_> {
    if target == content.original_language() {
        return Resolution {
            text: content.original_text(),
            source: ResolutionSource::Original,
        };
    }

    match content.translation(target) {
        Some(text) => Resolution {
            text,
            source: ResolutionSource::Translation,
        },
        None => Resolution {
            text: content.original_text(),
            source: ResolutionSource::Fallback,
        },
    }
}
