//! Language code type: a catalog-validated language identifier.

use crate::content::ContentError;
use crate::i18n::{LanguageCatalog, LanguageDescriptor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated language code.
///
/// Only codes present in the built-in [`LanguageCatalog`] can be constructed,
/// so every `LanguageCode` can be resolved to its descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageCode {
    /// ISO 639-1 language code (e.g., "en", "hi")
    code: &'static str,
}

impl LanguageCode {
    pub const ENGLISH: LanguageCode = LanguageCode { code: "en" };
    pub const HINDI: LanguageCode = LanguageCode { code: "hi" };
    pub const BENGALI: LanguageCode = LanguageCode { code: "bn" };
    pub const TELUGU: LanguageCode = LanguageCode { code: "te" };
    pub const MARATHI: LanguageCode = LanguageCode { code: "mr" };
    pub const TAMIL: LanguageCode = LanguageCode { code: "ta" };
    pub const GUJARATI: LanguageCode = LanguageCode { code: "gu" };
    pub const KANNADA: LanguageCode = LanguageCode { code: "kn" };
    pub const MALAYALAM: LanguageCode = LanguageCode { code: "ml" };
    pub const PUNJABI: LanguageCode = LanguageCode { code: "pa" };

    /// Create a LanguageCode from a code string.
    ///
    /// Surrounding whitespace is ignored and matching is case-insensitive,
    /// so `" HI "` yields Hindi.
    ///
    /// # Returns
    /// * `Ok(LanguageCode)` if the code is in the catalog
    /// * `Err(ContentError::UnknownLanguage)` otherwise
    pub fn from_code(code: &str) -> Result<LanguageCode, ContentError> {
        let normalized = code.trim().to_ascii_lowercase();
        LanguageCatalog::get()
            .get_by_code(&normalized)
            .map(LanguageDescriptor::language)
            .ok_or_else(|| ContentError::UnknownLanguage(code.to_string()))
    }

    /// Wrap a code already known to come from the catalog.
    pub(crate) const fn from_static(code: &'static str) -> LanguageCode {
        LanguageCode { code }
    }

    /// Get the ISO 639-1 code (e.g., "hi").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the catalog descriptor for this language.
    ///
    /// # Panics
    /// Panics if the code is missing from the built-in catalog, which cannot
    /// happen for values built through `from_code` or the constants.
    pub fn descriptor(&self) -> &'static LanguageDescriptor {
        LanguageCatalog::get()
            .get_by_code(self.code)
            .expect("LanguageCode should always be in the built-in catalog")
    }

    /// English name of the language (e.g., "Hindi").
    pub fn english_name(&self) -> &'static str {
        self.descriptor().english_name
    }

    /// Native name of the language (e.g., "हिन्दी").
    pub fn native_name(&self) -> &'static str {
        self.descriptor().native_name
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::from_code(s)
    }
}

impl Serialize for LanguageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        LanguageCode::from_code(&raw).map_err(serde::de::Error::custom)
    }
}
