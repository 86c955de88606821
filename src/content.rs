//! Multilingual content: one authoritative source text plus translations.
//!
//! Values are validated on construction and every mutation keeps the model's
//! invariants: the original text is never empty, no translation is keyed by
//! the original language, and no translation is empty.

use crate::i18n::LanguageCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Validation failures at the content boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("content text must not be empty")]
    EmptyText,

    #[error("unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("'{0}' is the original language; its text lives in the original field")]
    TranslationForOriginal(LanguageCode),

    #[error("translation for '{0}' must not be empty")]
    EmptyTranslation(LanguageCode),

    #[error("the original text cannot be removed")]
    CannotRemoveOriginal,

    #[error("provenance recorded for '{0}' without a translation")]
    OrphanProvenance(LanguageCode),

    #[error("invalid content payload: {0}")]
    InvalidPayload(String),
}

/// Identity of a content value.
///
/// Immutable updates keep the identity, so the in-flight table and late
/// results can be matched against the value they were started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContentId(Uuid);

impl ContentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ContentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Who produced a translation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Returned by the translation provider
    Machine,
    /// Typed by a person in the editor
    Human,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TranslationEntry {
    text: String,
    provenance: Provenance,
}

/// A piece of user-authored text stored once in its author's language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultilingualContent {
    id: ContentId,
    original_language: LanguageCode,
    original_text: String,
    translations: BTreeMap<LanguageCode, TranslationEntry>,
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

impl MultilingualContent {
    /// Create content from text a user just entered in `language`.
    ///
    /// Rejects empty or whitespace-only text.
    pub fn create(text: impl Into<String>, language: LanguageCode) -> Result<Self, ContentError> {
        let text = text.into();
        if is_blank(&text) {
            return Err(ContentError::EmptyText);
        }
        Ok(Self {
            id: ContentId::new(),
            original_language: language,
            original_text: text,
            translations: BTreeMap::new(),
        })
    }

    /// Replace the identity, e.g. with one derived from the owning entity.
    pub fn with_id(mut self, id: ContentId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> ContentId {
        self.id
    }

    pub fn original_language(&self) -> LanguageCode {
        self.original_language
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// The stored translation for `language`, if any.
    ///
    /// Never returns the original text; use the resolver for display.
    pub fn translation(&self, language: LanguageCode) -> Option<&str> {
        self.translations.get(&language).map(|entry| entry.text.as_str())
    }

    pub fn has_translation(&self, language: LanguageCode) -> bool {
        self.translations.contains_key(&language)
    }

    /// All stored translations, ordered by language code.
    pub fn translations(&self) -> impl Iterator<Item = (LanguageCode, &str)> + '_ {
        self.translations
            .iter()
            .map(|(language, entry)| (*language, entry.text.as_str()))
    }

    pub fn translation_count(&self) -> usize {
        self.translations.len()
    }

    /// Provenance of the translation for `language`, if one exists.
    pub fn provenance(&self, language: LanguageCode) -> Option<Provenance> {
        self.translations.get(&language).map(|entry| entry.provenance)
    }

    /// True while at least one stored translation came from the provider.
    pub fn auto_translated(&self) -> bool {
        self.translations
            .values()
            .any(|entry| entry.provenance == Provenance::Machine)
    }

    /// Return a copy with a provider result merged in for `language`.
    ///
    /// The receiver is left untouched so holders of the old value are not
    /// affected.
    pub fn with_machine_translation(
        &self,
        language: LanguageCode,
        text: impl Into<String>,
    ) -> Result<Self, ContentError> {
        let mut updated = self.clone();
        updated.set_translation(language, text, Provenance::Machine)?;
        Ok(updated)
    }

    /// Overwrite the original text.
    pub fn set_original_text(&mut self, text: impl Into<String>) -> Result<(), ContentError> {
        let text = text.into();
        if is_blank(&text) {
            return Err(ContentError::EmptyText);
        }
        self.original_text = text;
        Ok(())
    }

    /// Insert or overwrite the translation for `language`.
    pub fn set_translation(
        &mut self,
        language: LanguageCode,
        text: impl Into<String>,
        provenance: Provenance,
    ) -> Result<(), ContentError> {
        if language == self.original_language {
            return Err(ContentError::TranslationForOriginal(language));
        }
        let text = text.into();
        if is_blank(&text) {
            return Err(ContentError::EmptyTranslation(language));
        }
        self.translations
            .insert(language, TranslationEntry { text, provenance });
        Ok(())
    }

    /// Delete the translation for `language`, returning the removed text.
    pub fn remove_translation(
        &mut self,
        language: LanguageCode,
    ) -> Result<Option<String>, ContentError> {
        if language == self.original_language {
            return Err(ContentError::CannotRemoveOriginal);
        }
        Ok(self.translations.remove(&language).map(|entry| entry.text))
    }

    // ==================== Transport Boundary ====================

    /// Validate a transport payload into content with a fresh identity.
    pub fn from_payload(payload: ContentPayload) -> Result<Self, ContentError> {
        Self::from_payload_with_id(payload, ContentId::new())
    }

    /// Validate a transport payload into content with a caller-chosen identity.
    pub fn from_payload_with_id(
        payload: ContentPayload,
        id: ContentId,
    ) -> Result<Self, ContentError> {
        let original_language = LanguageCode::from_code(&payload.original_language)?;
        let mut content = Self::create(payload.original_text, original_language)?.with_id(id);

        let mut provenance = BTreeMap::new();
        if let Some(raw) = payload.provenance {
            for (code, value) in raw {
                provenance.insert(LanguageCode::from_code(&code)?, value);
            }
        }

        let default_provenance = if payload.auto_translated {
            Provenance::Machine
        } else {
            Provenance::Human
        };

        for (code, text) in payload.translations {
            let language = LanguageCode::from_code(&code)?;
            let entry_provenance = provenance.remove(&language).unwrap_or(default_provenance);
            content.set_translation(language, text, entry_provenance)?;
        }

        if let Some(language) = provenance.into_keys().next() {
            return Err(ContentError::OrphanProvenance(language));
        }

        Ok(content)
    }

    /// Parse and validate a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let payload: ContentPayload =
            serde_json::from_str(json).map_err(|e| ContentError::InvalidPayload(e.to_string()))?;
        Self::from_payload(payload)
    }

    /// The transport shape of this content.
    pub fn to_payload(&self) -> ContentPayload {
        ContentPayload {
            original_language: self.original_language.code().to_string(),
            original_text: self.original_text.clone(),
            translations: self
                .translations
                .iter()
                .map(|(language, entry)| (language.code().to_string(), entry.text.clone()))
                .collect(),
            auto_translated: self.auto_translated(),
            provenance: Some(
                self.translations
                    .iter()
                    .map(|(language, entry)| (language.code().to_string(), entry.provenance))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<ContentPayload> for MultilingualContent {
    type Error = ContentError;

    fn try_from(payload: ContentPayload) -> Result<Self, Self::Error> {
        Self::from_payload(payload)
    }
}

/// Untyped content as it travels over the wire.
///
/// Every field except `provenance` is required; nothing is defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPayload {
    pub original_language: String,
    pub original_text: String,
    pub translations: BTreeMap<String, String>,
    pub auto_translated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<BTreeMap<String, Provenance>>,
}
