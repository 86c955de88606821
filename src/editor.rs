//! Bidirectional editing surface over one content value.
//!
//! The editor tracks which language tab is active and routes input to the
//! matching field: the original text on the original language's tab, the
//! translation entry on every other tab.

use crate::content::{ContentError, MultilingualContent, Provenance};
use crate::coordinator::{BulkTranslationOutcome, TranslationOutcome};
use crate::i18n::LanguageCode;
use crate::resolver::resolve;
use tracing::debug;

/// Which field the editor is writing to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    EditingOriginal,
    EditingTranslation(LanguageCode),
}

#[derive(Debug, Clone)]
pub struct ContentEditor {
    content: MultilingualContent,
    state: EditorState,
}

impl ContentEditor {
    /// Open an editor on the tab for the caller's display language.
    pub fn new(content: MultilingualContent, display_language: LanguageCode) -> Self {
        let state = state_for(&content, display_language);
        Self { content, state }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn active_language(&self) -> LanguageCode {
        match self.state {
            EditorState::EditingOriginal => self.content.original_language(),
            EditorState::EditingTranslation(language) => language,
        }
    }

    pub fn content(&self) -> &MultilingualContent {
        &self.content
    }

    pub fn into_content(self) -> MultilingualContent {
        self.content
    }

    pub fn select_language(&mut self, language: LanguageCode) {
        self.state = state_for(&self.content, language);
    }

    /// Raw value of the active field; empty for a tab with no translation yet.
    pub fn field_text(&self) -> &str {
        match self.state {
            EditorState::EditingOriginal => self.content.original_text(),
            EditorState::EditingTranslation(language) => {
                self.content.translation(language).unwrap_or("")
            }
        }
    }

    /// What a reader of the active tab would see, including the fallback.
    pub fn display_text(&self) -> &str {
        resolve(&self.content, self.active_language())
    }

    /// Write `text` into the active field.
    ///
    /// Blank input on the original tab is rejected and changes nothing. Blank
    /// input on a translation tab deletes that translation and keeps the tab.
    pub fn input(&mut self, text: impl Into<String>) -> Result<(), ContentError> {
        let text = text.into();
        match self.state {
            EditorState::EditingOriginal => self.content.set_original_text(text),
            EditorState::EditingTranslation(language) => {
                if text.trim().is_empty() {
                    self.content.remove_translation(language)?;
                    Ok(())
                } else {
                    self.content
                        .set_translation(language, text, Provenance::Human)
                }
            }
        }
    }

    /// Delete the translation for `language`.
    ///
    /// If it was the active tab the editor returns to the original.
    pub fn remove_translation(
        &mut self,
        language: LanguageCode,
    ) -> Result<Option<String>, ContentError> {
        let removed = self.content.remove_translation(language)?;
        if self.state == EditorState::EditingTranslation(language) {
            self.state = EditorState::EditingOriginal;
        }
        Ok(removed)
    }

    /// Apply a single-language coordinator outcome to the live content.
    ///
    /// Returns whether a translation was written.
    pub fn absorb(&mut self, outcome: &TranslationOutcome) -> bool {
        if outcome.error.is_some() {
            return false;
        }
        self.absorb_language(&outcome.content, outcome.language)
    }

    /// Apply every successful language of a bulk outcome.
    ///
    /// Returns the number of translations written.
    pub fn absorb_all(&mut self, outcome: &BulkTranslationOutcome) -> usize {
        outcome
            .succeeded()
            .filter(|language| self.absorb_language(&outcome.content, *language))
            .count()
    }

    fn absorb_language(&mut self, translated: &MultilingualContent, language: LanguageCode) -> bool {
        if translated.id() != self.content.id() {
            debug!(
                "Ignoring translation for {}: editor holds {}",
                translated.id(),
                self.content.id()
            );
            return false;
        }
        // Made from a source text the user has since changed
        if translated.original_text() != self.content.original_text() {
            return false;
        }
        if self.content.provenance(language) == Some(Provenance::Human) {
            return false;
        }
        if translated.provenance(language) != Some(Provenance::Machine) {
            return false;
        }
        let Some(text) = translated.translation(language) else {
            return false;
        };
        self.content
            .set_translation(language, text, Provenance::Machine)
            .is_ok()
    }
}

fn state_for(content: &MultilingualContent, language: LanguageCode) -> EditorState {
    if language == content.original_language() {
        EditorState::EditingOriginal
    } else {
        EditorState::EditingTranslation(language)
    }
}
