//! Multilingual marketplace content.
//!
//! User-written text is stored once in its author's language and shown to
//! every reader in theirs: a stored translation when one exists, the original
//! otherwise. Missing translations are produced on demand through a
//! [`TranslationProvider`], with at most one provider call outstanding per
//! content and language.

pub mod config;
pub mod content;
pub mod coordinator;
pub mod display;
pub mod editor;
pub mod error;
pub mod i18n;
pub mod openai;
pub mod provider;
pub mod resolver;
pub mod retry;

pub use content::{ContentError, ContentId, ContentPayload, MultilingualContent, Provenance};
pub use coordinator::{
    BulkTranslationOutcome, CoordinatorConfig, TranslationCoordinator, TranslationOutcome,
};
pub use display::{present, present_with, DisplayText};
pub use editor::{ContentEditor, EditorState};
pub use error::TranslationError;
pub use i18n::{LanguageCatalog, LanguageCode};
pub use openai::OpenAiTranslator;
pub use provider::{ProviderFuture, TranslationProvider};
pub use resolver::{resolve, resolve_detailed, Resolution, ResolutionSource};
