//! Translation provider contract.
//!
//! The core never translates text itself. It calls a [`TranslationProvider`],
//! which is expected to be network-bound and fallible. Callers must not pass
//! empty text.

use crate::error::TranslationError;
use crate::i18n::LanguageCode;
use futures::future::BoxFuture;

/// Future returned by a provider call.
pub type ProviderFuture<'a> = BoxFuture<'a, Result<String, TranslationError>>;

/// An external machine-translation service.
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` into `target`.
    fn translate<'a>(&'a self, text: &'a str, target: LanguageCode) -> ProviderFuture<'a>;
}
