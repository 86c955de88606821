use crate::i18n::LanguageCode;
use std::time::Duration;
use thiserror::Error;

/// Why a translation for one (content, language) pair could not be produced.
///
/// Errors are `Clone` because one provider outcome is shared by every caller
/// that joined the same in-flight request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// Transient network or service failure, including timeouts
    #[error("translation provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The provider asked us to slow down
    #[error("translation provider rate limit reached")]
    RateLimited { retry_after: Option<Duration> },

    /// The provider cannot translate into this language
    #[error("translation into '{0}' is not supported")]
    UnsupportedLanguage(LanguageCode),

    /// Rejected locally before any provider call
    #[error("source text is empty")]
    EmptySourceText,

    /// The provider refused the request for a reason retrying will not fix
    #[error("translation request rejected: {0}")]
    Rejected(String),

    /// The content was torn down before the result arrived
    #[error("content was discarded before the translation arrived")]
    Discarded,
}

impl TranslationError {
    /// Whether trying the same request again later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TranslationError::ProviderUnavailable(_) | TranslationError::RateLimited { .. }
        )
    }

    /// Stable machine-readable name for the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            TranslationError::ProviderUnavailable(_) => "provider_unavailable",
            TranslationError::RateLimited { .. } => "rate_limited",
            TranslationError::UnsupportedLanguage(_) => "unsupported_language",
            TranslationError::EmptySourceText => "empty_source_text",
            TranslationError::Rejected(_) => "rejected",
            TranslationError::Discarded => "discarded",
        }
    }
}
