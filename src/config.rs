use crate::coordinator::CoordinatorConfig;
use crate::i18n::LanguageCode;
use crate::retry::RetryConfig;
use anyhow::{bail, Context, Result};
use std::time::Duration;

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone)]
pub struct Config {
    // OpenAI
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_api_url: String,

    // Translation policy
    pub translation_timeout: Duration,
    pub translation_max_attempts: u32,

    // Languages
    pub display_language: LanguageCode,
    pub supported_languages: Option<Vec<LanguageCode>>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let translation_timeout_secs = match std::env::var("TRANSLATION_TIMEOUT_SECS") {
            Ok(value) => value
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid TRANSLATION_TIMEOUT_SECS: {}", value))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        if translation_timeout_secs == 0 {
            bail!("TRANSLATION_TIMEOUT_SECS must be at least 1");
        }

        let translation_max_attempts = match std::env::var("TRANSLATION_MAX_ATTEMPTS") {
            Ok(value) => value
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid TRANSLATION_MAX_ATTEMPTS: {}", value))?,
            Err(_) => 1,
        };
        if translation_max_attempts == 0 {
            bail!("TRANSLATION_MAX_ATTEMPTS must be at least 1");
        }

        let display_language = match std::env::var("DISPLAY_LANGUAGE") {
            Ok(value) => LanguageCode::from_code(&value).context("Invalid DISPLAY_LANGUAGE")?,
            Err(_) => LanguageCode::ENGLISH,
        };

        let supported_languages = match std::env::var("SUPPORTED_LANGUAGES") {
            Ok(value) if !value.trim().is_empty() => Some(
                parse_language_list(&value).context("Invalid SUPPORTED_LANGUAGES")?,
            ),
            _ => None,
        };

        Ok(Self {
            // OpenAI
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY not set")?,
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_URL.to_string()),

            // Translation policy
            translation_timeout: Duration::from_secs(translation_timeout_secs),
            translation_max_attempts,

            // Languages
            display_language,
            supported_languages,
        })
    }

    /// Coordinator policy derived from this configuration.
    pub fn coordinator_config(&self) -> CoordinatorConfig {
        let retry = if self.translation_max_attempts > 1 {
            RetryConfig::provider_call(self.translation_max_attempts)
        } else {
            RetryConfig::single_attempt()
        };

        CoordinatorConfig {
            provider_timeout: Some(self.translation_timeout),
            retry,
            ..CoordinatorConfig::default()
        }
    }
}

/// Parse a comma-separated list of language codes, e.g. `"hi, ta,bn"`.
fn parse_language_list(value: &str) -> Result<Vec<LanguageCode>> {
    let mut languages = Vec::new();
    for code in value.split(',').map(str::trim).filter(|code| !code.is_empty()) {
        let language = LanguageCode::from_code(code)?;
        if !languages.contains(&language) {
            languages.push(language);
        }
    }
    Ok(languages)
}
