//! Translate a piece of marketplace text into every supported language and
//! print what each reader would see.
//!
//! Usage:
//!   cargo run -- <language-code> <text...>
//!   cargo run -- en "Fresh Tomatoes, ₹40/kg"
//!
//! Required environment variables:
//! - OPENAI_API_KEY
//!
//! Optional:
//! - OPENAI_MODEL (defaults to gpt-4o-mini)
//! - OPENAI_API_URL
//! - TRANSLATION_TIMEOUT_SECS (defaults to 20)
//! - TRANSLATION_MAX_ATTEMPTS (defaults to 1)
//! - DISPLAY_LANGUAGE (defaults to en)
//! - SUPPORTED_LANGUAGES (comma-separated codes the provider accepts)

use anyhow::{bail, Context, Result};
use polyglot_listings::config::Config;
use polyglot_listings::display::{failure_message, present};
use polyglot_listings::{LanguageCode, MultilingualContent, OpenAiTranslator, TranslationCoordinator};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Serialize)]
struct Row<'a> {
    language: LanguageCode,
    #[serde(flatten)]
    display: polyglot_listings::DisplayText<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("polyglot_listings=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        bail!("Usage: {} <language-code> <text...>", args[0]);
    }
    let language = LanguageCode::from_code(&args[1]).context("Unknown source language")?;
    let text = args[2..].join(" ");

    // Load configuration from environment
    let config = Config::from_env()?;

    let client = reqwest::Client::builder()
        .timeout(config.translation_timeout)
        .build()
        .context("Failed to build HTTP client")?;
    let provider = Arc::new(OpenAiTranslator::from_config(client, &config));
    let coordinator =
        TranslationCoordinator::new(provider).with_config(config.coordinator_config());

    let content = MultilingualContent::create(text, language).context("Invalid content")?;

    info!(
        "Translating {} text into {} languages",
        language.english_name(),
        coordinator.catalog().len() - 1
    );
    let outcome = coordinator.translate_all(&content).await;

    let rows: Vec<Row<'_>> = coordinator
        .catalog()
        .codes()
        .map(|code| Row {
            language: code,
            display: present(&outcome.content, code, &coordinator),
            error: outcome
                .results
                .get(&code)
                .and_then(|result| result.as_ref().err())
                .and_then(|error| failure_message(config.display_language, error)),
        })
        .collect();

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "content": outcome.content.to_payload(),
            "display": rows,
            "metrics": coordinator.metrics(),
        }))?
    );

    let failures = outcome.failed().count();
    if failures > 0 {
        info!("{} languages could not be translated", failures);
    } else {
        info!("All translations completed");
    }

    Ok(())
}
