use crate::config::Config;
use crate::error::TranslationError;
use crate::i18n::LanguageCode;
use crate::provider::{ProviderFuture, TranslationProvider};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use tracing::debug;

/// OpenAI Chat Completion request for translation
#[derive(Debug, Serialize)]
struct TranslationRequest {
    model: String,
    messages: Vec<Message>,
    max_completion_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_effort: Option<String>,
}

/// Listing titles, descriptions and chat messages are short
const MAX_COMPLETION_TOKENS: u32 = 1000;
const REASONING_MAX_COMPLETION_TOKENS: u32 = 16000;

/// Check if a model is a reasoning model that doesn't support temperature
fn is_reasoning_model(model: &str) -> bool {
    model.starts_with("gpt-5")
        || model.starts_with("o1")
        || model.starts_with("o3")
        || model.starts_with("o4")
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Build the system prompt for translation
fn build_translation_system_prompt(target: LanguageCode) -> String {
    format!(
        r#"You translate user-written marketplace content (product listings, descriptions and buyer/seller chat messages) into {english} ({native}).

## Translation Rules

### DO NOT translate:
- Prices, currency symbols and amounts (e.g., ₹40, Rs. 250)
- Units and quantities (kg, g, litre, dozen, 2.5)
- Brand names and product model numbers
- URLs and links
- @mentions of other users

### DO translate:
- Product names that are common nouns (tomatoes, rice, saree)
- Descriptions, conditions and delivery notes
- The full meaning of chat messages, keeping their tone

### Output:
- Reply with the translated text only, no quotes or explanations
- Keep line breaks and emojis as they are
- If the text is already in {english}, return it unchanged"#,
        english = target.english_name(),
        native = target.native_name()
    )
}

/// Build the user prompt for translation
fn build_translation_user_prompt(text: &str, target: LanguageCode) -> String {
    format!(
        "Translate the following marketplace text to {}:\n\n{}",
        target.english_name(),
        text
    )
}

/// [`TranslationProvider`] backed by an OpenAI-compatible chat-completions
/// endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
    supported_languages: Option<HashSet<LanguageCode>>,
}

impl OpenAiTranslator {
    pub fn new(
        client: reqwest::Client,
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            api_url: api_url.into(),
            model: model.into(),
            supported_languages: None,
        }
    }

    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        let translator = Self::new(
            client,
            config.openai_api_key.clone(),
            config.openai_api_url.clone(),
            config.openai_model.clone(),
        );
        match &config.supported_languages {
            Some(languages) => translator.with_supported_languages(languages.iter().copied()),
            None => translator,
        }
    }

    /// Only translate into these languages; others fail without a request.
    pub fn with_supported_languages(
        mut self,
        languages: impl IntoIterator<Item = LanguageCode>,
    ) -> Self {
        self.supported_languages = Some(languages.into_iter().collect());
        self
    }

    fn supports(&self, target: LanguageCode) -> bool {
        self.supported_languages
            .as_ref()
            .map_or(true, |languages| languages.contains(&target))
    }

    fn build_request(&self, text: &str, target: LanguageCode) -> TranslationRequest {
        // Reasoning models need higher token limits and don't support temperature
        let is_reasoning = is_reasoning_model(&self.model);

        TranslationRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: build_translation_system_prompt(target),
                },
                Message {
                    role: "user".to_string(),
                    content: build_translation_user_prompt(text, target),
                },
            ],
            max_completion_tokens: if is_reasoning {
                REASONING_MAX_COMPLETION_TOKENS
            } else {
                MAX_COMPLETION_TOKENS
            },
            temperature: if is_reasoning { None } else { Some(0.3) },
            reasoning_effort: is_reasoning.then(|| "low".to_string()),
        }
    }

    async fn translate_text(
        &self,
        text: &str,
        target: LanguageCode,
    ) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Err(TranslationError::EmptySourceText);
        }
        if !self.supports(target) {
            debug!("{} is outside the configured language list", target);
            return Err(TranslationError::UnsupportedLanguage(target));
        }

        let request = self.build_request(text, target);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                TranslationError::ProviderUnavailable(format!(
                    "failed to send translation request: {}",
                    e
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = parse_retry_after(response.headers());
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(status_error(status, retry_after, &body));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            TranslationError::ProviderUnavailable(format!(
                "failed to parse translation response: {}",
                e
            ))
        })?;

        let translated = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                TranslationError::ProviderUnavailable(
                    "translation response contained no choices".to_string(),
                )
            })?;

        Ok(translated)
    }
}

impl TranslationProvider for OpenAiTranslator {
    fn translate<'a>(&'a self, text: &'a str, target: LanguageCode) -> ProviderFuture<'a> {
        Box::pin(self.translate_text(text, target))
    }
}

/// `Retry-After` in whole seconds; HTTP-date values are ignored.
fn parse_retry_after(headers: &reqwest::header::HeaderMap) -> Option<Duration> {
    headers
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Map a non-success HTTP status onto the translation error taxonomy.
///
/// 4xx responses describe this one request (oversized text, unknown model,
/// bad key), never the target language, so they all map to `Rejected`.
/// Languages are only reported unsupported through the allow-list.
fn status_error(status: StatusCode, retry_after: Option<Duration>, body: &str) -> TranslationError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => TranslationError::RateLimited { retry_after },
        s if s.is_server_error() => {
            TranslationError::ProviderUnavailable(format!("OpenAI API error ({}): {}", s, body))
        }
        s => TranslationError::Rejected(format!("OpenAI API error ({}): {}", s, body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_partial_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    // ==================== Prompt Tests ====================

    #[test]
    fn test_build_translation_system_prompt_names_language() {
        let prompt = build_translation_system_prompt(LanguageCode::HINDI);

        assert!(prompt.contains("Hindi"));
        assert!(prompt.contains("हिन्दी"));
        assert!(prompt.contains("DO NOT translate"));
        assert!(prompt.contains("Prices"));
        assert!(prompt.contains("@mentions"));
        assert!(prompt.contains("URLs"));
    }

    #[test]
    fn test_build_translation_user_prompt() {
        let prompt = build_translation_user_prompt("Fresh Tomatoes", LanguageCode::TAMIL);

        assert!(prompt.contains("Tamil"));
        assert!(prompt.contains("Fresh Tomatoes"));
    }

    // ==================== Request Structure Tests ====================

    #[test]
    fn test_translation_request_serialization() {
        let translator = translator("http://localhost", "gpt-4o-mini");
        let request = translator.build_request("Hello", LanguageCode::HINDI);

        let json = serde_json::to_string(&request).expect("Should serialize");
        assert!(json.contains("gpt-4o-mini"));
        assert!(json.contains("0.3"));
        assert!(json.contains("\"max_completion_tokens\":1000"));
        assert!(json.contains("system"));
        assert!(json.contains("user"));
        assert!(!json.contains("reasoning_effort"));
    }

    #[test]
    fn test_translation_request_serialization_reasoning_model() {
        let translator = translator("http://localhost", "gpt-5-mini");
        let request = translator.build_request("Hello", LanguageCode::HINDI);

        let json = serde_json::to_string(&request).expect("Should serialize");
        assert!(json.contains("16000"));
        assert!(json.contains("\"reasoning_effort\":\"low\""));
        assert!(!json.contains("temperature"));
    }

    #[test]
    fn test_is_reasoning_model() {
        assert!(is_reasoning_model("gpt-5-mini"));
        assert!(is_reasoning_model("o1-preview"));
        assert!(is_reasoning_model("o3"));
        assert!(is_reasoning_model("o4-mini"));
        assert!(!is_reasoning_model("gpt-4o-mini"));
        assert!(!is_reasoning_model("gpt-4-turbo"));
    }

    // ==================== Status Mapping Tests ====================

    #[test]
    fn test_status_error_mapping() {
        assert_eq!(
            status_error(StatusCode::TOO_MANY_REQUESTS, None, ""),
            TranslationError::RateLimited { retry_after: None }
        );
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, None, ""),
            TranslationError::ProviderUnavailable(_)
        ));
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, None, "bad key"),
            TranslationError::Rejected(ref m) if m.contains("bad key")
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, None, ""),
            TranslationError::Rejected(_)
        ));
    }

    #[test]
    fn test_request_level_client_errors_are_rejected() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::NOT_FOUND,
            StatusCode::UNPROCESSABLE_ENTITY,
        ] {
            let error = status_error(status, None, "context_length_exceeded");
            assert!(
                matches!(error, TranslationError::Rejected(ref m) if m.contains("context_length_exceeded")),
                "{} mapped to {:?}",
                status,
                error
            );
        }
    }

    // ==================== Integration Tests with Wiremock ====================

    fn translator(api_url: &str, model: &str) -> OpenAiTranslator {
        OpenAiTranslator::new(reqwest::Client::new(), "test-openai-key", api_url, model)
    }

    fn mock_translator(server: &MockServer) -> OpenAiTranslator {
        translator(
            &format!("{}/v1/chat/completions", server.uri()),
            "gpt-4o-mini",
        )
    }

    fn create_openai_response(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": content
                    },
                    "finish_reason": "stop"
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_translate_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-openai-key"))
            .and(body_partial_json(serde_json::json!({ "model": "gpt-4o-mini" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(create_openai_response(" ताज़े टमाटर\n")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = mock_translator(&mock_server)
            .translate("Fresh Tomatoes", LanguageCode::HINDI)
            .await
            .expect("Should succeed");

        assert_eq!(result, "ताज़े टमाटर");
    }

    #[tokio::test]
    async fn test_translate_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let error = mock_translator(&mock_server)
            .translate("Fresh Tomatoes", LanguageCode::HINDI)
            .await
            .expect_err("Should fail");

        assert!(matches!(error, TranslationError::ProviderUnavailable(ref m) if m.contains("500")));
    }

    #[tokio::test]
    async fn test_translate_rate_limited_reads_retry_after() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
            .mount(&mock_server)
            .await;

        let error = mock_translator(&mock_server)
            .translate("Fresh Tomatoes", LanguageCode::HINDI)
            .await
            .expect_err("Should fail");

        assert_eq!(
            error,
            TranslationError::RateLimited {
                retry_after: Some(Duration::from_secs(7))
            }
        );
    }

    #[tokio::test]
    async fn test_translate_bad_request_is_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(400).set_body_string("context_length_exceeded"))
            .mount(&mock_server)
            .await;

        let error = mock_translator(&mock_server)
            .translate("Fresh Tomatoes", LanguageCode::MALAYALAM)
            .await
            .expect_err("Should fail");

        assert!(matches!(error, TranslationError::Rejected(ref m) if m.contains("400")));
        assert!(!error.is_retryable());
    }

    #[tokio::test]
    async fn test_translate_empty_choices() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&mock_server)
            .await;

        let error = mock_translator(&mock_server)
            .translate("Fresh Tomatoes", LanguageCode::HINDI)
            .await
            .expect_err("Should fail");

        assert!(matches!(error, TranslationError::ProviderUnavailable(ref m) if m.contains("no choices")));
    }

    #[tokio::test]
    async fn test_translate_blank_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(create_openai_response("  ")))
            .mount(&mock_server)
            .await;

        let error = mock_translator(&mock_server)
            .translate("Fresh Tomatoes", LanguageCode::HINDI)
            .await
            .expect_err("Should fail");

        assert!(matches!(error, TranslationError::ProviderUnavailable(_)));
    }

    #[tokio::test]
    async fn test_translate_outside_allow_list_skips_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(create_openai_response("x")))
            .expect(0)
            .mount(&mock_server)
            .await;

        let translator = mock_translator(&mock_server)
            .with_supported_languages([LanguageCode::HINDI, LanguageCode::TAMIL]);
        let error = translator
            .translate("Fresh Tomatoes", LanguageCode::PUNJABI)
            .await
            .expect_err("Should fail");

        assert_eq!(error, TranslationError::UnsupportedLanguage(LanguageCode::PUNJABI));
    }

    #[tokio::test]
    async fn test_translate_empty_text_skips_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let error = mock_translator(&mock_server)
            .translate("  ", LanguageCode::HINDI)
            .await
            .expect_err("Should fail");

        assert_eq!(error, TranslationError::EmptySourceText);
    }

    #[tokio::test]
    async fn test_translate_unreachable_endpoint() {
        // Nothing listens on port 9 (discard) in the test environment
        let error = translator("http://127.0.0.1:9/v1/chat/completions", "gpt-4o-mini")
            .translate("Fresh Tomatoes", LanguageCode::HINDI)
            .await
            .expect_err("Should fail");

        assert!(matches!(error, TranslationError::ProviderUnavailable(_)));
    }
}
