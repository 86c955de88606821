//! On-demand and bulk translation of multilingual content.
//!
//! The coordinator guarantees at most one outstanding provider call per
//! (content identity, language) pair. Callers that ask for a pair already in
//! flight await the same shared outcome. Results are merged as immutable
//! updates: the caller's content value is never mutated, and a failure for
//! one language never touches the original text or other translations.

use crate::content::{ContentId, MultilingualContent, Provenance};
use crate::error::TranslationError;
use crate::i18n::{
    LanguageCatalog, LanguageCode, MetricsReport, TranslationMetrics, TranslationValidator,
};
use crate::provider::TranslationProvider;
use crate::resolver::resolve_detailed;
use crate::retry::{with_retry_if, RetryConfig, RetryDecision};
use futures::future::{join_all, BoxFuture, Shared};
use futures::FutureExt;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Caller-side policy around provider calls.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinatorConfig {
    /// Upper bound for a single provider call; `None` waits indefinitely
    pub provider_timeout: Option<Duration>,

    /// Retry policy for retryable provider failures
    pub retry: RetryConfig,

    /// Most memoized translations kept; the oldest entry is evicted first
    pub memo_capacity: usize,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Some(Duration::from_secs(20)),
            retry: RetryConfig::single_attempt(),
            memo_capacity: 1024,
        }
    }
}

/// Key of the in-flight table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InFlightKey {
    pub content: ContentId,
    pub language: LanguageCode,
}

/// Result of a single-language request.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationOutcome {
    /// The content to store; equal to the input when nothing was merged
    pub content: MultilingualContent,
    pub language: LanguageCode,
    pub error: Option<TranslationError>,
}

impl TranslationOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of a bulk request.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkTranslationOutcome {
    /// The input content plus every translation that succeeded
    pub content: MultilingualContent,

    /// Per-language success or the specific failure
    pub results: BTreeMap<LanguageCode, Result<(), TranslationError>>,
}

impl BulkTranslationOutcome {
    pub fn succeeded(&self) -> impl Iterator<Item = LanguageCode> + '_ {
        self.results
            .iter()
            .filter(|(_, result)| result.is_ok())
            .map(|(language, _)| *language)
    }

    pub fn failed(&self) -> impl Iterator<Item = (LanguageCode, &TranslationError)> + '_ {
        self.results
            .iter()
            .filter_map(|(language, result)| result.as_ref().err().map(|e| (*language, e)))
    }
}

type SharedTranslation = Shared<BoxFuture<'static, Result<String, TranslationError>>>;

struct InFlight {
    source: String,
    call: SharedTranslation,
}

struct MemoEntry {
    source: String,
    translation: String,
}

#[derive(Default)]
struct CoordinatorState {
    in_flight: HashMap<InFlightKey, InFlight>,
    memo: HashMap<InFlightKey, MemoEntry>,
    /// Memo keys in insertion order
    memo_order: VecDeque<InFlightKey>,
    unsupported: HashSet<LanguageCode>,
    discarded: HashSet<ContentId>,
}

impl CoordinatorState {
    fn remember(&mut self, key: InFlightKey, entry: MemoEntry, capacity: usize) {
        if capacity == 0 {
            return;
        }
        if self.memo.insert(key, entry).is_none() {
            self.memo_order.push_back(key);
        }
        while self.memo.len() > capacity {
            match self.memo_order.pop_front() {
                Some(oldest) => {
                    self.memo.remove(&oldest);
                }
                None => break,
            }
        }
    }
}

enum Fetched {
    /// The language is already covered; nothing to merge
    Covered,
    Translated(String),
}

enum Step {
    Done(Result<Fetched, TranslationError>),
    Await(SharedTranslation),
    WaitForStale(SharedTranslation),
}

/// Coordinates translation requests against one provider.
///
/// All bookkeeping (in-flight calls, memoized results, unsupported languages,
/// discarded content) is owned by the instance.
pub struct TranslationCoordinator {
    provider: Arc<dyn TranslationProvider>,
    catalog: LanguageCatalog,
    config: CoordinatorConfig,
    state: Mutex<CoordinatorState>,
    metrics: Arc<TranslationMetrics>,
}

impl TranslationCoordinator {
    /// Create a coordinator over the built-in catalog with default policy.
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self {
            provider,
            catalog: LanguageCatalog::get().clone(),
            config: CoordinatorConfig::default(),
            state: Mutex::new(CoordinatorState::default()),
            metrics: Arc::new(TranslationMetrics::new()),
        }
    }

    pub fn with_config(mut self, config: CoordinatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Restrict the languages this coordinator will translate into.
    pub fn with_catalog(mut self, catalog: LanguageCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }

    /// Whether the UI should offer a translate action for `language`.
    pub fn is_translatable(&self, language: LanguageCode) -> bool {
        self.catalog.contains(language) && !self.lock_state().unsupported.contains(&language)
    }

    /// Number of provider calls currently outstanding.
    pub fn in_flight_count(&self) -> usize {
        self.lock_state().in_flight.len()
    }

    pub fn is_discarded(&self, id: ContentId) -> bool {
        self.lock_state().discarded.contains(&id)
    }

    /// Mark a content identity as torn down.
    ///
    /// Results still in flight for it are dropped instead of merged, and
    /// further requests for it fail with [`TranslationError::Discarded`].
    pub fn discard(&self, id: ContentId) {
        let mut state = self.lock_state();
        state.discarded.insert(id);
        state.in_flight.retain(|key, _| key.content != id);
        state.memo.retain(|key, _| key.content != id);
        state.memo_order.retain(|key| key.content != id);
        debug!("Discarded content {}", id);
    }

    /// Translate `content` into `target` if it currently falls back.
    pub async fn request_translation(
        &self,
        content: &MultilingualContent,
        target: LanguageCode,
    ) -> TranslationOutcome {
        let result = match self.fetch(content, target).await {
            Ok(Fetched::Covered) => Ok(content.clone()),
            Ok(Fetched::Translated(text)) => content
                .with_machine_translation(target, text)
                .map_err(|e| TranslationError::Rejected(e.to_string())),
            Err(error) => Err(error),
        };

        match result {
            Ok(updated) => TranslationOutcome {
                content: updated,
                language: target,
                error: None,
            },
            Err(error) => {
                info!(
                    "Translation of {} into {} failed: {}",
                    content.id(),
                    target,
                    error
                );
                TranslationOutcome {
                    content: content.clone(),
                    language: target,
                    error: Some(error),
                }
            }
        }
    }

    /// Translate `content` into every catalog language it is missing.
    ///
    /// Best-effort: each language succeeds or fails on its own.
    pub async fn translate_all(&self, content: &MultilingualContent) -> BulkTranslationOutcome {
        let targets: Vec<LanguageCode> = self
            .catalog
            .codes()
            .filter(|language| {
                *language != content.original_language() && !content.has_translation(*language)
            })
            .collect();

        debug!(
            "Bulk translation of {} into {} languages",
            content.id(),
            targets.len()
        );

        let fetches = targets
            .iter()
            .map(|&target| async move { (target, self.fetch(content, target).await) });
        let fetched = join_all(fetches).await;

        let mut merged = content.clone();
        let mut results = BTreeMap::new();
        for (language, result) in fetched {
            let result = match result {
                Ok(Fetched::Covered) => Ok(()),
                Ok(Fetched::Translated(text)) => merged
                    .set_translation(language, text, Provenance::Machine)
                    .map_err(|e| TranslationError::Rejected(e.to_string())),
                Err(error) => Err(error),
            };
            results.insert(language, result);
        }

        let outcome = BulkTranslationOutcome {
            content: merged,
            results,
        };
        let failures = outcome.failed().count();
        if failures > 0 {
            warn!(
                "Bulk translation of {}: {} succeeded, {} failed",
                content.id(),
                outcome.results.len() - failures,
                failures
            );
        } else {
            info!(
                "Bulk translation of {}: {} languages translated",
                content.id(),
                outcome.results.len()
            );
        }
        outcome
    }

    async fn fetch(
        &self,
        content: &MultilingualContent,
        target: LanguageCode,
    ) -> Result<Fetched, TranslationError> {
        if !resolve_detailed(content, target).is_fallback() {
            self.metrics.record_cache_hit();
            return Ok(Fetched::Covered);
        }

        let source = content.original_text();
        if source.trim().is_empty() {
            return Err(TranslationError::EmptySourceText);
        }

        let key = InFlightKey {
            content: content.id(),
            language: target,
        };

        let call = loop {
            match self.next_step(key, source) {
                Step::Done(result) => return result,
                Step::Await(call) => break call,
                Step::WaitForStale(stale) => {
                    // A call for an older source text is still running; let it
                    // finish before issuing ours
                    let _ = stale.clone().await;
                    self.clear_in_flight(key, &stale);
                }
            }
        };

        let result = call.clone().await;
        self.clear_in_flight(key, &call);

        let mut state = self.lock_state();

        if state.discarded.contains(&key.content) {
            self.metrics.record_discarded();
            debug!(
                "Dropping translation into {} for discarded content {}",
                target, key.content
            );
            return Err(TranslationError::Discarded);
        }

        match result {
            Ok(translation) => {
                let entry = MemoEntry {
                    source: source.to_string(),
                    translation: translation.clone(),
                };
                state.remember(key, entry, self.config.memo_capacity);
                Ok(Fetched::Translated(translation))
            }
            Err(TranslationError::UnsupportedLanguage(language)) => {
                state.unsupported.insert(language);
                Err(TranslationError::UnsupportedLanguage(language))
            }
            Err(error) => Err(error),
        }
    }

    /// Decide under the lock whether to answer, join, or start a call.
    fn next_step(&self, key: InFlightKey, source: &str) -> Step {
        let mut state = self.lock_state();

        if state.discarded.contains(&key.content) {
            return Step::Done(Err(TranslationError::Discarded));
        }
        if !self.catalog.contains(key.language) || state.unsupported.contains(&key.language) {
            return Step::Done(Err(TranslationError::UnsupportedLanguage(key.language)));
        }

        if let Some(memo) = state.memo.get(&key) {
            if memo.source == source {
                self.metrics.record_cache_hit();
                debug!("Memo hit for {} into {}", key.content, key.language);
                return Step::Done(Ok(Fetched::Translated(memo.translation.clone())));
            }
        }

        if let Some(entry) = state.in_flight.get(&key) {
            if entry.source == source {
                self.metrics.record_cache_miss();
                self.metrics.record_coalesced();
                debug!(
                    "Joining in-flight translation for {} into {}",
                    key.content, key.language
                );
                return Step::Await(entry.call.clone());
            }
            return Step::WaitForStale(entry.call.clone());
        }

        self.metrics.record_cache_miss();
        let call = self.start_call(source.to_string(), key.language);
        state.in_flight.insert(
            key,
            InFlight {
                source: source.to_string(),
                call: call.clone(),
            },
        );
        Step::Await(call)
    }

    fn start_call(&self, source: String, target: LanguageCode) -> SharedTranslation {
        let provider = Arc::clone(&self.provider);
        let metrics = Arc::clone(&self.metrics);
        let retry = self.config.retry.clone();
        let timeout = self.config.provider_timeout;

        async move {
            let operation_name = format!("Translation to {}", target.english_name());
            let translated = with_retry_if(
                &retry,
                &operation_name,
                || call_provider(provider.as_ref(), &source, target, timeout, &metrics),
                classify_error,
            )
            .await?;

            let validation = TranslationValidator::validate(&source, &translated);
            if validation.has_warnings() {
                warn!(
                    "Translation validation warnings for {} ({}): {:?}",
                    target.english_name(),
                    target.code(),
                    validation.warnings
                );
            }

            Ok::<_, TranslationError>(translated)
        }
        .boxed()
        .shared()
    }

    /// Remove `call` from the table unless a newer call replaced it.
    fn clear_in_flight(&self, key: InFlightKey, call: &SharedTranslation) {
        let mut state = self.lock_state();
        let finished = state
            .in_flight
            .get(&key)
            .is_some_and(|entry| entry.call.ptr_eq(call));
        if finished {
            state.in_flight.remove(&key);
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, CoordinatorState> {
        // The state is plain bookkeeping; a panic elsewhere leaves it usable
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

async fn call_provider(
    provider: &dyn TranslationProvider,
    text: &str,
    target: LanguageCode,
    timeout: Option<Duration>,
    metrics: &TranslationMetrics,
) -> Result<String, TranslationError> {
    metrics.record_api_call();
    debug!("Calling translation provider for {}", target);

    let call = provider.translate(text, target);
    let result = match timeout {
        Some(limit) => match tokio::time::timeout(limit, call).await {
            Ok(result) => result,
            Err(_) => Err(TranslationError::ProviderUnavailable(format!(
                "timed out after {:?}",
                limit
            ))),
        },
        None => call.await,
    };

    let result = result.and_then(|translated| {
        let translated = translated.trim();
        if translated.is_empty() {
            Err(TranslationError::ProviderUnavailable(
                "provider returned an empty translation".to_string(),
            ))
        } else {
            Ok(translated.to_string())
        }
    });

    if result.is_err() {
        metrics.record_api_failure();
    }
    result
}

fn classify_error(error: &TranslationError) -> RetryDecision {
    match error {
        TranslationError::RateLimited {
            retry_after: Some(delay),
        } => RetryDecision::RetryAfter(*delay),
        e if e.is_retryable() => RetryDecision::Retry,
        _ => RetryDecision::Stop,
    }
}
