//! Translation metrics and observability module.
//!
//! Each coordinator owns its own `TranslationMetrics`, so independent
//! coordinators (and independent tests) never share counters.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for translation requests handled by one coordinator.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Requests answered without a provider call (existing translation or memo)
    cache_hits: AtomicUsize,

    /// Requests that needed a provider result
    cache_misses: AtomicUsize,

    /// Misses that joined a call already in flight
    coalesced: AtomicUsize,

    /// Number of calls made to the translation provider
    api_calls: AtomicUsize,

    /// Number of provider calls that failed
    api_failures: AtomicUsize,

    /// Results dropped because their content was discarded
    discarded: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_coalesced(&self) {
        self.coalesced.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_api_call(&self) {
        self.api_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_api_failure(&self) {
        self.api_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_discarded(&self) {
        self.discarded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> usize {
        self.cache_misses.load(Ordering::Relaxed)
    }

    pub fn coalesced(&self) -> usize {
        self.coalesced.load(Ordering::Relaxed)
    }

    pub fn api_calls(&self) -> usize {
        self.api_calls.load(Ordering::Relaxed)
    }

    pub fn api_failures(&self) -> usize {
        self.api_failures.load(Ordering::Relaxed)
    }

    pub fn discarded(&self) -> usize {
        self.discarded.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.cache_hits();
        let misses = self.cache_misses();
        let total_cache_queries = hits + misses;
        let cache_hit_rate = if total_cache_queries > 0 {
            (hits as f64 / total_cache_queries as f64) * 100.0
        } else {
            0.0
        };

        let calls = self.api_calls();
        let failures = self.api_failures();
        let api_success_rate = if calls > 0 {
            ((calls - failures.min(calls)) as f64 / calls as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            cache_hits: hits,
            cache_misses: misses,
            cache_hit_rate,
            coalesced: self.coalesced(),
            api_calls: calls,
            api_failures: failures,
            api_success_rate,
            discarded: self.discarded(),
        }
    }
}

/// Snapshot of the translation counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub cache_hits: usize,
    pub cache_misses: usize,

    /// Cache hit rate as a percentage (0-100)
    pub cache_hit_rate: f64,

    pub coalesced: usize,
    pub api_calls: usize,
    pub api_failures: usize,

    /// API success rate as a percentage (0-100)
    pub api_success_rate: f64,

    pub discarded: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_new_metrics_start_at_zero() {
        let metrics = TranslationMetrics::new();

        assert_eq!(metrics.cache_hits(), 0);
        assert_eq!(metrics.cache_misses(), 0);
        assert_eq!(metrics.coalesced(), 0);
        assert_eq!(metrics.api_calls(), 0);
        assert_eq!(metrics.api_failures(), 0);
        assert_eq!(metrics.discarded(), 0);
    }

    #[test]
    fn test_counters_increment() {
        let metrics = TranslationMetrics::new();

        metrics.record_cache_hit();
        metrics.record_cache_hit();
        metrics.record_cache_miss();
        metrics.record_coalesced();
        metrics.record_api_call();
        metrics.record_api_failure();
        metrics.record_discarded();

        assert_eq!(metrics.cache_hits(), 2);
        assert_eq!(metrics.cache_misses(), 1);
        assert_eq!(metrics.coalesced(), 1);
        assert_eq!(metrics.api_calls(), 1);
        assert_eq!(metrics.api_failures(), 1);
        assert_eq!(metrics.discarded(), 1);
    }

    #[test]
    fn test_instances_are_independent() {
        let first = TranslationMetrics::new();
        let second = TranslationMetrics::new();

        first.record_api_call();
        assert_eq!(first.api_calls(), 1);
        assert_eq!(second.api_calls(), 0);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = TranslationMetrics::new().report();

        assert_eq!(report.cache_hit_rate, 0.0);
        assert_eq!(report.api_success_rate, 0.0);
    }

    #[test]
    fn test_report_rates() {
        let metrics = TranslationMetrics::new();

        // 3 hits, 1 miss = 75% hit rate
        metrics.record_cache_hit();
        metrics.record_cache_hit();
        metrics.record_cache_hit();
        metrics.record_cache_miss();

        // 4 calls, 1 failure = 75% success rate
        for _ in 0..4 {
            metrics.record_api_call();
        }
        metrics.record_api_failure();

        let report = metrics.report();
        assert_eq!(report.cache_hit_rate, 75.0);
        assert_eq!(report.api_success_rate, 75.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = TranslationMetrics::new();
        metrics.record_coalesced();

        let json = serde_json::to_string(&metrics.report()).expect("Should serialize");
        assert!(json.contains("\"coalesced\":1"));
        assert!(json.contains("cache_hit_rate"));
    }
}
