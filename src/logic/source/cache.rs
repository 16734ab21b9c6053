//! Per-date log cache
//!
//! One entry per calendar day. Concurrent callers for the same day share a
//! single in-flight fetch; different days fetch independently. A failed fetch
//! is not cached: the failing caller sees an empty batch ("no data yet" and
//! "fetch failed" look the same) and the entry is dropped once nobody waits on it.
//!
//! No retry or backoff: when an in-flight fetch fails, each caller already
//! waiting on that day starts its own fetch, one after another.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;
use tokio::sync::OnceCell;

use super::{format_date, parse_date, LogSource};
use crate::error::TrafficResult;
use crate::logic::traffic::{Normalizer, RawLogRecord, TrafficEvent};

type Batch = Arc<Vec<RawLogRecord>>;

pub struct TrafficLogCache<S> {
    source: S,
    entries: Mutex<HashMap<NaiveDate, Arc<OnceCell<Batch>>>>,
}

impl<S: LogSource> TrafficLogCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Raw logs of one day; empty when the fetch failed
    pub async fn logs(&self, date: NaiveDate) -> Batch {
        let cell = {
            let mut entries = self.entries.lock();
            entries.entry(date).or_default().clone()
        };

        let result = cell
            .get_or_try_init(|| async {
                self.source.fetch_logs(date).await.map(Arc::new)
            })
            .await;

        match result {
            Ok(batch) => batch.clone(),
            Err(e) => {
                log::warn!("Traffic logs for {} unavailable: {}", format_date(date), e);
                self.release_failed(date, &cell);
                Arc::new(Vec::new())
            }
        }
    }

    /// Drop a failed day's entry unless another caller still waits on it
    fn release_failed(&self, date: NaiveDate, cell: &Arc<OnceCell<Batch>>) {
        let mut entries = self.entries.lock();
        let idle = entries.get(&date).map_or(false, |current| {
            // map + this caller hold the only references
            Arc::ptr_eq(current, cell) && !current.initialized() && Arc::strong_count(current) == 2
        });
        if idle {
            entries.remove(&date);
        }
    }

    /// Normalized, classified events of one day
    pub async fn events(&self, date: NaiveDate, normalizer: &Normalizer) -> Vec<TrafficEvent> {
        let batch = self.logs(date).await;
        normalizer.normalize_batch(&batch)
    }

    /// Same as `events`, keyed by a `YYYY-MM-DD` string
    pub async fn events_for(&self, date: &str, normalizer: &Normalizer) -> TrafficResult<Vec<TrafficEvent>> {
        let date = parse_date(date)?;
        Ok(self.events(date, normalizer).await)
    }

    /// Days with a completed, successful fetch
    pub fn cached_dates(&self) -> Vec<NaiveDate> {
        let entries = self.entries.lock();
        let mut dates: Vec<NaiveDate> = entries
            .iter()
            .filter(|(_, cell)| cell.initialized())
            .map(|(date, _)| *date)
            .collect();
        dates.sort();
        dates
    }

    /// Drop one day so the next call refetches it
    pub fn invalidate(&self, date: NaiveDate) -> bool {
        self.entries.lock().remove(&date).is_some()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::error::TrafficError;
    use crate::logic::threat::ThreatLevel;

    /// Fails the first `failures` calls, then returns one record per call
    struct FakeSource {
        calls: AtomicUsize,
        failures: usize,
    }

    impl FakeSource {
        fn new(failures: usize) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                failures,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl LogSource for FakeSource {
        fn fetch_logs(&self, date: NaiveDate) -> impl Future<Output = TrafficResult<Vec<RawLogRecord>>> + Send {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            let fail = n < self.failures;
            async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                if fail {
                    return Err(TrafficError::Server(502));
                }
                Ok(vec![RawLogRecord {
                    client_ip: "10.0.0.1".to_string(),
                    status_code: 403,
                    received_at: format!("{}T00:00:00Z", format_date(date)),
                    ..Default::default()
                }])
            }
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[tokio::test]
    async fn test_same_date_fetched_once() {
        let cache = TrafficLogCache::new(FakeSource::new(0));

        let (a, b) = tokio::join!(cache.logs(day(15)), cache.logs(day(15)));
        let c = cache.logs(day(15)).await;

        assert_eq!(cache.source().calls(), 1);
        assert_eq!(a.len(), 1);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&a, &c));
    }

    #[tokio::test]
    async fn test_different_dates_independent() {
        let cache = TrafficLogCache::new(FakeSource::new(0));

        let (a, b) = tokio::join!(cache.logs(day(14)), cache.logs(day(15)));

        assert_eq!(cache.source().calls(), 2);
        assert_eq!(a[0].received_at, "2024-01-14T00:00:00Z");
        assert_eq!(b[0].received_at, "2024-01-15T00:00:00Z");
        assert_eq!(cache.cached_dates(), vec![day(14), day(15)]);
    }

    #[tokio::test]
    async fn test_failure_is_empty_and_not_cached() {
        let cache = TrafficLogCache::new(FakeSource::new(1));

        let first = cache.logs(day(15)).await;
        assert!(first.is_empty());
        assert!(cache.cached_dates().is_empty());

        let second = cache.logs(day(15)).await;
        assert_eq!(second.len(), 1);
        assert_eq!(cache.source().calls(), 2);
    }

    #[tokio::test]
    async fn test_failed_date_leaves_no_entry() {
        let cache = TrafficLogCache::new(FakeSource::new(2));

        assert!(cache.logs(day(15)).await.is_empty());
        assert!(cache.events_for("2024-01-16", &Normalizer::default()).await.unwrap().is_empty());

        assert!(cache.entries.lock().is_empty());
        assert!(cache.cached_dates().is_empty());
    }

    #[tokio::test]
    async fn test_waiter_refetches_after_shared_failure() {
        let cache = TrafficLogCache::new(FakeSource::new(1));

        let (a, b) = tokio::join!(cache.logs(day(15)), cache.logs(day(15)));

        // The waiting caller runs its own fetch once the first one fails
        assert_eq!(cache.source().calls(), 2);
        let mut sizes = vec![a.len(), b.len()];
        sizes.sort();
        assert_eq!(sizes, vec![0, 1]);
        assert_eq!(cache.cached_dates(), vec![day(15)]);

        cache.logs(day(15)).await;
        assert_eq!(cache.source().calls(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_refetches() {
        let cache = TrafficLogCache::new(FakeSource::new(0));

        cache.logs(day(15)).await;
        assert!(cache.invalidate(day(15)));
        assert!(!cache.invalidate(day(15)));
        cache.logs(day(15)).await;

        assert_eq!(cache.source().calls(), 2);
    }

    #[tokio::test]
    async fn test_events_are_normalized() {
        let cache = TrafficLogCache::new(FakeSource::new(0));
        let normalizer = Normalizer::default();

        let events = cache.events_for("2024-01-15", &normalizer).await.unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0].is_blocked);
        assert_eq!(events[0].threat_level, ThreatLevel::Low);
        assert_eq!(events[0].timestamp, "2024-01-15T00:00:00.000Z");

        assert!(cache.events_for("yesterday", &normalizer).await.is_err());
    }
}
