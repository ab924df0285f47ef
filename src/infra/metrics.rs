// ============================================================
// Layer 6 — Query Metrics
// ============================================================
// Counts what the bot replied, for operators.
//
// Three counters, one per Reply kind:
//   answered — a You/Bot exchange was returned
//   invalid  — the question normalized to nothing
//   failed   — answering raised a QueryFailure
//
// Counters are relaxed atomics: they are independent tallies,
// read only for reporting, and never influence retrieval.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide reply counters.
#[derive(Debug, Default)]
pub struct QueryMetrics {
    answered: AtomicU64,
    invalid:  AtomicU64,
    failed:   AtomicU64,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub answered: u64,
    pub invalid:  u64,
    pub failed:   u64,
    pub total:    u64,
}

impl QueryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_answered(&self) {
        self.answered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_invalid(&self) {
        self.invalid.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let answered = self.answered.load(Ordering::Relaxed);
        let invalid  = self.invalid.load(Ordering::Relaxed);
        let failed   = self.failed.load(Ordering::Relaxed);
        MetricsSnapshot {
            answered,
            invalid,
            failed,
            total: answered + invalid + failed,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_snapshot_totals() {
        let m = QueryMetrics::new();
        m.record_answered();
        m.record_answered();
        m.record_invalid();
        m.record_failed();
        assert_eq!(
            m.snapshot(),
            MetricsSnapshot { answered: 2, invalid: 1, failed: 1, total: 4 }
        );
    }

    #[test]
    fn test_concurrent_updates_are_counted() {
        let m = Arc::new(QueryMetrics::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let m = Arc::clone(&m);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        m.record_answered();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(m.snapshot().answered, 400);
    }
}
