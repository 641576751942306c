//! Per-outcome query counters.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;

use crate::service::response::QueryResponse;

/// Lock-free counters updated by every handled query.
#[derive(Debug, Default)]
pub struct QueryMetrics {
    total: AtomicU64,
    found: AtomicU64,
    not_found: AtomicU64,
    invalid_input: AtomicU64,
    unavailable: AtomicU64,
    internal: AtomicU64,
    total_time_us: AtomicU64,
    max_time_us: AtomicU64,
}

/// Point-in-time copy of [`QueryMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueryMetricsSnapshot {
    pub total: u64,
    pub found: u64,
    pub not_found: u64,
    pub invalid_input: u64,
    pub unavailable: u64,
    pub internal: u64,
    pub total_time_us: u64,
    pub max_time_us: u64,
}

impl QueryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one handled query.
    pub fn record(&self, response: &QueryResponse, elapsed: Duration) {
        self.total.fetch_add(1, Ordering::Relaxed);

        let counter = match response {
            QueryResponse::Words(_) | QueryResponse::Entries(_) => &self.found,
            QueryResponse::NotFound => &self.not_found,
            QueryResponse::InvalidInput { .. } => &self.invalid_input,
            QueryResponse::Unavailable { .. } => &self.unavailable,
            QueryResponse::Internal { .. } => &self.internal,
        };
        counter.fetch_add(1, Ordering::Relaxed);

        let micros = elapsed.as_micros().min(u64::MAX as u128) as u64;
        self.total_time_us.fetch_add(micros, Ordering::Relaxed);
        self.max_time_us.fetch_max(micros, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> QueryMetricsSnapshot {
        QueryMetricsSnapshot {
            total: self.total.load(Ordering::Relaxed),
            found: self.found.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            invalid_input: self.invalid_input.load(Ordering::Relaxed),
            unavailable: self.unavailable.load(Ordering::Relaxed),
            internal: self.internal.load(Ordering::Relaxed),
            total_time_us: self.total_time_us.load(Ordering::Relaxed),
            max_time_us: self.max_time_us.load(Ordering::Relaxed),
        }
    }

    /// Average handling time per query.
    pub fn average_time(&self) -> Duration {
        let total = self.total.load(Ordering::Relaxed);
        if total == 0 {
            return Duration::ZERO;
        }
        Duration::from_micros(self.total_time_us.load(Ordering::Relaxed) / total)
    }
}
