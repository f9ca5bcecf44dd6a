//! Process-local counters, reported through tracing

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics handle for recording webhook outcomes
#[derive(Debug, Default)]
pub struct Metrics {
    cards_created: AtomicU64,
    remote_failures: AtomicU64,
    submissions_rejected: AtomicU64,
    handshakes: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn card_created(&self) {
        self.cards_created.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "cards_created", "Metric incremented");
    }

    pub fn remote_failed(&self) {
        self.remote_failures.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "remote_failures", "Metric incremented");
    }

    pub fn submission_rejected(&self) {
        self.submissions_rejected.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "submissions_rejected", "Metric incremented");
    }

    pub fn handshake_acknowledged(&self) {
        self.handshakes.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "handshakes", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            cards_created: self.cards_created.load(Ordering::Relaxed),
            remote_failures: self.remote_failures.load(Ordering::Relaxed),
            submissions_rejected: self.submissions_rejected.load(Ordering::Relaxed),
            handshakes: self.handshakes.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub cards_created: u64,
    pub remote_failures: u64,
    pub submissions_rejected: u64,
    pub handshakes: u64,
}
