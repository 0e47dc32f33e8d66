//! Metrics seam
//!
//! Counters for what the simulation did, kept behind a trait so zones and
//! signals stay agnostic of where the numbers go.

use std::sync::atomic::{AtomicU64, Ordering};

use log::info;

use super::types::SignalPhase;

/// An opaque metrics collaborator, shared across every signal in a zone.
pub trait MetricsSink {
    /// A signal transitioned to a new phase.
    fn signal_changed(&self, signal_id: &str, phase: SignalPhase);

    /// One full city tick completed.
    fn tick_completed(&self);
}

/// In-process metrics aggregator
#[derive(Debug, Default)]
pub struct TrafficMetrics {
    signal_changes: AtomicU64,
    ticks: AtomicU64,
}

impl TrafficMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal_changes(&self) -> u64 {
        self.signal_changes.load(Ordering::Relaxed)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    pub fn log_summary(&self) {
        info!(
            "Ticks: {} | Signal changes: {}",
            self.ticks(),
            self.signal_changes()
        );
    }
}

impl MetricsSink for TrafficMetrics {
    fn signal_changed(&self, _signal_id: &str, _phase: SignalPhase) {
        self.signal_changes.fetch_add(1, Ordering::Relaxed);
    }

    fn tick_completed(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }
}
