//! Lifecycle telemetry for the HAL bridge.
//!
//! The collector keeps a bounded history of [`HalEvent`]s plus running
//! totals, so CLI and diagnostics callers can see what the bridge did.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

pub mod events;

pub use events::{HalEvent, LifecyclePhase};

/// Snapshot of collector state for CLI reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub recent: Vec<HalEvent>,
    pub total_events: u64,
    pub dropped_events: u64,
    pub bytes_written: u64,
    pub errors: u64,
}

/// Collector retaining a bounded history of HAL events.
#[derive(Debug)]
pub struct TelemetryCollector {
    history: VecDeque<HalEvent>,
    history_capacity: usize,
    total_events: u64,
    dropped_history: u64,
    bytes_written: u64,
    errors: u64,
}

impl TelemetryCollector {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(history_capacity),
            history_capacity,
            total_events: 0,
            dropped_history: 0,
            bytes_written: 0,
            errors: 0,
        }
    }

    pub fn publish(&mut self, event: HalEvent) {
        self.total_events += 1;
        match &event {
            HalEvent::WriteCompleted { bytes } => self.bytes_written += *bytes as u64,
            HalEvent::Error { .. } => self.errors += 1,
            _ => {}
        }

        if self.history_capacity == 0 {
            self.dropped_history += 1;
            return;
        }
        if self.history.len() == self.history_capacity {
            self.history.pop_front();
            self.dropped_history += 1;
        }
        self.history.push_back(event);
    }

    /// Record a JNI lifecycle transition stamped with wall-clock time.
    pub fn record_jni_phase(&mut self, phase: LifecyclePhase) {
        self.publish(HalEvent::JniLifecycle {
            phase,
            timestamp_ms: now_ms(),
        });
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            recent: self.history.iter().cloned().collect(),
            total_events: self.total_events,
            dropped_events: self.dropped_history,
            bytes_written: self.bytes_written,
            errors: self.errors,
        }
    }
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new(64)
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
