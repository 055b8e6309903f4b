//! Telemetry event types describing the HAL lifecycle as seen by the bridge
//! and the JNI entry points.

use serde::{Deserialize, Serialize};

/// High-level lifecycle stages reported by JNI instrumentation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LifecyclePhase {
    LibraryLoaded,
    LibraryUnloaded,
}

/// Events recorded while driving the HAL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum HalEvent {
    ModuleAcquired {
        id: String,
    },
    DeviceOpened {
        interface: String,
    },
    WriteCompleted {
        bytes: usize,
    },
    DeviceClosed,
    Error {
        operation: String,
        code: i32,
    },
    JniLifecycle {
        phase: LifecyclePhase,
        timestamp_ms: u64,
    },
}
