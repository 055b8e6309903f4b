// Exported API surface
//
// The platform calls into the library without passing any state, so one
// bridge instance lives behind a process-wide lock. Every entry point here
// returns a plain status code.

use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use crate::bridge::AudioHalBridge;
use crate::config::HalConfig;
use crate::error::{ErrorCode, HalErrorCodes};
use crate::telemetry::{LifecyclePhase, TelemetrySnapshot};

static BRIDGE: Lazy<Mutex<AudioHalBridge>> =
    Lazy::new(|| Mutex::new(AudioHalBridge::new(HalConfig::load().bridge)));

fn lock_bridge() -> MutexGuard<'static, AudioHalBridge> {
    BRIDGE.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
        tracing::warn!("Bridge lock poisoned, recovering");
        poisoned.into_inner()
    })
}

/// Open the audio device on first use and write one zero-filled buffer.
///
/// # Returns
/// * `0` - The device accepted the buffer
/// * `-EINVAL` / `-ENOMEM` - Opening the device failed
/// * `-ENODEV` - The device rejected the write
pub fn trigger_hal_audio_write() -> i32 {
    match lock_bridge().trigger_write() {
        Ok(_) => HalErrorCodes::OK,
        Err(err) => err.code(),
    }
}

/// Close the open device, if any.
pub fn release_hal_device() -> i32 {
    lock_bridge().release()
}

/// Whether the process-wide bridge currently holds an open device.
pub fn is_hal_device_open() -> bool {
    lock_bridge().is_device_open()
}

pub fn hal_telemetry_snapshot() -> TelemetrySnapshot {
    lock_bridge().telemetry()
}

/// Record a library lifecycle transition in the bridge telemetry.
pub fn record_jni_phase(phase: LifecyclePhase) {
    lock_bridge().telemetry_mut().record_jni_phase(phase);
}

/// C ABI twin of the JNI entry point for hosts without a JVM.
#[no_mangle]
pub extern "C" fn audio_hal_trigger_write() -> i32 {
    trigger_hal_audio_write()
}

#[no_mangle]
pub extern "C" fn audio_hal_release() -> i32 {
    release_hal_device()
}
