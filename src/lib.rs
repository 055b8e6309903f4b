// Vehicle Audio HAL - Rust simulation of an Android audio HAL module
// Module/device lifecycle plus the bridge a managed caller drives over JNI

// Module declarations
pub mod api;
pub mod bridge;
pub mod config;
pub mod error;
pub mod hal;
pub mod logging;
pub mod telemetry;

#[cfg(target_os = "android")]
mod jni_bridge;

// Re-exports for convenience
pub use api::*;
pub use bridge::AudioHalBridge;
pub use error::{ErrorCode, HalError, HalErrorCodes};
