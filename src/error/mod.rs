// Error types for the audio HAL simulator
//
// This module defines the HAL error taxonomy, providing structured error
// handling with POSIX-style status codes suitable for FFI communication.

mod hal;

pub use hal::{log_hal_error, HalError, HalErrorCodes};

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, enabling consistent error handling across
/// the FFI boundary.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}
