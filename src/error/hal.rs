// HAL error types and constants

use crate::error::ErrorCode;
use log::error;
use std::fmt;

/// HAL status code constants returned across the FFI boundary
///
/// Codes are negated POSIX errno values, matching what a native HAL
/// module hands back to its caller.
pub struct HalErrorCodes {}

impl HalErrorCodes {
    /// Operation completed successfully
    pub const OK: i32 = 0;

    /// Requested interface name is not supported by the module
    pub const INVALID_ARGUMENT: i32 = -libc::EINVAL;

    /// Device record could not be allocated
    pub const OUT_OF_MEMORY: i32 = -libc::ENOMEM;

    /// Device was written to before a successful open
    pub const DEVICE_NOT_READY: i32 = -libc::ENODEV;
}

/// Log a HAL error with structured context
///
/// This function logs HAL errors with structured fields including:
/// - error_code: Numeric status code handed back to the caller
/// - component: The component where the error occurred
/// - message: Human-readable error message
/// - context: The operation that failed
pub fn log_hal_error(err: &HalError, context: &str) {
    error!(
        "HAL error in {}: code={}, component=AudioHAL, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// HAL-related errors
///
/// These errors cover the module open and device write operations.
/// None of them are retried; each is surfaced directly as its status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HalError {
    /// Interface name does not match the single supported interface
    UnsupportedInterface { name: String },

    /// Allocation of the device record failed
    OutOfMemory,

    /// Device is not initialized
    DeviceNotReady,
}

impl ErrorCode for HalError {
    fn code(&self) -> i32 {
        match self {
            HalError::UnsupportedInterface { .. } => HalErrorCodes::INVALID_ARGUMENT,
            HalError::OutOfMemory => HalErrorCodes::OUT_OF_MEMORY,
            HalError::DeviceNotReady => HalErrorCodes::DEVICE_NOT_READY,
        }
    }

    fn message(&self) -> String {
        match self {
            HalError::UnsupportedInterface { name } => {
                format!("Interface {} not supported", name)
            }
            HalError::OutOfMemory => "Failed to allocate audio device".to_string(),
            HalError::DeviceNotReady => "HAL not initialized".to_string(),
        }
    }
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HalError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for HalError {}

impl From<std::collections::TryReserveError> for HalError {
    fn from(_: std::collections::TryReserveError) -> Self {
        HalError::OutOfMemory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hal_error_codes() {
        assert_eq!(
            HalError::UnsupportedInterface {
                name: "secondary".to_string()
            }
            .code(),
            HalErrorCodes::INVALID_ARGUMENT
        );
        assert_eq!(HalError::OutOfMemory.code(), HalErrorCodes::OUT_OF_MEMORY);
        assert_eq!(
            HalError::DeviceNotReady.code(),
            HalErrorCodes::DEVICE_NOT_READY
        );
    }

    #[test]
    fn test_codes_are_negated_errno() {
        assert_eq!(HalErrorCodes::INVALID_ARGUMENT, -22);
        assert_eq!(HalErrorCodes::OUT_OF_MEMORY, -12);
        assert_eq!(HalErrorCodes::DEVICE_NOT_READY, -19);
        assert_eq!(HalErrorCodes::OK, 0);
    }

    #[test]
    fn test_hal_error_messages() {
        let err = HalError::UnsupportedInterface {
            name: "secondary".to_string(),
        };
        assert_eq!(err.message(), "Interface secondary not supported");

        assert!(HalError::DeviceNotReady.message().contains("not initialized"));
        assert!(HalError::OutOfMemory.message().contains("allocate"));
    }

    #[test]
    fn test_hal_error_display() {
        let err = HalError::DeviceNotReady;
        let display = format!("{}", err);
        assert!(display.contains("HalError"));
        assert!(display.contains(&err.code().to_string()));
    }

    #[test]
    fn test_from_try_reserve_error() {
        let mut buf: Vec<u8> = Vec::new();
        let reserve_err = buf.try_reserve(usize::MAX).unwrap_err();
        let hal_err: HalError = reserve_err.into();
        assert_eq!(hal_err, HalError::OutOfMemory);
    }
}
