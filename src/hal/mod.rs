//! Simulated audio HAL: module descriptor, device descriptor and the
//! open/write/close operations.
//!
//! The platform's fixed-layout dispatch tables are expressed as traits:
//! a [`HwModule`] opens devices, every device exposes the generic
//! [`HwDevice`] header, and audio devices add [`AudioHwDevice::write`].

pub mod device;
pub mod module;

pub use device::{live_device_count, CustomAudioDevice};
pub use module::{AudioModule, ModuleInfo, HAL_MODULE_INFO_SYM};

use crate::error::HalError;

/// Tag stamped on every module record ("MODU").
pub const HARDWARE_MODULE_TAG: u32 = 0x4D4F_4455;

/// Tag stamped on every device header ("DEVI").
pub const HARDWARE_DEVICE_TAG: u32 = 0x4445_5649;

pub const AUDIO_DEVICE_API_VERSION_2_0: u32 = 0x0200_0000;

pub const AUDIO_HARDWARE_MODULE_ID: &str = "audio";

/// The only interface name accepted by [`HwModule::open`].
pub const AUDIO_HARDWARE_INTERFACE: &str = "primary";

/// Method table shared by all hardware modules.
pub trait HwModule: Sync {
    /// Identification metadata of this module.
    fn info(&self) -> &ModuleInfo;

    /// Open the device exposing interface `name`.
    ///
    /// The returned device keeps a back-reference to this module, hence the
    /// `'static` receiver.
    fn open(&'static self, name: &str) -> Result<Box<dyn AudioHwDevice>, HalError>;
}

/// Generic device header shared by all hardware devices.
pub trait HwDevice {
    fn tag(&self) -> u32;

    fn version(&self) -> u32;

    /// Module that opened this device.
    fn module(&self) -> &'static dyn HwModule;

    /// Release the device. Always succeeds.
    fn close(self: Box<Self>) -> Result<(), HalError>;
}

/// Audio output operations layered on the generic device header.
pub trait AudioHwDevice: HwDevice + Send {
    /// Hand `buffer` to the audio sink, returning the number of bytes accepted.
    fn write(&mut self, buffer: &[u8]) -> Result<usize, HalError>;
}

/// Close an optional device handle.
///
/// An absent handle is a no-op. Returns the status code handed to callers
/// (always `0`).
pub fn close_device(device: Option<Box<dyn AudioHwDevice>>) -> i32 {
    match device {
        Some(device) => match device.close() {
            Ok(()) => crate::error::HalErrorCodes::OK,
            Err(err) => {
                crate::error::log_hal_error(&err, "close_device");
                crate::error::ErrorCode::code(&err)
            }
        },
        None => crate::error::HalErrorCodes::OK,
    }
}
