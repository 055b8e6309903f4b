//! The audio device record and its write/close operations.

use std::collections::TryReserveError;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;

use super::{AudioHwDevice, HwDevice, HwModule, AUDIO_DEVICE_API_VERSION_2_0, HARDWARE_DEVICE_TAG};
use crate::error::{log_hal_error, HalError};

/// Device records constructed and not yet dropped.
static LIVE_DEVICES: AtomicUsize = AtomicUsize::new(0);

/// Number of device records constructed and not yet dropped.
///
/// Every record counts, whether heap-allocated by open or built in place
/// with [`CustomAudioDevice::zeroed`].
pub fn live_device_count() -> usize {
    LIVE_DEVICES.load(Ordering::SeqCst)
}

/// Generic header embedded in every device record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DeviceHeader {
    tag: u32,
    version: u32,
}

/// Simulated primary audio output device.
///
/// A freshly allocated record is all zeroes: no header tag, no version and
/// `is_initialized == false`. [`HwModule::open`] wires the header and marks
/// the record initialized before handing it out.
pub struct CustomAudioDevice {
    header: DeviceHeader,
    module: &'static dyn HwModule,
    is_initialized: bool,
    error_count: u32,
}

impl CustomAudioDevice {
    /// Construct a zero-initialized record owned by `module`.
    ///
    /// Writes to such a record fail with [`HalError::DeviceNotReady`] until
    /// it is initialized by the module's open operation.
    pub fn zeroed(module: &'static dyn HwModule) -> Self {
        LIVE_DEVICES.fetch_add(1, Ordering::SeqCst);
        Self {
            header: DeviceHeader { tag: 0, version: 0 },
            module,
            is_initialized: false,
            error_count: 0,
        }
    }

    /// Fallibly allocate a zero-initialized record on the heap.
    pub(crate) fn allocate(module: &'static dyn HwModule) -> Result<Box<Self>, HalError> {
        try_box(Self::zeroed(module)).map_err(HalError::from)
    }

    pub(crate) fn initialize(&mut self) {
        self.header = DeviceHeader {
            tag: HARDWARE_DEVICE_TAG,
            version: AUDIO_DEVICE_API_VERSION_2_0,
        };
        self.is_initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    /// Writes rejected because the device was not initialized.
    pub fn error_count(&self) -> u32 {
        self.error_count
    }
}

impl Drop for CustomAudioDevice {
    fn drop(&mut self) {
        LIVE_DEVICES.fetch_sub(1, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for CustomAudioDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomAudioDevice")
            .field("tag", &format_args!("{:#010x}", self.header.tag))
            .field("version", &format_args!("{:#010x}", self.header.version))
            .field("module", &self.module.info().id)
            .field("is_initialized", &self.is_initialized)
            .field("error_count", &self.error_count)
            .finish()
    }
}

impl HwDevice for CustomAudioDevice {
    fn tag(&self) -> u32 {
        self.header.tag
    }

    fn version(&self) -> u32 {
        self.header.version
    }

    fn module(&self) -> &'static dyn HwModule {
        self.module
    }

    fn close(self: Box<Self>) -> Result<(), HalError> {
        drop(self);
        debug!("Audio HAL released successfully");
        Ok(())
    }
}

impl AudioHwDevice for CustomAudioDevice {
    fn write(&mut self, buffer: &[u8]) -> Result<usize, HalError> {
        if !self.is_initialized {
            self.error_count = self.error_count.saturating_add(1);
            let err = HalError::DeviceNotReady;
            log_hal_error(&err, "audio_write");
            return Err(err);
        }

        debug!("Processing {} bytes of audio", buffer.len());
        Ok(buffer.len())
    }
}

/// Move `value` into a heap allocation, reporting allocator failure instead
/// of aborting.
fn try_box<T>(value: T) -> Result<Box<T>, TryReserveError> {
    let mut slot = Vec::new();
    slot.try_reserve_exact(1)?;
    slot.push(value);
    let raw = Box::into_raw(slot.into_boxed_slice());
    // SAFETY: the slice holds exactly one element, so its allocation has the
    // layout of a single `T` and ownership transfers to the new box.
    Ok(unsafe { Box::from_raw(raw.cast::<T>()) })
}
