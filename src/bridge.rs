// AudioHalBridge: caller-held handle driving the HAL
//
// Holds the module reference and the single open device that a managed
// caller would otherwise keep in process-wide pointers.

use crate::config::BridgeConfig;
use crate::error::{ErrorCode, HalError};
use crate::hal::{close_device, AudioHwDevice, HwModule, HAL_MODULE_INFO_SYM};
use crate::telemetry::{HalEvent, TelemetryCollector, TelemetrySnapshot};

/// Lazily opens the audio device and writes one buffer per trigger.
///
/// # Example
/// ```
/// use vehicle_audio_hal::bridge::AudioHalBridge;
/// use vehicle_audio_hal::config::BridgeConfig;
///
/// let mut bridge = AudioHalBridge::new(BridgeConfig::default());
/// assert_eq!(bridge.trigger_write(), Ok(1024));
/// assert_eq!(bridge.release(), 0);
/// ```
pub struct AudioHalBridge {
    source: &'static dyn HwModule,
    module: Option<&'static dyn HwModule>,
    device: Option<Box<dyn AudioHwDevice>>,
    config: BridgeConfig,
    telemetry: TelemetryCollector,
}

impl AudioHalBridge {
    /// Bridge over the built-in audio module.
    pub fn new(config: BridgeConfig) -> Self {
        Self::with_module(&HAL_MODULE_INFO_SYM, config)
    }

    /// Bridge over an arbitrary module implementation.
    pub fn with_module(source: &'static dyn HwModule, config: BridgeConfig) -> Self {
        Self {
            source,
            module: None,
            device: None,
            config,
            telemetry: TelemetryCollector::default(),
        }
    }

    /// Acquire the module, open the device if needed and write one
    /// zero-filled buffer.
    ///
    /// # Returns
    /// * `Ok(bytes)` - Number of bytes the device accepted
    /// * `Err(HalError)` - Open or write failure
    ///
    /// # Errors
    /// - Configured interface is not supported (module reference is reset)
    /// - Device record allocation failed (module reference is reset)
    /// - Device rejected the write
    pub fn trigger_write(&mut self) -> Result<usize, HalError> {
        tracing::debug!("Trying to trigger HAL audio write");

        let module = self.acquire_module();
        self.ensure_device(module)?;

        let buffer = vec![0u8; self.config.buffer_size];
        let result = match self.device.as_mut() {
            Some(device) => device.write(&buffer),
            None => Err(HalError::DeviceNotReady),
        };

        match result {
            Ok(bytes) => {
                tracing::debug!(bytes, "HAL audio_write called");
                self.telemetry.publish(HalEvent::WriteCompleted { bytes });
                Ok(bytes)
            }
            Err(err) => {
                tracing::warn!(code = err.code(), "HAL audio_write rejected");
                self.record_error("write", &err);
                Err(err)
            }
        }
    }

    /// Close the open device (if any) and forget the module reference.
    ///
    /// Returns the close status, `0` when nothing was open.
    pub fn release(&mut self) -> i32 {
        let had_device = self.device.is_some();
        let status = close_device(self.device.take());
        self.module = None;
        if had_device {
            tracing::info!("HAL audio device released");
            self.telemetry.publish(HalEvent::DeviceClosed);
        }
        status
    }

    pub fn is_device_open(&self) -> bool {
        self.device.is_some()
    }

    pub fn module(&self) -> Option<&'static dyn HwModule> {
        self.module
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn telemetry(&self) -> TelemetrySnapshot {
        self.telemetry.snapshot()
    }

    pub(crate) fn telemetry_mut(&mut self) -> &mut TelemetryCollector {
        &mut self.telemetry
    }

    fn acquire_module(&mut self) -> &'static dyn HwModule {
        if let Some(module) = self.module {
            return module;
        }

        let module = self.source;
        self.module = Some(module);
        tracing::debug!(id = module.info().id, "Audio HAL module obtained by direct reference");
        self.telemetry.publish(HalEvent::ModuleAcquired {
            id: module.info().id.to_string(),
        });
        module
    }

    fn ensure_device(&mut self, module: &'static dyn HwModule) -> Result<(), HalError> {
        if self.device.is_some() {
            return Ok(());
        }

        match module.open(&self.config.interface) {
            Ok(device) => {
                self.device = Some(device);
                tracing::debug!(interface = %self.config.interface, "Audio HAL device opened");
                self.telemetry.publish(HalEvent::DeviceOpened {
                    interface: self.config.interface.clone(),
                });
                Ok(())
            }
            Err(err) => {
                tracing::error!(code = err.code(), "Failed to open audio HAL device");
                self.module = None;
                self.record_error("open", &err);
                Err(err)
            }
        }
    }

    fn record_error(&mut self, operation: &str, err: &HalError) {
        self.telemetry.publish(HalEvent::Error {
            operation: operation.to_string(),
            code: err.code(),
        });
    }
}

impl Drop for AudioHalBridge {
    fn drop(&mut self) {
        self.release();
    }
}
