//! The audio module record and its open operation.

use log::debug;
use serde::Serialize;

use super::device::CustomAudioDevice;
use super::{
    AudioHwDevice, HwModule, AUDIO_HARDWARE_INTERFACE, AUDIO_HARDWARE_MODULE_ID,
    HARDWARE_MODULE_TAG,
};
use crate::error::{log_hal_error, HalError};

/// Identification metadata common to all hardware modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    pub tag: u32,
    pub version_major: u32,
    pub version_minor: u32,
    pub id: &'static str,
    pub name: &'static str,
    pub author: &'static str,
}

/// The audio HAL module.
#[derive(Debug)]
pub struct AudioModule {
    common: ModuleInfo,
}

/// Module record the platform discovers by symbol name.
pub static HAL_MODULE_INFO_SYM: AudioModule = AudioModule::new();

impl AudioModule {
    const fn new() -> Self {
        Self {
            common: ModuleInfo {
                tag: HARDWARE_MODULE_TAG,
                version_major: 1,
                version_minor: 0,
                id: AUDIO_HARDWARE_MODULE_ID,
                name: "My Custom Audio HAL",
                author: "Vehicle Audio Team",
            },
        }
    }
}

impl HwModule for AudioModule {
    fn info(&self) -> &ModuleInfo {
        &self.common
    }

    fn open(&'static self, name: &str) -> Result<Box<dyn AudioHwDevice>, HalError> {
        if name != AUDIO_HARDWARE_INTERFACE {
            let err = HalError::UnsupportedInterface {
                name: name.to_string(),
            };
            log_hal_error(&err, "audio_open");
            return Err(err);
        }

        let mut device = CustomAudioDevice::allocate(self).map_err(|err| {
            log_hal_error(&err, "audio_open");
            err
        })?;
        device.initialize();

        debug!("Audio device initialized successfully");
        Ok(device)
    }
}
