//! Integration tests for the module/device lifecycle
//!
//! These tests validate the open → write → close contract through the public
//! trait surface, including:
//! - Interface name validation on open
//! - Byte-count echo on write
//! - Device-not-ready on never-opened devices
//! - Exactly-once release of each opened device
//! - Bridge behavior over a module whose open always fails

use proptest::prelude::*;
use serial_test::serial;
use vehicle_audio_hal::bridge::AudioHalBridge;
use vehicle_audio_hal::config::BridgeConfig;
use vehicle_audio_hal::error::{ErrorCode, HalError, HalErrorCodes};
use vehicle_audio_hal::hal::{
    close_device, live_device_count, AudioHwDevice, CustomAudioDevice, HwDevice, HwModule,
    ModuleInfo, AUDIO_DEVICE_API_VERSION_2_0, HAL_MODULE_INFO_SYM, HARDWARE_DEVICE_TAG,
};

/// Module that never manages to allocate a device.
struct ExhaustedModule {
    info: ModuleInfo,
}

impl HwModule for ExhaustedModule {
    fn info(&self) -> &ModuleInfo {
        &self.info
    }

    fn open(&'static self, _name: &str) -> Result<Box<dyn AudioHwDevice>, HalError> {
        Err(HalError::OutOfMemory)
    }
}

static EXHAUSTED: ExhaustedModule = ExhaustedModule {
    info: ModuleInfo {
        tag: 0x4D4F4455,
        version_major: 1,
        version_minor: 0,
        id: "audio",
        name: "Exhausted Audio HAL",
        author: "tests",
    },
};

#[test]
#[serial]
fn open_write_close_primary() {
    let before = live_device_count();

    let mut device = HAL_MODULE_INFO_SYM.open("primary").expect("open primary");
    assert_eq!(device.tag(), HARDWARE_DEVICE_TAG);
    assert_eq!(device.version(), AUDIO_DEVICE_API_VERSION_2_0);
    assert_eq!(live_device_count(), before + 1);

    let buffer = [0u8; 1024];
    assert_eq!(device.write(&buffer), Ok(1024));

    assert_eq!(close_device(Some(device)), 0);
    assert_eq!(live_device_count(), before);
}

#[test]
#[serial]
fn open_secondary_yields_no_device() {
    let before = live_device_count();
    let result = HAL_MODULE_INFO_SYM.open("secondary");

    match result {
        Err(err) => assert_eq!(err.code(), HalErrorCodes::INVALID_ARGUMENT),
        Ok(_) => panic!("secondary interface must be rejected"),
    }
    assert_eq!(live_device_count(), before);
}

#[test]
#[serial]
fn never_opened_device_is_not_ready() {
    let mut device = CustomAudioDevice::zeroed(&HAL_MODULE_INFO_SYM);
    assert_eq!(
        device.write(&[1, 2, 3]).map_err(|e| e.code()),
        Err(HalErrorCodes::DEVICE_NOT_READY)
    );
    assert_eq!(device.error_count(), 1);
}

#[test]
fn close_absent_handle_succeeds() {
    assert_eq!(close_device(None), HalErrorCodes::OK);
}

#[test]
#[serial]
fn device_back_reference_points_at_module() {
    let device = HAL_MODULE_INFO_SYM.open("primary").unwrap();
    assert!(std::ptr::eq(
        device.module().info(),
        HAL_MODULE_INFO_SYM.info()
    ));
    device.close().unwrap();
}

#[test]
#[serial]
fn bridge_surfaces_out_of_memory_and_retries() {
    let mut bridge = AudioHalBridge::with_module(&EXHAUSTED, BridgeConfig::default());

    for _ in 0..3 {
        assert_eq!(
            bridge.trigger_write().map_err(|e| e.code()),
            Err(HalErrorCodes::OUT_OF_MEMORY)
        );
        assert!(bridge.module().is_none());
        assert!(!bridge.is_device_open());
    }
    assert_eq!(bridge.telemetry().errors, 3);
}

proptest! {
    #[test]
    #[serial]
    fn open_rejects_every_other_interface(name in "\\PC{0,16}") {
        prop_assume!(name != "primary");
        let before = live_device_count();
        let result = HAL_MODULE_INFO_SYM.open(&name);
        prop_assert!(matches!(
            result,
            Err(HalError::UnsupportedInterface { name: ref rejected }) if *rejected == name
        ), "expected UnsupportedInterface for {:?}", name);
        prop_assert_eq!(live_device_count(), before);
    }

    #[test]
    #[serial]
    fn write_echoes_buffer_length(bytes in 0usize..16_384) {
        let mut device = HAL_MODULE_INFO_SYM.open("primary").unwrap();
        let buffer = vec![0u8; bytes];
        prop_assert_eq!(device.write(&buffer), Ok(bytes));
        prop_assert!(device.close().is_ok());
    }
}
