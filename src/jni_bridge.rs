//! JNI exports for `com.example.myaudiohalproject.MainActivity`.

use jni::objects::JObject;
use jni::sys::{jint, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};
use log::info;

use crate::api;
use crate::config::HalConfig;
use crate::logging::init_logging;
use crate::telemetry::LifecyclePhase;

/// JNI_OnLoad is called when the native library is loaded by Android
#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut std::ffi::c_void) -> jint {
    init_logging(&HalConfig::load().logging);
    info!("JNI_OnLoad called");
    api::record_jni_phase(LifecyclePhase::LibraryLoaded);

    JNI_VERSION_1_6
}

/// Release the device before the class loader drops the library.
#[no_mangle]
pub extern "system" fn JNI_OnUnload(_vm: JavaVM, _reserved: *mut std::ffi::c_void) {
    api::release_hal_device();
    api::record_jni_phase(LifecyclePhase::LibraryUnloaded);
    info!("JNI_OnUnload called");
}

#[no_mangle]
pub extern "system" fn Java_com_example_myaudiohalproject_MainActivity_triggerHalAudioWrite<
    'local,
>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jint {
    api::trigger_hal_audio_write()
}
