//! Integration test: proxies without a loadable cuDNN
//!
//! Points the process-wide handle at a library that does not exist, then
//! checks the availability query and the fatal path of the proxies.
//!
//! Run with: cargo test --test unavailable_test -- --nocapture

#![cfg(not(feature = "static"))]

use std::ptr;
use std::sync::Once;

use cudnn_dynload::config::LIBRARY_ENV;
use cudnn_dynload::sys::*;
use cudnn_dynload::{cudnn_version, has_cudnn, DynloadError, CUDNN};

const MISSING_LIBRARY: &str = "/nonexistent/cudnn/libcudnn.so";

fn setup() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        cudnn_dynload_common::logging::try_init_logging();
        std::env::set_var(LIBRARY_ENV, MISSING_LIBRARY);
    });
}

#[test]
fn test_has_cudnn_is_false() {
    setup();
    assert!(!has_cudnn());
    assert!(cudnn_version().is_none());
}

#[test]
fn test_load_error_names_the_configured_path() {
    setup();
    match CUDNN.load_error() {
        Some(DynloadError::LibraryNotFound { tried, .. }) => {
            assert_eq!(tried.as_slice(), [MISSING_LIBRARY.to_string()]);
        }
        other => panic!("expected LibraryNotFound, got {:?}", other),
    }
}

#[cfg(target_os = "linux")]
#[test]
fn test_load_error_does_not_repeat_loader_path() {
    setup();
    let message = CUDNN.load_error().map(|e| e.to_string()).unwrap_or_default();
    // Once in the tried list, once inside the dlerror() text.
    assert_eq!(message.matches(MISSING_LIBRARY).count(), 2, "{}", message);
}

#[test]
#[should_panic(expected = "cannot invoke method cudnnCreate")]
fn test_cudnn_create_is_fatal() {
    setup();
    let mut handle: cudnnHandle_t = ptr::null_mut();
    unsafe {
        cudnn_dynload::cudnnCreate(&mut handle);
    }
}

#[test]
#[should_panic(expected = "cannot invoke method cudnnGetErrorString")]
fn test_cudnn_get_error_string_is_fatal() {
    setup();
    unsafe {
        cudnn_dynload::cudnnGetErrorString(CUDNN_STATUS_BAD_PARAM);
    }
}

#[test]
#[should_panic(expected = "cannot invoke method cudnnAddTensor")]
fn test_r2_proxy_is_fatal() {
    setup();
    unsafe {
        cudnn_dynload::cudnnAddTensor(
            ptr::null_mut(),
            ptr::null(),
            ptr::null_mut(),
            ptr::null(),
            ptr::null(),
            ptr::null_mut(),
            ptr::null_mut(),
        );
    }
}

#[cfg(feature = "cudnn-r5")]
#[test]
#[should_panic(expected = "cannot invoke method cudnnSetActivationDescriptor")]
fn test_r5_proxy_is_fatal() {
    setup();
    unsafe {
        cudnn_dynload::cudnnSetActivationDescriptor(
            ptr::null_mut(),
            CUDNN_ACTIVATION_RELU,
            CUDNN_NOT_PROPAGATE_NAN,
            0.0,
        );
    }
}

#[test]
fn test_library_is_loaded_at_most_once() {
    setup();
    for _ in 0..5 {
        assert!(!has_cudnn());
        let _ = std::panic::catch_unwind(|| unsafe { cudnn_dynload::cudnnGetVersion() });
    }
    assert_eq!(CUDNN.load_attempts(), 1);
}
