//! cuDNN status codes, readable without the library loaded.

use crate::error::{DynloadError, Result};
use crate::sys::*;

/// Convert a cudnnStatus_t code to its symbolic name.
pub fn status_name(status: cudnnStatus_t) -> &'static str {
    match status {
        CUDNN_STATUS_SUCCESS => "CUDNN_STATUS_SUCCESS",
        CUDNN_STATUS_NOT_INITIALIZED => "CUDNN_STATUS_NOT_INITIALIZED",
        CUDNN_STATUS_ALLOC_FAILED => "CUDNN_STATUS_ALLOC_FAILED",
        CUDNN_STATUS_BAD_PARAM => "CUDNN_STATUS_BAD_PARAM",
        CUDNN_STATUS_INTERNAL_ERROR => "CUDNN_STATUS_INTERNAL_ERROR",
        CUDNN_STATUS_INVALID_VALUE => "CUDNN_STATUS_INVALID_VALUE",
        CUDNN_STATUS_ARCH_MISMATCH => "CUDNN_STATUS_ARCH_MISMATCH",
        CUDNN_STATUS_MAPPING_ERROR => "CUDNN_STATUS_MAPPING_ERROR",
        CUDNN_STATUS_EXECUTION_FAILED => "CUDNN_STATUS_EXECUTION_FAILED",
        CUDNN_STATUS_NOT_SUPPORTED => "CUDNN_STATUS_NOT_SUPPORTED",
        CUDNN_STATUS_LICENSE_ERROR => "CUDNN_STATUS_LICENSE_ERROR",
        CUDNN_STATUS_RUNTIME_PREREQUISITE_MISSING => "CUDNN_STATUS_RUNTIME_PREREQUISITE_MISSING",
        CUDNN_STATUS_RUNTIME_IN_PROGRESS => "CUDNN_STATUS_RUNTIME_IN_PROGRESS",
        CUDNN_STATUS_RUNTIME_FP_OVERFLOW => "CUDNN_STATUS_RUNTIME_FP_OVERFLOW",
        _ => "CUDNN_STATUS_UNKNOWN",
    }
}

/// Turn a status returned by `call` into a `Result`.
pub fn check(status: cudnnStatus_t, call: &'static str) -> Result<()> {
    if status == CUDNN_STATUS_SUCCESS {
        Ok(())
    } else {
        Err(DynloadError::Status {
            call,
            status,
            name: status_name(status),
        })
    }
}
