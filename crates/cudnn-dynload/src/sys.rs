//! Raw cuDNN C types, as laid out by the cuDNN 7 headers.

#![allow(non_camel_case_types)]

use std::ffi::{c_int, c_void};

/// cuDNN status code (cudnnStatus_t).
pub type cudnnStatus_t = c_int;

/// Opaque cuDNN types (represented as pointers).
pub type cudnnHandle_t = *mut c_void;
pub type cudnnTensorDescriptor_t = *mut c_void;
pub type cudnnFilterDescriptor_t = *mut c_void;
pub type cudnnConvolutionDescriptor_t = *mut c_void;
pub type cudnnPoolingDescriptor_t = *mut c_void;
pub type cudnnActivationDescriptor_t = *mut c_void;

/// CUDA runtime stream handle.
pub type cudaStream_t = *mut c_void;

// C enums passed by value.
pub type cudnnDataType_t = c_int;
pub type cudnnTensorFormat_t = c_int;
pub type cudnnNanPropagation_t = c_int;
pub type cudnnConvolutionMode_t = c_int;
pub type cudnnConvolutionFwdPreference_t = c_int;
pub type cudnnConvolutionFwdAlgo_t = c_int;
pub type cudnnConvolutionBwdDataPreference_t = c_int;
pub type cudnnConvolutionBwdDataAlgo_t = c_int;
pub type cudnnConvolutionBwdFilterPreference_t = c_int;
pub type cudnnConvolutionBwdFilterAlgo_t = c_int;
pub type cudnnPoolingMode_t = c_int;
pub type cudnnActivationMode_t = c_int;
pub type cudnnSoftmaxAlgorithm_t = c_int;
pub type cudnnSoftmaxMode_t = c_int;
pub type cudnnBatchNormMode_t = c_int;

pub const CUDNN_STATUS_SUCCESS: cudnnStatus_t = 0;
pub const CUDNN_STATUS_NOT_INITIALIZED: cudnnStatus_t = 1;
pub const CUDNN_STATUS_ALLOC_FAILED: cudnnStatus_t = 2;
pub const CUDNN_STATUS_BAD_PARAM: cudnnStatus_t = 3;
pub const CUDNN_STATUS_INTERNAL_ERROR: cudnnStatus_t = 4;
pub const CUDNN_STATUS_INVALID_VALUE: cudnnStatus_t = 5;
pub const CUDNN_STATUS_ARCH_MISMATCH: cudnnStatus_t = 6;
pub const CUDNN_STATUS_MAPPING_ERROR: cudnnStatus_t = 7;
pub const CUDNN_STATUS_EXECUTION_FAILED: cudnnStatus_t = 8;
pub const CUDNN_STATUS_NOT_SUPPORTED: cudnnStatus_t = 9;
pub const CUDNN_STATUS_LICENSE_ERROR: cudnnStatus_t = 10;
pub const CUDNN_STATUS_RUNTIME_PREREQUISITE_MISSING: cudnnStatus_t = 11;
pub const CUDNN_STATUS_RUNTIME_IN_PROGRESS: cudnnStatus_t = 12;
pub const CUDNN_STATUS_RUNTIME_FP_OVERFLOW: cudnnStatus_t = 13;

// Enum values passed to the proxies by callers.
pub const CUDNN_DATA_FLOAT: cudnnDataType_t = 0;
pub const CUDNN_DATA_DOUBLE: cudnnDataType_t = 1;
pub const CUDNN_DATA_HALF: cudnnDataType_t = 2;

pub const CUDNN_TENSOR_NCHW: cudnnTensorFormat_t = 0;
pub const CUDNN_TENSOR_NHWC: cudnnTensorFormat_t = 1;

pub const CUDNN_NOT_PROPAGATE_NAN: cudnnNanPropagation_t = 0;
pub const CUDNN_PROPAGATE_NAN: cudnnNanPropagation_t = 1;

pub const CUDNN_CONVOLUTION: cudnnConvolutionMode_t = 0;
pub const CUDNN_CROSS_CORRELATION: cudnnConvolutionMode_t = 1;

pub const CUDNN_POOLING_MAX: cudnnPoolingMode_t = 0;
pub const CUDNN_POOLING_AVERAGE_COUNT_INCLUDE_PADDING: cudnnPoolingMode_t = 1;
pub const CUDNN_POOLING_AVERAGE_COUNT_EXCLUDE_PADDING: cudnnPoolingMode_t = 2;

pub const CUDNN_ACTIVATION_SIGMOID: cudnnActivationMode_t = 0;
pub const CUDNN_ACTIVATION_RELU: cudnnActivationMode_t = 1;
pub const CUDNN_ACTIVATION_TANH: cudnnActivationMode_t = 2;

pub const CUDNN_SOFTMAX_FAST: cudnnSoftmaxAlgorithm_t = 0;
pub const CUDNN_SOFTMAX_ACCURATE: cudnnSoftmaxAlgorithm_t = 1;
pub const CUDNN_SOFTMAX_LOG: cudnnSoftmaxAlgorithm_t = 2;

pub const CUDNN_SOFTMAX_MODE_INSTANCE: cudnnSoftmaxMode_t = 0;
pub const CUDNN_SOFTMAX_MODE_CHANNEL: cudnnSoftmaxMode_t = 1;

pub const CUDNN_BATCHNORM_PER_ACTIVATION: cudnnBatchNormMode_t = 0;
pub const CUDNN_BATCHNORM_SPATIAL: cudnnBatchNormMode_t = 1;
