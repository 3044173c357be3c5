//! One proxy per cuDNN entry point.
//!
//! Each proxy has the exact C signature of the cuDNN 7 function it stands in
//! for. Called through the dynamic loader (the default), it goes through the
//! process-wide [`CUDNN`](crate::dso::CUDNN) handle, resolves the symbol by
//! name and forwards the arguments. With the `static` feature it calls the
//! link-time symbol directly.
//!
//! Groups introduced after the base release are only compiled when the crate
//! targets that release or newer (see [`crate::release`]).

#![allow(non_snake_case, clippy::too_many_arguments)]

use std::ffi::{c_char, c_int, c_void};
use std::sync::OnceLock;

use serde::Serialize;

use crate::release::Release;
use crate::sys::*;

/// A compiled-in proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Routine {
    pub name: &'static str,
    pub since: Release,
}

macro_rules! declare_routines {
    (
        $table:ident, $release:expr;
        $( fn $name:ident( $( $arg:ident: $ty:ty ),* $(,)? ) -> $ret:ty; )*
    ) => {
        $(
            #[cfg(not(feature = "static"))]
            #[doc = concat!("Lazily loaded `", stringify!($name), "`.")]
            ///
            /// # Safety
            ///
            /// Same contract as the cuDNN function. Panics if cuDNN or the
            /// symbol cannot be loaded.
            pub unsafe fn $name( $( $arg: $ty ),* ) -> $ret {
                type Pfn = unsafe extern "C" fn( $( $ty ),* ) -> $ret;
                let f: Pfn = unsafe { crate::dso::CUDNN.resolve::<Pfn>(stringify!($name)) };
                unsafe { f( $( $arg ),* ) }
            }

            #[cfg(feature = "static")]
            #[doc = concat!("Statically linked `", stringify!($name), "`.")]
            ///
            /// # Safety
            ///
            /// Same contract as the cuDNN function.
            pub unsafe fn $name( $( $arg: $ty ),* ) -> $ret {
                #[link(name = "cudnn")]
                extern "C" {
                    fn $name( $( $arg: $ty ),* ) -> $ret;
                }
                unsafe { $name( $( $arg ),* ) }
            }
        )*

        const $table: &[Routine] = &[
            $( Routine { name: stringify!($name), since: $release }, )*
        ];
    };
}

declare_routines! {
    BASE_ROUTINES, Release::Base;
    fn cudnnSetTensor4dDescriptor(
        tensor_desc: cudnnTensorDescriptor_t,
        format: cudnnTensorFormat_t,
        data_type: cudnnDataType_t,
        n: c_int,
        c: c_int,
        h: c_int,
        w: c_int,
    ) -> cudnnStatus_t;
    fn cudnnSetTensor4dDescriptorEx(
        tensor_desc: cudnnTensorDescriptor_t,
        data_type: cudnnDataType_t,
        n: c_int,
        c: c_int,
        h: c_int,
        w: c_int,
        n_stride: c_int,
        c_stride: c_int,
        h_stride: c_int,
        w_stride: c_int,
    ) -> cudnnStatus_t;
    fn cudnnSetTensorNdDescriptor(
        tensor_desc: cudnnTensorDescriptor_t,
        data_type: cudnnDataType_t,
        nb_dims: c_int,
        dim_a: *const c_int,
        stride_a: *const c_int,
    ) -> cudnnStatus_t;
    fn cudnnGetTensorNdDescriptor(
        tensor_desc: cudnnTensorDescriptor_t,
        nb_dims_requested: c_int,
        data_type: *mut cudnnDataType_t,
        nb_dims: *mut c_int,
        dim_a: *mut c_int,
        stride_a: *mut c_int,
    ) -> cudnnStatus_t;
    fn cudnnGetConvolutionNdForwardOutputDim(
        conv_desc: cudnnConvolutionDescriptor_t,
        input_tensor_desc: cudnnTensorDescriptor_t,
        filter_desc: cudnnFilterDescriptor_t,
        nb_dims: c_int,
        tensor_output_dim_a: *mut c_int,
    ) -> cudnnStatus_t;
    fn cudnnGetConvolutionForwardAlgorithm(
        handle: cudnnHandle_t,
        x_desc: cudnnTensorDescriptor_t,
        w_desc: cudnnFilterDescriptor_t,
        conv_desc: cudnnConvolutionDescriptor_t,
        y_desc: cudnnTensorDescriptor_t,
        preference: cudnnConvolutionFwdPreference_t,
        memory_limit_in_bytes: usize,
        algo: *mut cudnnConvolutionFwdAlgo_t,
    ) -> cudnnStatus_t;
    fn cudnnCreateTensorDescriptor(tensor_desc: *mut cudnnTensorDescriptor_t) -> cudnnStatus_t;
    fn cudnnDestroyTensorDescriptor(tensor_desc: cudnnTensorDescriptor_t) -> cudnnStatus_t;
    fn cudnnCreateFilterDescriptor(filter_desc: *mut cudnnFilterDescriptor_t) -> cudnnStatus_t;
    fn cudnnSetFilter4dDescriptor(
        filter_desc: cudnnFilterDescriptor_t,
        data_type: cudnnDataType_t,
        format: cudnnTensorFormat_t,
        k: c_int,
        c: c_int,
        h: c_int,
        w: c_int,
    ) -> cudnnStatus_t;
    fn cudnnSetFilterNdDescriptor(
        filter_desc: cudnnFilterDescriptor_t,
        data_type: cudnnDataType_t,
        format: cudnnTensorFormat_t,
        nb_dims: c_int,
        filter_dim_a: *const c_int,
    ) -> cudnnStatus_t;
    fn cudnnGetFilterNdDescriptor(
        filter_desc: cudnnFilterDescriptor_t,
        nb_dims_requested: c_int,
        data_type: *mut cudnnDataType_t,
        format: *mut cudnnTensorFormat_t,
        nb_dims: *mut c_int,
        filter_dim_a: *mut c_int,
    ) -> cudnnStatus_t;
    fn cudnnSetPooling2dDescriptor(
        pooling_desc: cudnnPoolingDescriptor_t,
        mode: cudnnPoolingMode_t,
        maxpooling_nan_opt: cudnnNanPropagation_t,
        window_height: c_int,
        window_width: c_int,
        vertical_padding: c_int,
        horizontal_padding: c_int,
        vertical_stride: c_int,
        horizontal_stride: c_int,
    ) -> cudnnStatus_t;
    fn cudnnSetPoolingNdDescriptor(
        pooling_desc: cudnnPoolingDescriptor_t,
        mode: cudnnPoolingMode_t,
        maxpooling_nan_opt: cudnnNanPropagation_t,
        nb_dims: c_int,
        window_dim_a: *const c_int,
        padding_a: *const c_int,
        stride_a: *const c_int,
    ) -> cudnnStatus_t;
    fn cudnnGetPoolingNdDescriptor(
        pooling_desc: cudnnPoolingDescriptor_t,
        nb_dims_requested: c_int,
        mode: *mut cudnnPoolingMode_t,
        maxpooling_nan_opt: *mut cudnnNanPropagation_t,
        nb_dims: *mut c_int,
        window_dim_a: *mut c_int,
        padding_a: *mut c_int,
        stride_a: *mut c_int,
    ) -> cudnnStatus_t;
    fn cudnnDestroyFilterDescriptor(filter_desc: cudnnFilterDescriptor_t) -> cudnnStatus_t;
    fn cudnnCreateConvolutionDescriptor(
        conv_desc: *mut cudnnConvolutionDescriptor_t,
    ) -> cudnnStatus_t;
    fn cudnnCreatePoolingDescriptor(pooling_desc: *mut cudnnPoolingDescriptor_t) -> cudnnStatus_t;
    fn cudnnDestroyPoolingDescriptor(pooling_desc: cudnnPoolingDescriptor_t) -> cudnnStatus_t;
    fn cudnnSetConvolution2dDescriptor(
        conv_desc: cudnnConvolutionDescriptor_t,
        pad_h: c_int,
        pad_w: c_int,
        u: c_int,
        v: c_int,
        dilation_h: c_int,
        dilation_w: c_int,
        mode: cudnnConvolutionMode_t,
        compute_type: cudnnDataType_t,
    ) -> cudnnStatus_t;
    fn cudnnDestroyConvolutionDescriptor(
        conv_desc: cudnnConvolutionDescriptor_t,
    ) -> cudnnStatus_t;
    fn cudnnSetConvolutionNdDescriptor(
        conv_desc: cudnnConvolutionDescriptor_t,
        array_length: c_int,
        pad_a: *const c_int,
        filter_stride_a: *const c_int,
        dilation_a: *const c_int,
        mode: cudnnConvolutionMode_t,
        compute_type: cudnnDataType_t,
    ) -> cudnnStatus_t;
    fn cudnnGetConvolutionNdDescriptor(
        conv_desc: cudnnConvolutionDescriptor_t,
        array_length_requested: c_int,
        array_length: *mut c_int,
        pad_a: *mut c_int,
        stride_a: *mut c_int,
        dilation_a: *mut c_int,
        mode: *mut cudnnConvolutionMode_t,
        compute_type: *mut cudnnDataType_t,
    ) -> cudnnStatus_t;
    fn cudnnDeriveBNTensorDescriptor(
        derived_bn_desc: cudnnTensorDescriptor_t,
        x_desc: cudnnTensorDescriptor_t,
        mode: cudnnBatchNormMode_t,
    ) -> cudnnStatus_t;
    fn cudnnCreate(handle: *mut cudnnHandle_t) -> cudnnStatus_t;
    fn cudnnDestroy(handle: cudnnHandle_t) -> cudnnStatus_t;
    fn cudnnSetStream(handle: cudnnHandle_t, stream_id: cudaStream_t) -> cudnnStatus_t;
    fn cudnnActivationForward(
        handle: cudnnHandle_t,
        activation_desc: cudnnActivationDescriptor_t,
        alpha: *const c_void,
        x_desc: cudnnTensorDescriptor_t,
        x: *const c_void,
        beta: *const c_void,
        y_desc: cudnnTensorDescriptor_t,
        y: *mut c_void,
    ) -> cudnnStatus_t;
    fn cudnnConvolutionForward(
        handle: cudnnHandle_t,
        alpha: *const c_void,
        x_desc: cudnnTensorDescriptor_t,
        x: *const c_void,
        w_desc: cudnnFilterDescriptor_t,
        w: *const c_void,
        conv_desc: cudnnConvolutionDescriptor_t,
        algo: cudnnConvolutionFwdAlgo_t,
        work_space: *mut c_void,
        work_space_size_in_bytes: usize,
        beta: *const c_void,
        y_desc: cudnnTensorDescriptor_t,
        y: *mut c_void,
    ) -> cudnnStatus_t;
    fn cudnnConvolutionBackwardBias(
        handle: cudnnHandle_t,
        alpha: *const c_void,
        dy_desc: cudnnTensorDescriptor_t,
        dy: *const c_void,
        beta: *const c_void,
        db_desc: cudnnTensorDescriptor_t,
        db: *mut c_void,
    ) -> cudnnStatus_t;
    fn cudnnGetConvolutionForwardWorkspaceSize(
        handle: cudnnHandle_t,
        x_desc: cudnnTensorDescriptor_t,
        w_desc: cudnnFilterDescriptor_t,
        conv_desc: cudnnConvolutionDescriptor_t,
        y_desc: cudnnTensorDescriptor_t,
        algo: cudnnConvolutionFwdAlgo_t,
        size_in_bytes: *mut usize,
    ) -> cudnnStatus_t;
    fn cudnnTransformTensor(
        handle: cudnnHandle_t,
        alpha: *const c_void,
        x_desc: cudnnTensorDescriptor_t,
        x: *const c_void,
        beta: *const c_void,
        y_desc: cudnnTensorDescriptor_t,
        y: *mut c_void,
    ) -> cudnnStatus_t;
    fn cudnnPoolingForward(
        handle: cudnnHandle_t,
        pooling_desc: cudnnPoolingDescriptor_t,
        alpha: *const c_void,
        x_desc: cudnnTensorDescriptor_t,
        x: *const c_void,
        beta: *const c_void,
        y_desc: cudnnTensorDescriptor_t,
        y: *mut c_void,
    ) -> cudnnStatus_t;
    fn cudnnPoolingBackward(
        handle: cudnnHandle_t,
        pooling_desc: cudnnPoolingDescriptor_t,
        alpha: *const c_void,
        y_desc: cudnnTensorDescriptor_t,
        y: *const c_void,
        dy_desc: cudnnTensorDescriptor_t,
        dy: *const c_void,
        x_desc: cudnnTensorDescriptor_t,
        x: *const c_void,
        beta: *const c_void,
        dx_desc: cudnnTensorDescriptor_t,
        dx: *mut c_void,
    ) -> cudnnStatus_t;
    fn cudnnSoftmaxBackward(
        handle: cudnnHandle_t,
        algo: cudnnSoftmaxAlgorithm_t,
        mode: cudnnSoftmaxMode_t,
        alpha: *const c_void,
        y_desc: cudnnTensorDescriptor_t,
        y: *const c_void,
        dy_desc: cudnnTensorDescriptor_t,
        dy: *const c_void,
        beta: *const c_void,
        dx_desc: cudnnTensorDescriptor_t,
        dx: *mut c_void,
    ) -> cudnnStatus_t;
    fn cudnnSoftmaxForward(
        handle: cudnnHandle_t,
        algo: cudnnSoftmaxAlgorithm_t,
        mode: cudnnSoftmaxMode_t,
        alpha: *const c_void,
        x_desc: cudnnTensorDescriptor_t,
        x: *const c_void,
        beta: *const c_void,
        y_desc: cudnnTensorDescriptor_t,
        y: *mut c_void,
    ) -> cudnnStatus_t;
    fn cudnnGetVersion() -> usize;
    fn cudnnGetErrorString(status: cudnnStatus_t) -> *const c_char;
}

declare_routines! {
    R2_ROUTINES, Release::R2;
    fn cudnnAddTensor(
        handle: cudnnHandle_t,
        alpha: *const c_void,
        a_desc: cudnnTensorDescriptor_t,
        a: *const c_void,
        beta: *const c_void,
        c_desc: cudnnTensorDescriptor_t,
        c: *mut c_void,
    ) -> cudnnStatus_t;
    fn cudnnConvolutionBackwardData(
        handle: cudnnHandle_t,
        alpha: *const c_void,
        w_desc: cudnnFilterDescriptor_t,
        w: *const c_void,
        dy_desc: cudnnTensorDescriptor_t,
        dy: *const c_void,
        conv_desc: cudnnConvolutionDescriptor_t,
        algo: cudnnConvolutionBwdDataAlgo_t,
        work_space: *mut c_void,
        work_space_size_in_bytes: usize,
        beta: *const c_void,
        dx_desc: cudnnTensorDescriptor_t,
        dx: *mut c_void,
    ) -> cudnnStatus_t;
    fn cudnnConvolutionBackwardFilter(
        handle: cudnnHandle_t,
        alpha: *const c_void,
        x_desc: cudnnTensorDescriptor_t,
        x: *const c_void,
        dy_desc: cudnnTensorDescriptor_t,
        dy: *const c_void,
        conv_desc: cudnnConvolutionDescriptor_t,
        algo: cudnnConvolutionBwdFilterAlgo_t,
        work_space: *mut c_void,
        work_space_size_in_bytes: usize,
        beta: *const c_void,
        dw_desc: cudnnFilterDescriptor_t,
        dw: *mut c_void,
    ) -> cudnnStatus_t;
}

#[cfg(feature = "cudnn-r3")]
declare_routines! {
    R3_ROUTINES, Release::R3;
    fn cudnnGetConvolutionBackwardFilterWorkspaceSize(
        handle: cudnnHandle_t,
        x_desc: cudnnTensorDescriptor_t,
        dy_desc: cudnnTensorDescriptor_t,
        conv_desc: cudnnConvolutionDescriptor_t,
        grad_desc: cudnnFilterDescriptor_t,
        algo: cudnnConvolutionBwdFilterAlgo_t,
        size_in_bytes: *mut usize,
    ) -> cudnnStatus_t;
    fn cudnnGetConvolutionBackwardDataAlgorithm(
        handle: cudnnHandle_t,
        w_desc: cudnnFilterDescriptor_t,
        dy_desc: cudnnTensorDescriptor_t,
        conv_desc: cudnnConvolutionDescriptor_t,
        dx_desc: cudnnTensorDescriptor_t,
        preference: cudnnConvolutionBwdDataPreference_t,
        memory_limit_in_bytes: usize,
        algo: *mut cudnnConvolutionBwdDataAlgo_t,
    ) -> cudnnStatus_t;
    fn cudnnGetConvolutionBackwardFilterAlgorithm(
        handle: cudnnHandle_t,
        x_desc: cudnnTensorDescriptor_t,
        dy_desc: cudnnTensorDescriptor_t,
        conv_desc: cudnnConvolutionDescriptor_t,
        dw_desc: cudnnFilterDescriptor_t,
        preference: cudnnConvolutionBwdFilterPreference_t,
        memory_limit_in_bytes: usize,
        algo: *mut cudnnConvolutionBwdFilterAlgo_t,
    ) -> cudnnStatus_t;
    fn cudnnGetConvolutionBackwardDataWorkspaceSize(
        handle: cudnnHandle_t,
        w_desc: cudnnFilterDescriptor_t,
        dy_desc: cudnnTensorDescriptor_t,
        conv_desc: cudnnConvolutionDescriptor_t,
        dx_desc: cudnnTensorDescriptor_t,
        algo: cudnnConvolutionBwdDataAlgo_t,
        size_in_bytes: *mut usize,
    ) -> cudnnStatus_t;
}

#[cfg(feature = "cudnn-r4")]
declare_routines! {
    R4_ROUTINES, Release::R4;
    fn cudnnBatchNormalizationForwardTraining(
        handle: cudnnHandle_t,
        mode: cudnnBatchNormMode_t,
        alpha: *const c_void,
        beta: *const c_void,
        x_desc: cudnnTensorDescriptor_t,
        x: *const c_void,
        y_desc: cudnnTensorDescriptor_t,
        y: *mut c_void,
        bn_scale_bias_mean_var_desc: cudnnTensorDescriptor_t,
        bn_scale: *const c_void,
        bn_bias: *const c_void,
        exponential_average_factor: f64,
        result_running_mean: *mut c_void,
        result_running_variance: *mut c_void,
        epsilon: f64,
        result_save_mean: *mut c_void,
        result_save_inv_variance: *mut c_void,
    ) -> cudnnStatus_t;
    fn cudnnBatchNormalizationForwardInference(
        handle: cudnnHandle_t,
        mode: cudnnBatchNormMode_t,
        alpha: *const c_void,
        beta: *const c_void,
        x_desc: cudnnTensorDescriptor_t,
        x: *const c_void,
        y_desc: cudnnTensorDescriptor_t,
        y: *mut c_void,
        bn_scale_bias_mean_var_desc: cudnnTensorDescriptor_t,
        bn_scale: *const c_void,
        bn_bias: *const c_void,
        estimated_mean: *const c_void,
        estimated_variance: *const c_void,
        epsilon: f64,
    ) -> cudnnStatus_t;
    fn cudnnBatchNormalizationBackward(
        handle: cudnnHandle_t,
        mode: cudnnBatchNormMode_t,
        alpha_data_diff: *const c_void,
        beta_data_diff: *const c_void,
        alpha_param_diff: *const c_void,
        beta_param_diff: *const c_void,
        x_desc: cudnnTensorDescriptor_t,
        x: *const c_void,
        dy_desc: cudnnTensorDescriptor_t,
        dy: *const c_void,
        dx_desc: cudnnTensorDescriptor_t,
        dx: *mut c_void,
        d_bn_scale_bias_desc: cudnnTensorDescriptor_t,
        bn_scale: *const c_void,
        d_bn_scale_result: *mut c_void,
        d_bn_bias_result: *mut c_void,
        epsilon: f64,
        saved_mean: *const c_void,
        saved_inv_variance: *const c_void,
    ) -> cudnnStatus_t;
}

#[cfg(feature = "cudnn-r5")]
declare_routines! {
    R5_ROUTINES, Release::R5;
    fn cudnnCreateActivationDescriptor(
        activation_desc: *mut cudnnActivationDescriptor_t,
    ) -> cudnnStatus_t;
    fn cudnnSetActivationDescriptor(
        activation_desc: cudnnActivationDescriptor_t,
        mode: cudnnActivationMode_t,
        relu_nan_opt: cudnnNanPropagation_t,
        coef: f64,
    ) -> cudnnStatus_t;
    fn cudnnGetActivationDescriptor(
        activation_desc: cudnnActivationDescriptor_t,
        mode: *mut cudnnActivationMode_t,
        relu_nan_opt: *mut cudnnNanPropagation_t,
        coef: *mut f64,
    ) -> cudnnStatus_t;
    fn cudnnDestroyActivationDescriptor(
        activation_desc: cudnnActivationDescriptor_t,
    ) -> cudnnStatus_t;
}

#[cfg(feature = "cudnn-r7")]
declare_routines! {
    R7_ROUTINES, Release::R7;
    fn cudnnSetConvolutionGroupCount(
        conv_desc: cudnnConvolutionDescriptor_t,
        group_count: c_int,
    ) -> cudnnStatus_t;
}

/// Every proxy compiled into this build, in declaration order.
pub fn routines() -> &'static [Routine] {
    static TABLE: OnceLock<Vec<Routine>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = Vec::new();
        table.extend_from_slice(BASE_ROUTINES);
        table.extend_from_slice(R2_ROUTINES);
        #[cfg(feature = "cudnn-r3")]
        table.extend_from_slice(R3_ROUTINES);
        #[cfg(feature = "cudnn-r4")]
        table.extend_from_slice(R4_ROUTINES);
        #[cfg(feature = "cudnn-r5")]
        table.extend_from_slice(R5_ROUTINES);
        #[cfg(feature = "cudnn-r7")]
        table.extend_from_slice(R7_ROUTINES);
        table
    })
}

/// Look a compiled proxy up by its cuDNN name.
pub fn find_routine(name: &str) -> Option<&'static Routine> {
    routines().iter().find(|r| r.name == name)
}
