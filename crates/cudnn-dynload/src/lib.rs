//! Lazily loaded cuDNN bindings.
//!
//! cuDNN is not a link-time dependency. The first call to any proxy in
//! [`routines`] loads the shared object (once per process), each call resolves
//! its symbol by name and forwards the arguments unchanged. [`has_cudnn`]
//! reports whether the library could be loaded at all; calling a proxy when
//! it could not is fatal and names the function that was called.
//!
//! Where to look for the library is configured through `cudnn-dynload.toml`
//! or the `CUDNN_DIR` / `CUDNN_LIBRARY` environment variables, see [`config`].
//! Building with the `static` feature links cuDNN directly instead.

pub mod config;
pub mod dso;
pub mod error;
pub mod loader;
pub mod release;
pub mod routines;
pub mod status;
pub mod sys;

pub use dso::{has_cudnn, LazyLibrary, CUDNN};
pub use error::{DynloadError, Result};
pub use release::{Release, COMPILED_RELEASE, CUDNN_VERSION};
pub use routines::*;
pub use status::{check, status_name};

/// `cudnnGetVersion()` of the loaded library, or `None` when cuDNN is not
/// available.
#[cfg(not(feature = "static"))]
pub fn cudnn_version() -> Option<usize> {
    if !CUDNN.symbol_present("cudnnGetVersion") {
        return None;
    }
    Some(unsafe { routines::cudnnGetVersion() })
}

/// `cudnnGetVersion()` of the linked library.
#[cfg(feature = "static")]
pub fn cudnn_version() -> Option<usize> {
    Some(unsafe { routines::cudnnGetVersion() })
}
