//! Process-wide, load-once handle to a shared object.
//!
//! The first caller performs the load; concurrent callers block on the
//! `OnceLock` until it finishes and then share the result without further
//! locking. A failed load is remembered as well, so the library is never
//! opened twice. The handle lives in a `static` and is never closed.

use std::ffi::c_void;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use libloading::Library;
use tracing::error;

use crate::config::DynloadConfig;
use crate::error::{DynloadError, Result};
use crate::loader;

pub type OpenFn = fn() -> Result<(Library, PathBuf)>;

enum LoadState {
    Loaded { lib: Library, path: PathBuf },
    Failed(DynloadError),
}

pub struct LazyLibrary {
    label: &'static str,
    open: OpenFn,
    state: OnceLock<LoadState>,
    attempts: AtomicUsize,
}

impl LazyLibrary {
    pub const fn new(label: &'static str, open: OpenFn) -> Self {
        Self {
            label,
            open,
            state: OnceLock::new(),
            attempts: AtomicUsize::new(0),
        }
    }

    fn state(&self) -> &LoadState {
        self.state.get_or_init(|| {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            match (self.open)() {
                Ok((lib, path)) => LoadState::Loaded { lib, path },
                Err(e) => LoadState::Failed(e),
            }
        })
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The loaded library, performing the one-time load if needed.
    pub fn handle(&self) -> Option<&Library> {
        match self.state() {
            LoadState::Loaded { lib, .. } => Some(lib),
            LoadState::Failed(_) => None,
        }
    }

    /// Availability query. Triggers the one-time load.
    pub fn is_loaded(&self) -> bool {
        self.handle().is_some()
    }

    /// Path the library was loaded from.
    pub fn path(&self) -> Option<&Path> {
        match self.state() {
            LoadState::Loaded { path, .. } => Some(path),
            LoadState::Failed(_) => None,
        }
    }

    /// Why the one-time load failed, if it did.
    pub fn load_error(&self) -> Option<&DynloadError> {
        match self.state() {
            LoadState::Loaded { .. } => None,
            LoadState::Failed(e) => Some(e),
        }
    }

    /// Whether the one-time load has already run. Never triggers it.
    pub fn is_initialized(&self) -> bool {
        self.state.get().is_some()
    }

    /// Number of loads performed so far (0 or 1).
    pub fn load_attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// The loaded library, or a fatal error naming `fn_name`.
    pub fn enforce_loaded(&self, fn_name: &str) -> &Library {
        match self.state() {
            LoadState::Loaded { lib, .. } => lib,
            LoadState::Failed(e) => {
                error!(
                    "cannot load {} shared library, cannot invoke method {}: {}",
                    self.label, fn_name, e
                );
                panic!(
                    "cannot load {} shared library, cannot invoke method {}: {}",
                    self.label, fn_name, e
                );
            }
        }
    }

    /// Look `fn_name` up in the loaded library. Not cached: every call goes
    /// back to the loader.
    ///
    /// # Safety
    ///
    /// `F` must be the function pointer type of the C symbol `fn_name`.
    pub unsafe fn resolve<F: Copy>(&self, fn_name: &str) -> F {
        let lib = self.enforce_loaded(fn_name);
        match unsafe { lib.get::<F>(fn_name.as_bytes()) } {
            Ok(sym) => *sym,
            Err(e) => {
                let e = DynloadError::SymbolNotFound {
                    symbol: fn_name.to_string(),
                    source: e,
                };
                error!("cannot invoke method {}: {}", fn_name, e);
                panic!("cannot invoke method {}: {}", fn_name, e);
            }
        }
    }

    /// Non-fatal symbol lookup. False when the library itself is absent.
    pub fn symbol_present(&self, name: &str) -> bool {
        self.handle()
            .is_some_and(|lib| unsafe { lib.get::<*mut c_void>(name.as_bytes()) }.is_ok())
    }
}

fn open_configured_cudnn() -> Result<(Library, PathBuf)> {
    let config = DynloadConfig::resolve();
    loader::open_cudnn(&config.cudnn)
}

/// The process-wide cuDNN handle every proxy goes through.
pub static CUDNN: LazyLibrary = LazyLibrary::new("cuDNN", open_configured_cudnn);

/// Whether cuDNN can be used in this process.
///
/// With the `static` feature the library is resolved at link time and this
/// is always true.
pub fn has_cudnn() -> bool {
    #[cfg(feature = "static")]
    {
        true
    }
    #[cfg(not(feature = "static"))]
    {
        CUDNN.is_loaded()
    }
}
