//! Locating and opening the cuDNN shared object.

use std::path::PathBuf;

use libloading::Library;
use tracing::{debug, info, warn};

use crate::config::CudnnConfig;
use crate::error::{DynloadError, Result};

/// Ordered list of paths/names handed to the system loader.
///
/// An explicit `library` short-circuits the search. Otherwise every platform
/// file name is tried under `dir` first, then by bare name so the system
/// search path applies.
pub fn candidates(config: &CudnnConfig, names: &[&str]) -> Vec<PathBuf> {
    if let Some(ref library) = config.library {
        return vec![PathBuf::from(library)];
    }

    let mut out = Vec::with_capacity(names.len() * 2);
    if let Some(ref dir) = config.dir {
        out.extend(names.iter().map(|name| dir.join(name)));
    }
    out.extend(names.iter().map(PathBuf::from));
    out
}

/// Open the first candidate that loads.
pub fn open_first(candidates: &[PathBuf]) -> Result<(Library, PathBuf)> {
    let mut last_err = String::from("no candidate library names for this platform");
    for path in candidates {
        match unsafe { Library::new(path) } {
            Ok(lib) => {
                info!("loaded {}", path.display());
                return Ok((lib, path.clone()));
            }
            Err(e) => {
                debug!("failed to load {}: {}", path.display(), e);
                last_err = e.to_string();
            }
        }
    }

    let err = DynloadError::LibraryNotFound {
        tried: candidates.iter().map(|p| p.display().to_string()).collect(),
        last_error: last_err,
    };
    warn!("{}", err);
    Err(err)
}

/// Resolve and open cuDNN according to `config`.
pub fn open_cudnn(config: &CudnnConfig) -> Result<(Library, PathBuf)> {
    let names = cudnn_dynload_common::platform::cudnn_library_names();
    open_first(&candidates(config, names))
}
