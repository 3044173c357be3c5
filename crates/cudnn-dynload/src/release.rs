//! cuDNN header releases the proxy table can be compiled against.
//!
//! Entry points are grouped by the release that introduced them. A group is
//! compiled in only when the selected header release is at least as new; the
//! selection is made through the `cudnn-r3` .. `cudnn-r7` cargo features.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Release {
    /// Present in every supported release.
    Base,
    R2,
    R3,
    R4,
    R5,
    R7,
}

impl Release {
    pub const ALL: [Release; 6] = [
        Release::Base,
        Release::R2,
        Release::R3,
        Release::R4,
        Release::R5,
        Release::R7,
    ];

    /// Minimum `CUDNN_VERSION` that carries this release's entry points.
    pub const fn min_version(self) -> usize {
        match self {
            Release::Base => 0,
            Release::R2 => 2000,
            Release::R3 => 3000,
            Release::R4 => 4007,
            Release::R5 => 5000,
            Release::R7 => 7001,
        }
    }

    /// Whether this release's entry points are part of the current build.
    pub const fn is_compiled(self) -> bool {
        self.min_version() <= CUDNN_VERSION
    }

    /// Newest release whose entry points a library reporting `version` provides.
    pub fn for_version(version: usize) -> Release {
        Release::ALL
            .iter()
            .rev()
            .copied()
            .find(|r| r.min_version() <= version)
            .unwrap_or(Release::Base)
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Release::Base => write!(f, "base"),
            other => write!(f, "{:?} (>= {})", other, other.min_version()),
        }
    }
}

/// Release the crate was built against.
#[cfg(feature = "cudnn-r7")]
pub const COMPILED_RELEASE: Release = Release::R7;
#[cfg(all(feature = "cudnn-r5", not(feature = "cudnn-r7")))]
pub const COMPILED_RELEASE: Release = Release::R5;
#[cfg(all(feature = "cudnn-r4", not(feature = "cudnn-r5")))]
pub const COMPILED_RELEASE: Release = Release::R4;
#[cfg(all(feature = "cudnn-r3", not(feature = "cudnn-r4")))]
pub const COMPILED_RELEASE: Release = Release::R3;
#[cfg(not(feature = "cudnn-r3"))]
pub const COMPILED_RELEASE: Release = Release::R2;

/// `CUDNN_VERSION` of the headers the proxy table mirrors.
pub const CUDNN_VERSION: usize = COMPILED_RELEASE.min_version();
