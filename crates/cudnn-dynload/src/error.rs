use crate::sys::cudnnStatus_t;

#[derive(Debug, thiserror::Error)]
pub enum DynloadError {
    #[error("failed to load cuDNN library (tried {}): {last_error}", .tried.join(", "))]
    LibraryNotFound {
        tried: Vec<String>,
        last_error: String,
    },

    #[error("cuDNN symbol {symbol} not found")]
    SymbolNotFound {
        symbol: String,
        #[source]
        source: libloading::Error,
    },

    #[error("cuDNN call {call} failed with {name} ({status})")]
    Status {
        call: &'static str,
        status: cudnnStatus_t,
        name: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DynloadError>;
