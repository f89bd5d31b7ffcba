use thiserror::Error;

use super::registry::RegistryError;

/// Top-level error for library callers and the binary.
///
/// Format and file-read problems never surface here; they are recovered
/// inside input resolution and reported as [`super::Rejection`] diagnostics.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NpchkError {
    /// Console I/O failed.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The registry client could not be built or called.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}
