//! Boundary to the remote registry service.

use thiserror::Error;

use super::query::QueryBatch;
use super::status::StatusResult;

/// Error from a registry call.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// Network or HTTP transport error.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a fault or an unexpected HTTP status.
    #[error("service error: {0}")]
    Service(String),

    /// The response could not be parsed.
    #[error("response parse error: {0}")]
    Parse(String),
}

/// A synchronous batch-in, statuses-out call to the registry.
///
/// The returned results carry the same or fewer INNs than the submitted
/// batch, in the registry's own delivery order. That order is not
/// guaranteed to match submission order and is reported as delivered.
pub trait RegistryClient {
    fn check(&self, batch: &QueryBatch) -> Result<Vec<StatusResult>, RegistryError>;
}
