//! Core pipeline: INN validation, input resolution, batch assembly,
//! status reporting, and the interactive session loop.
//!
//! The remote registry itself sits behind the [`RegistryClient`] trait;
//! the `client` feature provides the SOAP implementation.

mod error;
mod inn;
mod query;
mod registry;
mod resolve;
mod session;
mod status;

pub use error::*;
pub use inn::*;
pub use query::*;
pub use registry::*;
pub use resolve::*;
pub use session::*;
pub use status::*;
