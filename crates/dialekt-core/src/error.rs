//! Error types for the dialekt abstraction layer.
//!
//! Hard failures are rare here: unsupported operations are signaled with
//! `Option::None`, not errors. An `Error` means the requested output is
//! genuinely unconstructable (a URL with no identifying components, an
//! unknown vendor id) or a delegated read failed downstream.

use thiserror::Error;

/// Result type alias for dialekt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for dialekt operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No vendor variant is registered under this id.
    #[error("Unknown vendor id: {id}")]
    UnknownVendor { id: String },

    /// A connection URL cannot be built from the given components.
    #[error("Unable to construct {vendor} URL: {reason}")]
    MalformedUrl {
        vendor: &'static str,
        reason: String,
    },

    /// The executor failed while running an introspection query.
    #[error("Introspection query failed: {message}")]
    Execution { message: String },
}

impl Error {
    /// Wrap a downstream executor failure.
    pub fn execution(message: impl Into<String>) -> Self {
        Error::Execution {
            message: message.into(),
        }
    }
}
