//! # Error Types
//!
//! Structured error types for registry operations using thiserror.
//! There are exactly two failure paths: a lookup miss and a failed
//! client construction. Every other operation is infallible.

use thiserror::Error;

/// Errors surfaced by [`ClientRegistry`](crate::registry::ClientRegistry) operations
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No client is registered under the requested name.
    ///
    /// Expected for a cold registry rather than a system fault. Callers
    /// should construct and register a client instead of retrying the
    /// lookup.
    #[error("client not found in registry: {name}")]
    ClientNotFound { name: String },

    /// The client factory failed while constructing a client.
    ///
    /// The factory's error is carried unchanged as the source so callers
    /// can inspect or downcast the underlying cause. The registry mapping
    /// is left untouched on this path.
    #[error("failed to construct client for '{name}'")]
    ClientConstruction {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
