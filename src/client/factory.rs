//! Client construction seam.

use crate::client::Credentials;

/// Capability interface for constructing API clients.
///
/// Implementations own credential handling and transport configuration; the
/// registry only forwards what it was given and stores what comes back. The
/// registry calls this exactly once per
/// [`create_and_register`](crate::registry::ClientRegistry::create_and_register)
/// invocation and never during `get`/`register`/`remove`.
pub trait ClientFactory: Send + Sync {
    /// Client type produced by this factory.
    type Client: Send + Sync + 'static;

    /// Construction options, forwarded untouched by the registry.
    ///
    /// Factories with nothing to configure use `()`.
    type Options;

    /// Error surfaced when construction fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build a client for `credentials`, applying `options`.
    ///
    /// Any timeout on construction is the factory's responsibility; the
    /// registry never holds its lock across this call.
    fn create_client(
        &self,
        credentials: &Credentials,
        options: Self::Options,
    ) -> Result<Self::Client, Self::Error>;
}
