#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Client Registry
//!
//! Thread-safe, in-memory registry that maps a string identifier to a
//! previously constructed API client instance, so concurrent tasks can
//! share and replace client instances by name instead of rebuilding them.
//!
//! ## Overview
//!
//! Constructing an API client usually means credential handling, TLS setup,
//! and a session handshake, which is worth doing once per endpoint rather
//! than once per caller. [`ClientRegistry`] keeps constructed clients behind a single
//! reader/writer lock with get / register / remove /
//! construct-and-register operations. It is a guarded mapping, not a cache:
//! no eviction, expiry, sizing, or persistence.
//!
//! Client construction itself stays outside this crate, behind the
//! [`ClientFactory`] capability interface supplied by the surrounding
//! system.
//!
//! ## Module Organization
//!
//! - [`client`] - Credentials and the client construction seam
//! - [`error`] - Structured error handling
//! - [`logging`] - Tracing subscriber setup for hosts and tests
//! - [`registry`] - The guarded name-to-client mapping
//!
//! ## Quick Start
//!
//! ```rust
//! use client_registry::{ClientFactory, ClientRegistry, Credentials};
//!
//! struct ApiClient {
//!     endpoint: String,
//! }
//!
//! struct ApiClientFactory;
//!
//! impl ClientFactory for ApiClientFactory {
//!     type Client = ApiClient;
//!     type Options = ();
//!     type Error = std::io::Error;
//!
//!     fn create_client(
//!         &self,
//!         credentials: &Credentials,
//!         _options: (),
//!     ) -> Result<ApiClient, std::io::Error> {
//!         Ok(ApiClient {
//!             endpoint: credentials.endpoint.clone(),
//!         })
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ClientRegistry::new();
//! let credentials = Credentials::new("cluster1.example.com", "admin", "secret");
//!
//! // Construct once, share everywhere
//! registry.create_and_register("cluster1", &ApiClientFactory, &credentials, ())?;
//! let client = registry.get("cluster1")?;
//! assert_eq!(client.endpoint, "cluster1.example.com");
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! All operations are synchronous and safe to call from any number of
//! threads or async tasks; `ClientRegistry` handles are `Clone` and share
//! the same underlying mapping. Lookups take a shared lock and never block
//! each other. Client construction runs outside the lock, so two concurrent
//! construct-and-register calls for the same name may both build a client;
//! the later write wins.

pub mod client;
pub mod error;
pub mod logging;
pub mod registry;

pub use client::{ClientFactory, Credentials};
pub use error::{RegistryError, Result};
pub use registry::ClientRegistry;
